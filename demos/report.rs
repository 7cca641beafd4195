//! Prints the surface area and edge length of a Möbius strip.
//!
//! Usage:
//! ```text
//! cargo run --example report                  # R = 1.0, w = 0.3, n = 200
//! cargo run --example report -- 2.0 0.5 400   # R, w, n
//! ```

use mobius::operations::query::EdgeRule;
use mobius::{MobiusModel, MobiusParams, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for mobius.
    // Override with RUST_LOG env var (e.g. RUST_LOG=mobius=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mobius=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let defaults = MobiusParams::new(1.0, 0.3, 200);
    let params = MobiusParams::new(
        args.next().and_then(|s| s.parse().ok()).unwrap_or(defaults.radius),
        args.next().and_then(|s| s.parse().ok()).unwrap_or(defaults.width),
        args.next().and_then(|s| s.parse().ok()).unwrap_or(defaults.resolution),
    );

    let model = MobiusModel::try_new(params)?;
    let mesh = model.tessellate()?;

    println!(
        "Möbius strip R = {}, w = {}, n = {}",
        params.radius, params.width, params.resolution
    );
    println!("Surface area:              {:.10}", model.surface_area());
    println!("Edge length:               {:.10}", model.edge_length());

    let corrected = MobiusModel::new(params.with_edge_rule(EdgeRule::Trapezoidal));
    println!("Edge length (trapezoidal): {:.10}", corrected.edge_length());
    println!("Full boundary length:      {:.10}", corrected.full_edge_length());
    println!(
        "Mesh: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.indices.len()
    );
    Ok(())
}
