//! Parametric Möbius strip geometry.
//!
//! Builds a single-twist Möbius strip on a uniform parameter grid and
//! measures it numerically: surface area by composite Simpson quadrature of
//! the area element `sqrt(EG - F²)`, and boundary length by summing discrete
//! arc-length increments along `v = w/2`.
//!
//! ```
//! use mobius::{MobiusModel, MobiusParams};
//!
//! let model = MobiusModel::new(MobiusParams::new(1.0, 0.3, 200));
//! let area = model.surface_area();
//! let edge = model.edge_length();
//! assert!(area > 1.8 && area < 1.95);
//! assert!(edge > 6.2 && edge < 6.5);
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod tessellation;

pub use error::{MobiusError, Result};
pub use model::{MobiusModel, MobiusParams};
