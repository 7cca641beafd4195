mod edge_length;
mod surface_area;

pub use edge_length::{EdgeLength, EdgeRule};
pub use surface_area::SurfaceArea;
