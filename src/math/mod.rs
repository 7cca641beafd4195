mod grid;
mod quadrature;

pub use grid::{linspace, meshgrid};
pub use quadrature::{gradient, simpson, simpson_2d, trapezoid};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Dense real-valued grid. Rows index v-samples, columns index u-samples.
pub type Grid = nalgebra::DMatrix<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
