pub mod curve;
pub mod surface;

pub use curve::{Curve, CurveDomain, MobiusEdge};
pub use surface::{FundamentalForm, MobiusStrip, Surface, SurfaceDomain};
