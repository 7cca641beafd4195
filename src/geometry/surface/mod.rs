mod mobius;

pub use mobius::MobiusStrip;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Parameter domain for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the U parameter range.
    pub u_min: f64,
    /// End of the U parameter range.
    pub u_max: f64,
    /// Start of the V parameter range.
    pub v_min: f64,
    /// End of the V parameter range.
    pub v_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Self {
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }
}

/// Coefficients of the first fundamental form at a surface point.
///
/// `E = Pu·Pu`, `F = Pu·Pv`, `G = Pv·Pv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalForm {
    pub e: f64,
    pub f: f64,
    pub g: f64,
}

impl FundamentalForm {
    /// Builds the coefficients from the two tangent vectors.
    #[must_use]
    pub fn from_partials(du: &Vector3, dv: &Vector3) -> Self {
        Self {
            e: du.dot(du),
            f: du.dot(dv),
            g: dv.dot(dv),
        }
    }

    /// Local area element `sqrt(EG - F²)`.
    ///
    /// The radicand is not clamped, so a rounding-negative value yields NaN.
    #[must_use]
    pub fn area_element(&self) -> f64 {
        (self.e * self.g - self.f * self.f).sqrt()
    }
}

/// Trait for parametric surfaces in 3D space.
pub trait Surface {
    /// Evaluates the surface at parameters `(u, v)`, returning the 3D point.
    fn evaluate(&self, u: f64, v: f64) -> Point3;

    /// Returns the analytic partial derivatives `(∂P/∂u, ∂P/∂v)`.
    fn partials(&self, u: f64, v: f64) -> (Vector3, Vector3);

    /// Returns the parameter domain of the surface.
    fn domain(&self) -> SurfaceDomain;

    /// First fundamental form at `(u, v)`.
    fn fundamental_form(&self, u: f64, v: f64) -> FundamentalForm {
        let (du, dv) = self.partials(u, v);
        FundamentalForm::from_partials(&du, &dv)
    }

    /// Local area-stretch factor at `(u, v)`.
    fn area_element(&self, u: f64, v: f64) -> f64 {
        self.fundamental_form(u, v).area_element()
    }

    /// Computes the unit surface normal `Pu × Pv` at `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] where the tangents are parallel.
    fn normal(&self, u: f64, v: f64) -> Result<Vector3> {
        let (du, dv) = self.partials(u, v);
        let n = du.cross(&dv);
        let len = n.norm();
        if len < TOLERANCE || !len.is_finite() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(n / len)
    }
}
