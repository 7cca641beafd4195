use crate::error::{Result, TessellationError};
use crate::geometry::curve::Curve;
use crate::math::linspace;

use super::Polyline;

/// Tessellates a curve into a polyline of uniform parameter steps.
pub struct TessellateEdge<'a, C: Curve> {
    curve: &'a C,
    segments: usize,
}

impl<'a, C: Curve> TessellateEdge<'a, C> {
    /// Creates a new `TessellateEdge` operation.
    #[must_use]
    pub fn new(curve: &'a C, segments: usize) -> Self {
        Self { curve, segments }
    }

    /// Executes the tessellation, returning `segments + 1` points.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero.
    pub fn execute(&self) -> Result<Polyline> {
        if self.segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "edge polyline needs at least one segment".into(),
            )
            .into());
        }
        let d = self.curve.domain();
        let points = linspace(d.t_min, d.t_max, self.segments + 1)
            .into_iter()
            .map(|t| self.curve.evaluate(t))
            .collect();
        Ok(Polyline { points })
    }
}
