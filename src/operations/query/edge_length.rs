use tracing::debug;

use crate::geometry::curve::Curve;
use crate::math::{gradient, linspace};

/// How per-sample arc-length increments are accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeRule {
    /// Plain sum of all per-sample increments.
    ///
    /// Each of the `n` samples contributes one full increment, so a curve
    /// of length `L` measures roughly `L * n / (n - 1)`.
    #[default]
    GradientSum,
    /// Trapezoid weights: the two end samples contribute half an increment.
    Trapezoidal,
}

/// Computes the length of a parametric curve from discrete samples.
///
/// Samples the curve uniformly over its domain, differentiates each
/// coordinate with respect to sample index (central differences inside,
/// one-sided at the ends) and accumulates the per-sample increments
/// `sqrt(dx² + dy² + dz²)` according to an [`EdgeRule`].
pub struct EdgeLength<'a, C: Curve> {
    curve: &'a C,
    samples: usize,
    rule: EdgeRule,
}

impl<'a, C: Curve> EdgeLength<'a, C> {
    /// Creates a new `EdgeLength` query with `samples` points.
    #[must_use]
    pub fn new(curve: &'a C, samples: usize) -> Self {
        Self {
            curve,
            samples,
            rule: EdgeRule::default(),
        }
    }

    /// Sets the accumulation rule.
    #[must_use]
    pub fn with_rule(mut self, rule: EdgeRule) -> Self {
        self.rule = rule;
        self
    }

    /// Per-sample arc-length increments along the curve.
    #[must_use]
    pub fn increments(&self) -> Vec<f64> {
        let d = self.curve.domain();
        let points: Vec<_> = linspace(d.t_min, d.t_max, self.samples)
            .into_iter()
            .map(|t| self.curve.evaluate(t))
            .collect();

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let zs: Vec<f64> = points.iter().map(|p| p.z).collect();

        let (dx, dy, dz) = (gradient(&xs), gradient(&ys), gradient(&zs));
        dx.iter()
            .zip(&dy)
            .zip(&dz)
            .map(|((a, b), c)| (a * a + b * b + c * c).sqrt())
            .collect()
    }

    /// Executes the query, returning the approximate curve length.
    ///
    /// Fewer than two samples measure `0.0`.
    #[must_use]
    pub fn execute(&self) -> f64 {
        if self.samples < 2 {
            return 0.0;
        }
        let ds = self.increments();
        let sum: f64 = ds.iter().sum();
        let length = match self.rule {
            EdgeRule::GradientSum => sum,
            EdgeRule::Trapezoidal => sum - 0.5 * (ds[0] + ds[ds.len() - 1]),
        };
        debug!(samples = self.samples, rule = ?self.rule, length, "measured edge length");
        length
    }
}
