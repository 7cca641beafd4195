use tracing::debug;

use crate::geometry::surface::Surface;
use crate::math::{linspace, simpson_2d, Grid};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the surface area of a parametric surface.
///
/// Evaluates the area element `sqrt(EG - F²)` on an `n × n` grid over the
/// surface's parameter domain and integrates it with composite Simpson's
/// rule, first along `u` then along `v`. Accuracy is controlled only by the
/// resolution.
pub struct SurfaceArea<'a, S: Surface> {
    surface: &'a S,
    resolution: usize,
    u_offset: f64,
}

impl<'a, S: Surface + Sync> SurfaceArea<'a, S> {
    /// Creates a new `SurfaceArea` query sampling `resolution` points per axis.
    #[must_use]
    pub fn new(surface: &'a S, resolution: usize) -> Self {
        Self {
            surface,
            resolution,
            u_offset: 0.0,
        }
    }

    /// Shifts the `u` interval by `offset` without changing its length.
    ///
    /// For a surface closed in `u` the area is unchanged.
    #[must_use]
    pub fn with_u_offset(mut self, offset: f64) -> Self {
        self.u_offset = offset;
        self
    }

    /// Sample positions along `u` and `v`.
    fn samples(&self) -> (Vec<f64>, Vec<f64>) {
        let d = self.surface.domain();
        let u = linspace(
            d.u_min + self.u_offset,
            d.u_max + self.u_offset,
            self.resolution,
        );
        let v = linspace(d.v_min, d.v_max, self.resolution);
        (u, v)
    }

    /// Area element sampled on the grid. Rows are `v` samples, columns `u`.
    #[must_use]
    pub fn integrand(&self) -> Grid {
        let (u, v) = self.samples();
        let (rows, cols) = (v.len(), u.len());
        // Column-major, matching `Grid` storage.
        let cell = |k: usize| self.surface.area_element(u[k / rows], v[k % rows]);

        #[cfg(feature = "parallel")]
        let data: Vec<f64> = (0..rows * cols).into_par_iter().map(cell).collect();
        #[cfg(not(feature = "parallel"))]
        let data: Vec<f64> = (0..rows * cols).map(cell).collect();

        Grid::from_vec(rows, cols, data)
    }

    /// Executes the query, returning the surface area.
    ///
    /// The result is not clamped: degenerate surfaces may give zero, negative
    /// or NaN values.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let (u, v) = self.samples();
        if u.len() < 2 {
            return 0.0;
        }
        let du = u[1] - u[0];
        let dv = v[1] - v[0];
        let area = simpson_2d(&self.integrand(), du, dv);
        debug!(resolution = self.resolution, du, dv, area, "integrated surface area");
        area
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::surface::{MobiusStrip, SurfaceDomain};
    use crate::math::{Point3, Vector3};
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    /// Flat annulus in the XY plane, `P(u, r) = (r cos u, r sin u, 0)`.
    struct Annulus {
        inner: f64,
        outer: f64,
    }

    impl Surface for Annulus {
        fn evaluate(&self, u: f64, v: f64) -> Point3 {
            Point3::new(v * u.cos(), v * u.sin(), 0.0)
        }

        fn partials(&self, u: f64, v: f64) -> (Vector3, Vector3) {
            (
                Vector3::new(-v * u.sin(), v * u.cos(), 0.0),
                Vector3::new(u.cos(), u.sin(), 0.0),
            )
        }

        fn domain(&self) -> SurfaceDomain {
            SurfaceDomain::new(0.0, TAU, self.inner, self.outer)
        }
    }

    #[test]
    fn annulus_area_is_exact() {
        let a = Annulus {
            inner: 1.0,
            outer: 3.0,
        };
        for n in [5, 8, 33] {
            let area = SurfaceArea::new(&a, n).execute();
            assert_relative_eq!(area, 8.0 * PI, max_relative = 1e-12);
        }
    }

    #[test]
    fn integrand_shape_and_layout() {
        let s = MobiusStrip::new(1.0, 0.3);
        let q = SurfaceArea::new(&s, 7);
        let grid = q.integrand();
        assert_eq!(grid.shape(), (7, 7));
        // Row 0 is v = -w/2, column 0 is u = 0.
        let v: f64 = -0.15;
        let expected = ((1.0 + v).powi(2) + v * v / 4.0).sqrt();
        assert_relative_eq!(grid[(0, 0)], expected, max_relative = 1e-12);
        // Last column is u = 2pi, where cos(u/2) = -1.
        let expected = ((1.0 - v).powi(2) + v * v / 4.0).sqrt();
        assert_relative_eq!(grid[(0, 6)], expected, max_relative = 1e-12);
    }

    #[test]
    fn mobius_area_near_centerline_estimate() {
        // Area ~ 2 pi R w for a narrow strip.
        let s = MobiusStrip::new(1.0, 0.3);
        let area = SurfaceArea::new(&s, 200).execute();
        assert_relative_eq!(area, TAU * 0.3, max_relative = 1e-2);
        assert!(area > TAU * 0.3);
    }

    #[test]
    fn zero_width_has_zero_area() {
        let s = MobiusStrip::new(1.0, 0.0);
        let area = SurfaceArea::new(&s, 100).execute();
        assert!(area.abs() < 1e-12);
    }

    #[test]
    fn area_shrinks_with_width() {
        let r = 1.0;
        let mut last = f64::INFINITY;
        for w in [0.4, 0.1, 0.01, 0.001] {
            let area = SurfaceArea::new(&MobiusStrip::new(r, w), 51).execute();
            assert!(area < last);
            last = area;
        }
        assert!(last < 1e-2);
    }

    #[test]
    fn refinement_converges() {
        let s = MobiusStrip::new(1.0, 0.5);
        let areas: Vec<f64> = [11, 21, 41, 81]
            .iter()
            .map(|&n| SurfaceArea::new(&s, n).execute())
            .collect();
        let diffs: Vec<f64> = areas.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
        assert!(diffs[1] < diffs[0]);
        assert!(diffs[2] < diffs[1]);
    }

    #[test]
    fn invariant_under_u_offset() {
        let s = MobiusStrip::new(1.0, 0.3);
        let base = SurfaceArea::new(&s, 101).execute();
        for offset in [0.5, PI, 4.0] {
            let shifted = SurfaceArea::new(&s, 101).with_u_offset(offset).execute();
            assert_relative_eq!(base, shifted, max_relative = 1e-8);
        }
    }

    #[test]
    fn single_sample_gives_zero() {
        let s = MobiusStrip::new(1.0, 0.3);
        assert!(SurfaceArea::new(&s, 1).execute().abs() < f64::EPSILON);
    }

    #[test]
    fn negative_radius_is_accepted() {
        let s = MobiusStrip::new(-1.0, 0.3);
        let area = SurfaceArea::new(&s, 51).execute();
        assert!(area.is_finite());
    }

    #[test]
    fn nan_radius_propagates() {
        let s = MobiusStrip::new(f64::NAN, 0.3);
        assert!(SurfaceArea::new(&s, 11).execute().is_nan());
    }
}
