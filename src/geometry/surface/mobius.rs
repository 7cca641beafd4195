use std::f64::consts::TAU;

use crate::geometry::curve::MobiusEdge;
use crate::math::{Point3, Vector3};

use super::{Surface, SurfaceDomain};

/// A single-twist Möbius strip.
///
/// Defined by the centerline radius `R` and the strip width `w`:
///
/// `P(u, v) = ((R + v cos(u/2)) cos(u), (R + v cos(u/2)) sin(u), v sin(u/2))`
///
/// Parameters: `u` in `[0, 2*pi]`, `v` in `[-w/2, w/2]`. The half-angle
/// `u/2` turns the cross-section by half a revolution per lap.
///
/// No validation is performed; non-positive radius or width produce a
/// degenerate or self-intersecting surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusStrip {
    radius: f64,
    width: f64,
}

impl MobiusStrip {
    /// Creates a new Möbius strip.
    #[must_use]
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }

    /// Returns the centerline radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the strip width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the strip width, the `v` of the boundary.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Boundary curve `v = w/2` over one lap, `u` in `[0, 2*pi]`.
    #[must_use]
    pub fn edge(&self) -> MobiusEdge {
        MobiusEdge::new(*self)
    }

    /// Boundary curve `v = w/2` over two laps, `u` in `[0, 4*pi]`.
    ///
    /// This is the whole physical edge: the second lap covers what the first
    /// lap's `v = -w/2` side would.
    #[must_use]
    pub fn full_edge(&self) -> MobiusEdge {
        MobiusEdge::full(*self)
    }
}

impl Surface for MobiusStrip {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let (su, cu) = u.sin_cos();
        let (sh, ch) = (u / 2.0).sin_cos();
        let r = self.radius + v * ch;
        Point3::new(r * cu, r * su, v * sh)
    }

    fn partials(&self, u: f64, v: f64) -> (Vector3, Vector3) {
        let (su, cu) = u.sin_cos();
        let (sh, ch) = (u / 2.0).sin_cos();
        let r = self.radius + v * ch;
        let half_v = v / 2.0;
        let du = Vector3::new(
            -su * r - half_v * sh * cu,
            cu * r - half_v * sh * su,
            half_v * ch,
        );
        let dv = Vector3::new(cu * ch, su * ch, sh);
        (du, dv)
    }

    fn domain(&self) -> SurfaceDomain {
        let h = self.half_width();
        SurfaceDomain::new(0.0, TAU, -h, h)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn strip() -> MobiusStrip {
        MobiusStrip::new(1.0, 0.3)
    }

    #[test]
    fn origin_maps_to_radius_on_x_axis() {
        for (r, w) in [(1.0, 0.2), (2.5, 0.7), (0.3, 5.0)] {
            let p = MobiusStrip::new(r, w).evaluate(0.0, 0.0);
            assert_eq!(p, Point3::new(r, 0.0, 0.0));
        }
    }

    #[test]
    fn evaluate_quarter_turn() {
        let s = strip();
        let p = s.evaluate(FRAC_PI_2, 0.1);
        let c = (PI / 4.0).cos();
        let expected = Point3::new(0.0, 1.0 + 0.1 * c, 0.1 * c);
        assert!((p - expected).norm() < 1e-12);
    }

    #[test]
    fn half_twist_after_one_lap() {
        // After a full lap the cross-section is reversed: P(2pi, v) = P(0, -v).
        let s = strip();
        let a = s.evaluate(TAU, 0.12);
        let b = s.evaluate(0.0, -0.12);
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn partials_match_finite_differences() {
        let s = strip();
        let h = 1e-6;
        for &(u, v) in &[(0.3, 0.1), (2.0, -0.14), (5.5, 0.05)] {
            let (du, dv) = s.partials(u, v);
            let fd_u = (s.evaluate(u + h, v) - s.evaluate(u - h, v)) / (2.0 * h);
            let fd_v = (s.evaluate(u, v + h) - s.evaluate(u, v - h)) / (2.0 * h);
            assert!((du - fd_u).norm() < 1e-8, "du mismatch at ({u}, {v})");
            assert!((dv - fd_v).norm() < 1e-8, "dv mismatch at ({u}, {v})");
        }
    }

    #[test]
    fn fundamental_form_is_orthogonal() {
        // F = 0, G = 1, E = (R + v cos(u/2))^2 + v^2/4.
        let s = strip();
        for &(u, v) in &[(0.0, 0.15), (1.2, -0.07), (4.0, 0.1)] {
            let ff = s.fundamental_form(u, v);
            let r = 1.0 + v * (u / 2.0).cos();
            assert!(ff.f.abs() < 1e-12);
            assert!((ff.g - 1.0).abs() < 1e-12);
            assert!((ff.e - (r * r + v * v / 4.0)).abs() < 1e-12);
            assert!((s.area_element(u, v) - ff.e.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn normal_on_centerline() {
        // At u=0, v=0: Pu = (0, R, 0), Pv = (1, 0, 0), so n = -Z.
        let n = strip().normal(0.0, 0.0).unwrap();
        assert!((n + Vector3::z()).norm() < TOLERANCE);
    }

    #[test]
    fn normal_flips_after_one_lap() {
        let s = strip();
        let n0 = s.normal(0.0, 0.0).unwrap();
        let n1 = s.normal(TAU, 0.0).unwrap();
        assert!((n0 + n1).norm() < 1e-9);
    }

    #[test]
    fn normal_degenerate_radius() {
        let s = MobiusStrip::new(0.0, 0.0);
        assert!(s.normal(1.0, 0.0).is_err());
    }

    #[test]
    fn domain_spans_width() {
        let d = strip().domain();
        assert_eq!(d.u_min, 0.0);
        assert_eq!(d.u_max, TAU);
        assert_eq!(d.v_min, -0.15);
        assert_eq!(d.v_max, 0.15);
    }
}
