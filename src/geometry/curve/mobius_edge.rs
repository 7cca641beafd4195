use std::f64::consts::TAU;

use crate::geometry::surface::{MobiusStrip, Surface};
use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// The boundary of a Möbius strip, traced along `v = w/2`.
///
/// `P(t) = strip(t, w/2)`. Over one lap (`t` in `[0, 2*pi]`) the curve ends
/// at `strip(0, -w/2)`, so it is open; over two laps it closes on itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusEdge {
    strip: MobiusStrip,
    laps: u8,
}

impl MobiusEdge {
    /// Creates the one-lap boundary curve.
    #[must_use]
    pub fn new(strip: MobiusStrip) -> Self {
        Self { strip, laps: 1 }
    }

    /// Creates the two-lap, closed boundary curve.
    #[must_use]
    pub fn full(strip: MobiusStrip) -> Self {
        Self { strip, laps: 2 }
    }

    /// Returns the strip this edge bounds.
    #[must_use]
    pub fn strip(&self) -> &MobiusStrip {
        &self.strip
    }
}

impl Curve for MobiusEdge {
    fn evaluate(&self, t: f64) -> Point3 {
        self.strip.evaluate(t, self.strip.half_width())
    }

    fn derivative(&self, t: f64) -> Vector3 {
        self.strip.partials(t, self.strip.half_width()).0
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU * f64::from(self.laps))
    }

    fn is_closed(&self) -> bool {
        self.laps == 2
    }
}
