//! Composite quadrature and discrete differentiation on uniform samples.
//!
//! Every routine assumes uniformly spaced samples with step `dx`. Short
//! inputs degrade gracefully instead of failing: fewer than two samples
//! integrate to `0.0`.

use super::Grid;

/// Integrates uniformly spaced samples with composite Simpson's rule.
///
/// - odd sample count: classic composite Simpson;
/// - even sample count (at least 4): Simpson over the first `n - 1` samples,
///   plus the exact integral of the parabola through the last three samples
///   over the final interval, `dx/12 * (5 y[n-1] + 8 y[n-2] - y[n-3])`;
/// - two samples: trapezoid;
/// - fewer than two samples: `0.0`.
#[must_use]
pub fn simpson(y: &[f64], dx: f64) -> f64 {
    let n = y.len();
    match n {
        0 | 1 => 0.0,
        2 => 0.5 * dx * (y[0] + y[1]),
        _ if n % 2 == 1 => simpson_odd(y, dx),
        _ => {
            let head = simpson_odd(&y[..n - 1], dx);
            let tail = dx / 12.0 * (5.0 * y[n - 1] + 8.0 * y[n - 2] - y[n - 3]);
            head + tail
        }
    }
}

/// Composite Simpson over an odd number (>= 3) of samples.
fn simpson_odd(y: &[f64], dx: f64) -> f64 {
    let last = y.len() - 1;
    let interior: f64 = y[1..last]
        .iter()
        .enumerate()
        .map(|(k, &yi)| if k % 2 == 0 { 4.0 * yi } else { 2.0 * yi })
        .sum();
    dx / 3.0 * (y[0] + interior + y[last])
}

/// Integrates a 2D grid of samples over a rectangle.
///
/// Each row is integrated along the column axis with step `du`, then the
/// per-row results are integrated along the row axis with step `dv`. Both
/// passes use [`simpson`], so the even/odd policy matches on both axes.
#[must_use]
pub fn simpson_2d(values: &Grid, du: f64, dv: f64) -> f64 {
    let per_row: Vec<f64> = values
        .row_iter()
        .map(|row| {
            let samples: Vec<f64> = row.iter().copied().collect();
            simpson(&samples, du)
        })
        .collect();
    simpson(&per_row, dv)
}

/// Integrates uniformly spaced samples with the composite trapezoid rule.
#[must_use]
pub fn trapezoid(y: &[f64], dx: f64) -> f64 {
    if y.len() < 2 {
        return 0.0;
    }
    let inner: f64 = y.windows(2).map(|w| w[0] + w[1]).sum();
    0.5 * dx * inner
}

/// Discrete derivative with respect to sample index.
///
/// Central differences `(y[i+1] - y[i-1]) / 2` at interior samples and
/// one-sided differences at both ends. Fewer than two samples yield zeros.
#[must_use]
pub fn gradient(y: &[f64]) -> Vec<f64> {
    let n = y.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let mut out = Vec::with_capacity(n);
    out.push(y[1] - y[0]);
    out.extend(y.windows(3).map(|w| 0.5 * (w[2] - w[0])));
    out.push(y[n - 1] - y[n - 2]);
    out
}
