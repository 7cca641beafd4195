use super::Grid;

/// Returns `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// The last sample is exactly `end`. `n == 1` yields `[start]` and `n == 0`
/// yields an empty vector.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let t = i as f64;
                    start + step * t
                })
                .collect();
            samples[n - 1] = end;
            samples
        }
    }
}

/// Pairs two sample sequences into a 2D mesh.
///
/// Returns `(U, V)` with `v.len()` rows and `u.len()` columns, where
/// `U[(i, j)] = u[j]` and `V[(i, j)] = v[i]`.
#[must_use]
pub fn meshgrid(u: &[f64], v: &[f64]) -> (Grid, Grid) {
    let u_grid = Grid::from_fn(v.len(), u.len(), |_, j| u[j]);
    let v_grid = Grid::from_fn(v.len(), u.len(), |i, _| v[i]);
    (u_grid, v_grid)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn linspace_includes_both_ends() {
        let s = linspace(0.0, TAU, 7);
        assert_eq!(s.len(), 7);
        assert_eq!(s[0], 0.0);
        assert_eq!(s[6], TAU);
        assert!((s[3] - TAU / 2.0).abs() < 1e-15);
    }

    #[test]
    fn linspace_symmetric_interval() {
        let s = linspace(-0.15, 0.15, 3);
        assert_eq!(s[0], -0.15);
        assert!(s[1].abs() < 1e-16);
        assert_eq!(s[2], 0.15);
    }

    #[test]
    fn linspace_short_sequences() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn meshgrid_rows_follow_v() {
        let u = [0.0, 1.0, 2.0];
        let v = [10.0, 20.0];
        let (ug, vg) = meshgrid(&u, &v);
        assert_eq!(ug.shape(), (2, 3));
        assert_eq!(vg.shape(), (2, 3));
        assert_eq!(ug[(1, 2)], 2.0);
        assert_eq!(ug[(0, 2)], 2.0);
        assert_eq!(vg[(1, 0)], 20.0);
        assert_eq!(vg[(1, 2)], 20.0);
    }
}
