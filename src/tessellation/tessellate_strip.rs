use crate::error::{Result, TessellationError};
use crate::geometry::surface::Surface;
use crate::math::{Point2, Point3, Vector3};
use crate::model::MobiusModel;

use super::TriangleMesh;

/// Triangulates the sampled grid of a [`MobiusModel`].
///
/// One vertex per grid node, in row-major order over the model's grids (row
/// = `v` sample, column = `u` sample), so vertex `row * n + col` is the
/// point `(X, Y, Z)[(row, col)]`. Each grid cell becomes two triangles.
/// The `u = 0` and `u = 2*pi` columns are kept as separate vertices.
pub struct TessellateStrip<'a> {
    model: &'a MobiusModel,
}

impl<'a> TessellateStrip<'a> {
    /// Creates a new `TessellateStrip` operation.
    #[must_use]
    pub fn new(model: &'a MobiusModel) -> Self {
        Self { model }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has fewer than two samples per axis or
    /// too many vertices for 32-bit indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let model = self.model;
        let (rows, cols) = model.x().shape();
        if rows < 2 || cols < 2 {
            return Err(TessellationError::InvalidParameters(format!(
                "grid of {rows}x{cols} samples cannot be triangulated"
            ))
            .into());
        }
        if rows * cols > u32::MAX as usize {
            return Err(TessellationError::InvalidParameters(format!(
                "grid of {rows}x{cols} samples exceeds 32-bit indexing"
            ))
            .into());
        }

        let strip = model.strip();
        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(rows * cols);
        mesh.normals.reserve(rows * cols);
        mesh.uvs.reserve(rows * cols);
        mesh.indices.reserve((rows - 1) * (cols - 1) * 2);

        for iv in 0..rows {
            let v = model.v()[iv];
            for iu in 0..cols {
                let u = model.u()[iu];
                let at = (iv, iu);
                mesh.vertices
                    .push(Point3::new(model.x()[at], model.y()[at], model.z()[at]));
                mesh.normals.push(strip.normal(u, v).unwrap_or(Vector3::z()));
                mesh.uvs.push(Point2::new(u, v));
            }
        }

        for iv in 0..rows - 1 {
            for iu in 0..cols - 1 {
                let i00 = (iv * cols + iu) as u32;
                let i10 = (iv * cols + iu + 1) as u32;
                let i01 = ((iv + 1) * cols + iu) as u32;
                let i11 = ((iv + 1) * cols + iu + 1) as u32;
                mesh.indices.push([i00, i10, i11]);
                mesh.indices.push([i00, i11, i01]);
            }
        }

        Ok(mesh)
    }
}
