//! Owned Möbius strip model: configuration, parameter grid and surface mesh.
//!
//! A [`MobiusModel`] is built once from [`MobiusParams`]. The parameter grid
//! and the `X`/`Y`/`Z` coordinate grids are computed at construction and
//! never change; surface area and edge length are evaluated on first request
//! from the closed-form parametrization and cached.

use std::cell::OnceCell;
use std::f64::consts::TAU;

use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::geometry::curve::Curve;
use crate::geometry::surface::{MobiusStrip, Surface};
use crate::math::{linspace, meshgrid, Grid, Point3};
use crate::operations::query::{EdgeLength, EdgeRule, SurfaceArea};
use crate::tessellation::{Polyline, TessellateEdge, TessellateStrip, TriangleMesh};

/// Configuration of a Möbius strip model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusParams {
    /// Centerline radius `R`.
    pub radius: f64,
    /// Strip width `w`.
    pub width: f64,
    /// Samples per parameter axis `n`.
    pub resolution: usize,
    /// Accumulation rule for the edge length.
    pub edge_rule: EdgeRule,
}

impl Default for MobiusParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width: 0.2,
            resolution: 100,
            edge_rule: EdgeRule::GradientSum,
        }
    }
}

impl MobiusParams {
    /// Creates parameters with the default edge rule.
    #[must_use]
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
            ..Self::default()
        }
    }

    /// Sets the centerline radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the strip width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the grid resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the edge-length accumulation rule.
    #[must_use]
    pub fn with_edge_rule(mut self, edge_rule: EdgeRule) -> Self {
        self.edge_rule = edge_rule;
        self
    }

    /// Checks that the parameters describe a proper strip.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or width is not finite or not
    /// positive, or if the resolution is below 2.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("radius", self.radius), ("width", self.width)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { parameter, value }.into());
            }
            if value <= 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                }
                .into());
            }
        }
        if self.resolution < 2 {
            return Err(GeometryError::Degenerate(format!(
                "resolution {} leaves fewer than two samples per axis",
                self.resolution
            ))
            .into());
        }
        Ok(())
    }
}

/// A Möbius strip sampled on a uniform `n × n` parameter grid.
///
/// Grid convention: rows are `v` samples over `[-w/2, w/2]`, columns are `u`
/// samples over `[0, 2*pi]`.
#[derive(Debug, Clone)]
pub struct MobiusModel {
    params: MobiusParams,
    strip: MobiusStrip,
    u: Vec<f64>,
    v: Vec<f64>,
    u_grid: Grid,
    v_grid: Grid,
    x: Grid,
    y: Grid,
    z: Grid,
    area: OnceCell<f64>,
    edge_length: OnceCell<f64>,
    full_edge_length: OnceCell<f64>,
}

impl Default for MobiusModel {
    fn default() -> Self {
        Self::new(MobiusParams::default())
    }
}

impl MobiusModel {
    /// Builds the model without validating the parameters.
    ///
    /// Degenerate parameters are accepted and yield meaningless but finite
    /// (or NaN) results.
    #[must_use]
    pub fn new(params: MobiusParams) -> Self {
        if let Err(err) = params.validate() {
            warn!(%err, "building Möbius model from degenerate parameters");
        }

        let strip = MobiusStrip::new(params.radius, params.width);
        let domain = strip.domain();
        let u = linspace(0.0, TAU, params.resolution);
        let v = linspace(domain.v_min, domain.v_max, params.resolution);
        let (u_grid, v_grid) = meshgrid(&u, &v);

        let points = u_grid.zip_map(&v_grid, |a, b| strip.evaluate(a, b));
        let x = points.map(|p| p.x);
        let y = points.map(|p| p.y);
        let z = points.map(|p| p.z);

        debug!(
            radius = params.radius,
            width = params.width,
            resolution = params.resolution,
            "built Möbius mesh"
        );

        Self {
            params,
            strip,
            u,
            v,
            u_grid,
            v_grid,
            x,
            y,
            z,
            area: OnceCell::new(),
            edge_length: OnceCell::new(),
            full_edge_length: OnceCell::new(),
        }
    }

    /// Builds the model after validating the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if [`MobiusParams::validate`] rejects the parameters.
    pub fn try_new(params: MobiusParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::new(params))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn params(&self) -> &MobiusParams {
        &self.params
    }

    /// Returns the underlying parametric surface.
    #[must_use]
    pub fn strip(&self) -> &MobiusStrip {
        &self.strip
    }

    /// Returns the `u` samples.
    #[must_use]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Returns the `v` samples.
    #[must_use]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Returns the `U` mesh grid.
    #[must_use]
    pub fn u_grid(&self) -> &Grid {
        &self.u_grid
    }

    /// Returns the `V` mesh grid.
    #[must_use]
    pub fn v_grid(&self) -> &Grid {
        &self.v_grid
    }

    /// Returns the `X` coordinate grid.
    #[must_use]
    pub fn x(&self) -> &Grid {
        &self.x
    }

    /// Returns the `Y` coordinate grid.
    #[must_use]
    pub fn y(&self) -> &Grid {
        &self.y
    }

    /// Returns the `Z` coordinate grid.
    #[must_use]
    pub fn z(&self) -> &Grid {
        &self.z
    }

    /// Returns the mesh point at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> Option<Point3> {
        let x = self.x.get((row, col))?;
        let y = self.y.get((row, col))?;
        let z = self.z.get((row, col))?;
        Some(Point3::new(*x, *y, *z))
    }

    /// Total surface area of the strip.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        *self
            .area
            .get_or_init(|| SurfaceArea::new(&self.strip, self.params.resolution).execute())
    }

    /// Length of the boundary traced along `v = w/2` for `u` in `[0, 2*pi]`.
    #[must_use]
    pub fn edge_length(&self) -> f64 {
        *self
            .edge_length
            .get_or_init(|| self.measure_edge(&self.strip.edge(), self.params.resolution))
    }

    /// Length of the whole closed boundary, `u` in `[0, 4*pi]`.
    ///
    /// Uses twice the resolution so the sample spacing matches
    /// [`edge_length`](Self::edge_length).
    #[must_use]
    pub fn full_edge_length(&self) -> f64 {
        *self
            .full_edge_length
            .get_or_init(|| self.measure_edge(&self.strip.full_edge(), self.full_edge_samples()))
    }

    /// Triangulates the coordinate grids for rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is below 2.
    pub fn tessellate(&self) -> Result<TriangleMesh> {
        TessellateStrip::new(self).execute()
    }

    /// Samples the one-lap boundary as a polyline for rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is below 2.
    pub fn edge_polyline(&self) -> Result<Polyline> {
        let segments = self.params.resolution.saturating_sub(1);
        TessellateEdge::new(&self.strip.edge(), segments).execute()
    }

    fn measure_edge<C: Curve>(&self, edge: &C, samples: usize) -> f64 {
        EdgeLength::new(edge, samples)
            .with_rule(self.params.edge_rule)
            .execute()
    }

    fn full_edge_samples(&self) -> usize {
        (2 * self.params.resolution).saturating_sub(1)
    }
}
