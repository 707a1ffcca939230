//! Fixed-point coordinates for integer polygon clipping.
//!
//! Clipping libraries work on `i64` grids. A `scale` of integer units per
//! millimetre maps between the two; 1e6 gives nanometre resolution.

use millprep_core::Vector2d;
use serde::{Deserialize, Serialize};

use crate::polygon::{Polygon2D, PolygonSet};

/// A point on the integer clipping grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClipperPoint {
    pub x: i64,
    pub y: i64,
}

/// One ring on the integer clipping grid.
pub type ClipperPath = Vec<ClipperPoint>;

impl ClipperPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn from_vector(v: &Vector2d, scale: f64) -> Self {
        Self {
            x: to_clipper_coord(v.x, scale),
            y: to_clipper_coord(v.y, scale),
        }
    }

    pub fn to_vector(self, scale: f64) -> Vector2d {
        Vector2d::new(
            from_clipper_coord(self.x, scale),
            from_clipper_coord(self.y, scale),
        )
    }
}

/// `v * scale` rounded to the nearest integer, halves away from zero.
///
/// Out-of-range products saturate at `i64::MIN`/`i64::MAX`; NaN maps to 0.
pub fn to_clipper_coord(v: f64, scale: f64) -> i64 {
    (v * scale).round() as i64
}

/// Inverse of [`to_clipper_coord`], exact up to the rounding it applied.
pub fn from_clipper_coord(iv: i64, scale: f64) -> f64 {
    iv as f64 / scale
}

impl Polygon2D {
    pub fn to_clipper_path(&self, scale: f64) -> ClipperPath {
        self.points
            .iter()
            .map(|p| ClipperPoint::from_vector(p, scale))
            .collect()
    }

    pub fn from_clipper_path(path: &[ClipperPoint], scale: f64) -> Self {
        Self::new(path.iter().map(|p| p.to_vector(scale)).collect())
    }
}

/// Convert every polygon in the set, preserving order.
pub fn polygon_set_to_clipper(polygons: &PolygonSet, scale: f64) -> Vec<ClipperPath> {
    polygons.iter().map(|p| p.to_clipper_path(scale)).collect()
}

/// Convert clipper output back to millimetre polygons, preserving order.
pub fn polygon_set_from_clipper(paths: &[ClipperPath], scale: f64) -> PolygonSet {
    paths
        .iter()
        .map(|path| Polygon2D::from_clipper_path(path, scale))
        .collect()
}
