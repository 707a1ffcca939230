//! Mesh repair passes.
//!
//! Removes degenerate triangles and merges vertices that coincide on a fixed
//! quantisation grid. Repair does not fill holes, fix winding, or touch
//! non-manifold edges, and it never changes whether coordinates are finite.
//!
//! All passes are deterministic: survivors keep their input order and merged
//! vertices collapse onto the first member of their class.

use crate::mesh::{Mesh, Triangle};
use millprep_core::{GeometryError, Vector3d};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, info};

/// Grid spacing used for vertex welding, in mm.
pub const DEFAULT_WELD_TOLERANCE: f64 = 1e-6;

/// Triangles whose squared cross-product magnitude falls below this are
/// treated as zero-area.
pub const DEFAULT_DEGENERATE_AREA_SQ: f64 = 1e-14;

/// Thresholds for [`repair_mesh`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairParams {
    /// Quantisation grid spacing for vertex welding (mm)
    pub weld_tolerance: f64,
    /// Minimum `|(b - a) x (c - a)|^2` for a triangle to survive (mm^4)
    pub degenerate_area_sq_threshold: f64,
}

impl Default for RepairParams {
    fn default() -> Self {
        Self {
            weld_tolerance: DEFAULT_WELD_TOLERANCE,
            degenerate_area_sq_threshold: DEFAULT_DEGENERATE_AREA_SQ,
        }
    }
}

impl RepairParams {
    /// Set the vertex welding grid spacing.
    #[must_use]
    pub fn with_weld_tolerance(mut self, tolerance: f64) -> Self {
        self.weld_tolerance = tolerance;
        self
    }

    /// Set the zero-area threshold.
    #[must_use]
    pub fn with_degenerate_area_sq_threshold(mut self, threshold: f64) -> Self {
        self.degenerate_area_sq_threshold = threshold;
        self
    }

    /// Check the thresholds before any mesh is touched.
    ///
    /// The weld tolerance must be positive with a finite reciprocal; the area
    /// threshold must be finite and non-negative.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let tol = self.weld_tolerance;
        if !tol.is_finite() || tol <= 0.0 || !(1.0 / tol).is_finite() {
            return Err(GeometryError::InvalidRepairParams {
                reason: format!("weld tolerance must be a positive finite number, got {}", tol),
            });
        }

        let area = self.degenerate_area_sq_threshold;
        if !area.is_finite() || area < 0.0 {
            return Err(GeometryError::InvalidRepairParams {
                reason: format!(
                    "degenerate area threshold must be a non-negative finite number, got {}",
                    area
                ),
            });
        }

        Ok(())
    }
}

/// What a repair run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairSummary {
    pub initial_vertices: usize,
    pub initial_triangles: usize,
    pub final_vertices: usize,
    pub final_triangles: usize,
    /// Triangles dropped in the first pass (repeated or out-of-range index, zero area)
    pub degenerate_removed: usize,
    /// Vertices folded into an earlier vertex on the same grid cell
    pub vertices_merged: usize,
    /// Triangles that became degenerate after welding
    pub collapsed_removed: usize,
    /// Triangles that ended up on the same three vertices as an earlier one
    pub duplicate_removed: usize,
}

impl RepairSummary {
    /// Check if any repairs were performed.
    pub fn had_changes(&self) -> bool {
        self.degenerate_removed > 0
            || self.vertices_merged > 0
            || self.collapsed_removed > 0
            || self.duplicate_removed > 0
    }
}

impl fmt::Display for RepairSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repair: {} -> {} verts ({} merged), {} -> {} triangles ({} degenerate, {} collapsed, {} duplicate)",
            self.initial_vertices,
            self.final_vertices,
            self.vertices_merged,
            self.initial_triangles,
            self.final_triangles,
            self.degenerate_removed,
            self.collapsed_removed,
            self.duplicate_removed
        )
    }
}

/// Squared magnitude of `(b - a) x (c - a)`, i.e. four times the squared area.
pub fn triangle_area_sq(a: &Vector3d, b: &Vector3d, c: &Vector3d) -> f64 {
    (*b - *a).cross(&(*c - *a)).length_squared()
}

fn has_repeated_index(tri: &Triangle) -> bool {
    tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2]
}

fn is_zero_area(vertices: &[Vector3d], tri: &Triangle, threshold: f64) -> bool {
    let [a, b, c] = tri.map(|i| vertices[i as usize]);
    triangle_area_sq(&a, &b, &c) < threshold
}

/// Drop triangles with repeated indices, indices past the vertex list, or
/// zero area. Returns the number removed.
pub(crate) fn remove_degenerate_triangles(mesh: &mut Mesh, area_sq_threshold: f64) -> usize {
    let before = mesh.triangles.len();
    let vertex_count = mesh.vertices.len();
    let vertices = &mesh.vertices;

    mesh.triangles.retain(|tri| {
        if has_repeated_index(tri) {
            return false;
        }
        if tri.iter().any(|&i| i as usize >= vertex_count) {
            return false;
        }
        !is_zero_area(vertices, tri, area_sq_threshold)
    });

    before - mesh.triangles.len()
}

/// Quantised grid cell of a finite vertex.
fn grid_key(v: &Vector3d, scale: f64) -> (i64, i64, i64) {
    // f64::round rounds half away from zero; `as` saturates out-of-range values
    (
        (v.x * scale).round() as i64,
        (v.y * scale).round() as i64,
        (v.z * scale).round() as i64,
    )
}

/// Merge vertices that share a grid cell and remap triangles through the
/// merge. Triangles that collapse (repeated index or zero area on the merged
/// positions) are dropped.
///
/// Non-finite vertices are never merged; each keeps its own slot.
///
/// Returns `(vertices_merged, triangles_collapsed)`.
pub(crate) fn weld_vertices(mesh: &mut Mesh, params: &RepairParams) -> (usize, usize) {
    let scale = 1.0 / params.weld_tolerance;
    let mut cells: HashMap<(i64, i64, i64), u32> = HashMap::new();
    let mut welded: Vec<Vector3d> = Vec::with_capacity(mesh.vertices.len());
    let mut remap: Vec<u32> = Vec::with_capacity(mesh.vertices.len());

    for v in &mesh.vertices {
        let next = welded.len() as u32;
        let target = if v.is_finite() {
            *cells.entry(grid_key(v, scale)).or_insert(next)
        } else {
            next
        };
        if target == next {
            welded.push(*v);
        }
        remap.push(target);
    }

    let merged = mesh.vertices.len() - welded.len();
    let before = mesh.triangles.len();

    let triangles = std::mem::take(&mut mesh.triangles);
    mesh.triangles = triangles
        .into_iter()
        .filter_map(|tri| {
            let mapped = tri.map(|i| remap.get(i as usize).copied());
            let [Some(a), Some(b), Some(c)] = mapped else {
                return None;
            };
            Some([a, b, c])
        })
        .filter(|tri| !has_repeated_index(tri))
        .filter(|tri| !is_zero_area(&welded, tri, params.degenerate_area_sq_threshold))
        .collect();
    mesh.vertices = welded;

    debug!(
        "Welded {} vertices at {} mm grid, {} triangles collapsed",
        merged,
        params.weld_tolerance,
        before - mesh.triangles.len()
    );

    (merged, before - mesh.triangles.len())
}

/// Sorted copy of a triangle's indices; equal for any rotation or winding.
fn face_key(tri: &Triangle) -> Triangle {
    let mut key = *tri;
    key.sort_unstable();
    key
}

/// Drop triangles that use the same three vertices as an earlier triangle,
/// in either winding. Returns the number removed.
pub fn remove_duplicate_triangles(mesh: &mut Mesh) -> usize {
    let before = mesh.triangles.len();
    let mut seen: HashSet<Triangle> = HashSet::with_capacity(before);
    mesh.triangles.retain(|tri| seen.insert(face_key(tri)));
    before - mesh.triangles.len()
}

/// Run the full repair pipeline:
///
/// 1. Remove degenerate triangles
/// 2. Weld vertices on the quantisation grid
/// 3. Remove duplicate triangles
///
/// Fails without touching the mesh when `params` does not validate.
pub fn repair_mesh(
    mesh: &mut Mesh,
    params: &RepairParams,
) -> Result<RepairSummary, GeometryError> {
    params.validate()?;
    Ok(run_repair(mesh, params))
}

/// [`repair_mesh`] for parameters already known to validate.
pub(crate) fn run_repair(mesh: &mut Mesh, params: &RepairParams) -> RepairSummary {
    let initial_vertices = mesh.vertices.len();
    let initial_triangles = mesh.triangles.len();

    let degenerate_removed = remove_degenerate_triangles(mesh, params.degenerate_area_sq_threshold);
    let (vertices_merged, collapsed_removed) = weld_vertices(mesh, params);
    let duplicate_removed = remove_duplicate_triangles(mesh);

    let summary = RepairSummary {
        initial_vertices,
        initial_triangles,
        final_vertices: mesh.vertices.len(),
        final_triangles: mesh.triangles.len(),
        degenerate_removed,
        vertices_merged,
        collapsed_removed,
        duplicate_removed,
    };

    if summary.had_changes() {
        info!("{}", summary);
    } else {
        debug!("Repair made no changes");
    }

    summary
}
