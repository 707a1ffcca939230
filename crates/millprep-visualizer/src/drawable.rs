//! Capability trait a renderer uses to show a mesh and query its extents.

use glam::Vec3;
use millprep_geometry::Mesh;

/// What an external renderer needs from a mesh it displays.
///
/// View and model extents coincide unless an implementor applies a view
/// transform, so the `model_*` methods default to the `view_*` ones.
pub trait MeshDrawable {
    /// Replace the displayed mesh with a copy of `mesh`.
    fn set_mesh(&mut self, mesh: &Mesh);

    fn clear_mesh(&mut self);

    /// Renderable vertex count: three per triangle, 0 without a mesh.
    fn vertex_count(&self) -> usize;

    /// Per-axis extent (upper minus lower).
    fn view_ranges(&self) -> Vec3;

    fn view_lower_bounds(&self) -> Vec3;

    fn view_upper_bounds(&self) -> Vec3;

    fn model_ranges(&self) -> Vec3 {
        self.view_ranges()
    }

    fn model_lower_bounds(&self) -> Vec3 {
        self.view_lower_bounds()
    }

    fn model_upper_bounds(&self) -> Vec3 {
        self.view_upper_bounds()
    }
}
