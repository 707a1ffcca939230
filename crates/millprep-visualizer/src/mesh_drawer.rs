//! # Mesh Drawer
//!
//! Keeps a private copy of a mesh and expands it into triangle vertices for
//! an external renderer. Extents are recomputed from the copy on each query.

use glam::Vec3;
use millprep_core::Vector3d;
use millprep_geometry::{Bounds, Mesh};
use tracing::{debug, trace};

use crate::drawable::MeshDrawable;
use crate::vertex::{VertexData, VertexKind};

/// Light grey used for every mesh vertex.
pub const MESH_COLOR: Vec3 = Vec3::splat(0.8);

fn to_vec3(v: &Vector3d) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Drawable for a single triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshDrawer {
    mesh: Mesh,
    has_mesh: bool,
    needs_update: bool,
    triangles: Vec<VertexData>,
}

impl MeshDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_mesh(&self) -> bool {
        self.has_mesh
    }

    /// True after `set_mesh`/`clear_mesh` until the next [`MeshDrawer::update_data`].
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        self.has_mesh.then_some(&self.mesh)
    }

    /// Vertex buffer built by the last successful [`MeshDrawer::update_data`].
    pub fn vertices(&self) -> &[VertexData] {
        &self.triangles
    }

    /// [`MeshDrawer::vertices`] as raw bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Rebuild the vertex buffer from the held mesh.
    ///
    /// Emits three vertices per triangle in triangle order. Triangles with an
    /// out-of-range index are skipped. Returns false when no mesh is set.
    pub fn update_data(&mut self) -> bool {
        if !self.has_mesh {
            return false;
        }

        self.triangles.clear();
        self.triangles.reserve(self.mesh.renderable_vertex_count());

        let mut skipped = 0usize;
        for i in 0..self.mesh.triangle_count() {
            let Some(corners) = self.mesh.triangle_vertices(i) else {
                skipped += 1;
                continue;
            };
            self.triangles.extend(corners.iter().map(|v| {
                VertexData::new(to_vec3(v), MESH_COLOR, Vec3::ZERO, VertexKind::Triangle)
            }));
        }

        if skipped > 0 {
            debug!(skipped, "Skipped triangles with out-of-range indices");
        }
        trace!(vertices = self.triangles.len(), "Mesh vertex buffer rebuilt");

        self.needs_update = false;
        true
    }

    fn bounds(&self) -> Option<Bounds> {
        if !self.has_mesh {
            return None;
        }
        self.mesh.bounds()
    }
}

impl MeshDrawable for MeshDrawer {
    fn set_mesh(&mut self, mesh: &Mesh) {
        self.mesh = mesh.clone();
        self.has_mesh = true;
        self.needs_update = true;
    }

    fn clear_mesh(&mut self) {
        self.mesh = Mesh::default();
        self.has_mesh = false;
        self.needs_update = true;
        self.triangles.clear();
    }

    fn vertex_count(&self) -> usize {
        if !self.has_mesh {
            return 0;
        }
        self.mesh.renderable_vertex_count()
    }

    fn view_ranges(&self) -> Vec3 {
        self.bounds()
            .map(|b| to_vec3(&b.extent()))
            .unwrap_or(Vec3::ZERO)
    }

    fn view_lower_bounds(&self) -> Vec3 {
        self.bounds().map(|b| to_vec3(&b.min)).unwrap_or(Vec3::ZERO)
    }

    fn view_upper_bounds(&self) -> Vec3 {
        self.bounds().map(|b| to_vec3(&b.max)).unwrap_or(Vec3::ZERO)
    }
}
