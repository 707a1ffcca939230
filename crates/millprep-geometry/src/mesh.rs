//! # Triangle Mesh
//!
//! Indexed triangle mesh: a vertex list plus triangles referring to it by
//! position. A freshly imported mesh makes no promises; run
//! [`MeshImporter::validate`](crate::MeshImporter::validate) and
//! [`MeshImporter::repair_simple`](crate::MeshImporter::repair_simple) before
//! handing it to consumers.

use millprep_core::Vector3d;
use serde::{Deserialize, Serialize};

/// Three vertex indices into [`Mesh::vertices`]
pub type Triangle = [u32; 3];

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vector3d,
    pub max: Vector3d,
}

impl Bounds {
    /// Size along each axis (`max - min`)
    pub fn extent(&self) -> Vector3d {
        self.max - self.min
    }

    pub fn center(&self) -> Vector3d {
        (self.min + self.max) * 0.5
    }
}

/// Indexed triangle mesh in millimetres
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions; a vertex's index is its position in this list
    pub vertices: Vec<Vector3d>,
    /// Triangles as index triples into `vertices`
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh has neither vertices nor triangles.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.triangles.is_empty()
    }

    /// Number of vertices a renderer emits: three per triangle, no sharing.
    pub fn renderable_vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Corner positions of triangle `index`, or `None` if the triangle does
    /// not exist or refers to a missing vertex.
    pub fn triangle_vertices(&self, index: usize) -> Option<[Vector3d; 3]> {
        let tri = self.triangles.get(index)?;
        Some([
            *self.vertices.get(tri[0] as usize)?,
            *self.vertices.get(tri[1] as usize)?,
            *self.vertices.get(tri[2] as usize)?,
        ])
    }

    /// Axis-aligned bounds over all vertices, `None` for a vertex-less mesh.
    ///
    /// Each axis is reduced independently in a single pass.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.vertices.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(v), max.max(v)));
        Some(Bounds { min, max })
    }
}
