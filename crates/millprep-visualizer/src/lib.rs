//! # millprep Visualizer
//!
//! The boundary between the mesh pipeline and an external 3D renderer.
//!
//! A renderer owns the GPU side. This crate gives it:
//! - [`MeshDrawable`]: view/model extents and vertex count for camera fitting
//! - [`MeshDrawer`]: holds a copy of a mesh and expands it into flat,
//!   upload-ready [`VertexData`] (one entry per triangle corner)

pub mod drawable;
pub mod mesh_drawer;
pub mod vertex;

pub use drawable::MeshDrawable;
pub use mesh_drawer::{MeshDrawer, MESH_COLOR};
pub use vertex::{VertexData, VertexKind};
