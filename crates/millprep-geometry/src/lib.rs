//! # millprep Geometry
//!
//! Triangle mesh model and the import pipeline that turns untrusted mesh
//! files into sound, deduplicated meshes.
//!
//! ## Pipeline
//!
//! ```text
//! file ──load_stl──> raw Mesh ──validate──> bool
//!                         │
//!                         └──repair_simple──> non-degenerate, welded Mesh
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use millprep_geometry::MeshImporter;
//!
//! let mut mesh = MeshImporter::load_stl("part.stl")?;
//! if MeshImporter::validate(&mesh) {
//!     let summary = MeshImporter::repair_simple(&mut mesh);
//!     println!("{summary}");
//! }
//! # Ok::<(), millprep_core::ImportError>(())
//! ```

pub mod importer;
pub mod mesh;
pub mod repair;

pub use importer::{MeshFormat, MeshImporter, StlReadError};
pub use mesh::{Bounds, Mesh, Triangle};
pub use repair::{
    repair_mesh, RepairParams, RepairSummary, DEFAULT_DEGENERATE_AREA_SQ, DEFAULT_WELD_TOLERANCE,
};
