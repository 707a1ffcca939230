//! # millprep
//!
//! Data preparation for CNC milling: turn triangle meshes into clean,
//! validated geometry and carry toolpaths to downstream consumers.
//!
//! ## Architecture
//!
//! millprep is organized as a workspace with multiple crates:
//!
//! 1. **millprep-core** - Vectors, measurement units, error types
//! 2. **millprep-geometry** - Mesh model, ASCII STL import, repair, validation
//! 3. **millprep-toolpath** - Toolpath model and JSON export
//! 4. **millprep-camtools** - Planar polygons and integer clipping coordinates
//! 5. **millprep-visualizer** - Mesh drawable for an external renderer
//! 6. **millprep-settings** - Configuration files
//! 7. **millprep** - This crate: re-exports, logging setup, the `millprep` binary

pub mod check;

pub use millprep_core::{
    unit_label, Error, GeometryError, ImportError, MeasurementSystem, Result, ToolpathError,
    Vector2d, Vector3d,
};

pub use millprep_geometry::{
    repair_mesh, Bounds, Mesh, MeshFormat, MeshImporter, RepairParams, RepairSummary, Triangle,
};

pub use millprep_toolpath::{MoveType, Toolpath, ToolpathMeta, ToolpathSegment};

pub use millprep_camtools::{
    from_clipper_coord, polygon_set_from_clipper, polygon_set_to_clipper, to_clipper_coord,
    ClipperPath, ClipperPoint, Polygon2D, PolygonSet,
};

pub use millprep_visualizer::{MeshDrawable, MeshDrawer, VertexData, VertexKind};

pub use millprep_settings::Config;

pub use check::{check_file, FileReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging to stderr in the given format
///
/// stdout is left to command output.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .json(),
            )
            .try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
