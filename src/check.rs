//! Per-file import, repair and validation used by `millprep check`.

use millprep_core::{GeometryError, Result};
use millprep_geometry::{Bounds, MeshImporter, RepairSummary};
use millprep_settings::Config;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of checking one mesh file that could be imported.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub vertices: usize,
    pub triangles: usize,
    pub bounds: Option<Bounds>,
    /// `None` when repair was disabled
    pub repair: Option<RepairSummary>,
    /// Validation of the final (possibly repaired) mesh
    pub validation: std::result::Result<(), GeometryError>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.validation.is_ok()
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vertices, {} triangles",
            self.path.display(),
            self.vertices,
            self.triangles
        )?;
        if let Some(b) = &self.bounds {
            write!(f, ", bounds [{}] .. [{}]", b.min, b.max)?;
        }
        match &self.validation {
            Ok(()) => write!(f, ", valid"),
            Err(e) => write!(f, ", INVALID: {}", e),
        }
    }
}

/// Import `path`, optionally repair it with the configured parameters, and
/// validate the result.
///
/// Repair runs only when both `repair` and `import.repair_on_import` are set;
/// `repair == false` is the command-line override.
///
/// Import failures and unusable repair parameters are returned as errors. A
/// mesh that imports but fails validation is a successful report with
/// `is_valid() == false`.
pub fn check_file(path: &Path, config: &Config, repair: bool) -> Result<FileReport> {
    let repair = repair && config.import.repair_on_import;
    // Repair is run separately below so its summary can be reported.
    let mut mesh = MeshImporter::new().with_repair(false).import_file(path)?;

    if let Err(e) = MeshImporter::validate_detailed(&mesh) {
        debug!(path = %path.display(), error = %e, "Imported mesh fails validation");
    }

    let summary = if repair {
        Some(MeshImporter::repair_with(&mut mesh, &config.repair_params())?)
    } else {
        debug!(path = %path.display(), "Repair skipped");
        None
    };

    let validation = MeshImporter::validate_detailed(&mesh);
    if let Err(e) = &validation {
        warn!(path = %path.display(), error = %e, "Mesh failed validation");
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
        bounds: mesh.bounds(),
        repair: summary,
        validation,
    })
}
