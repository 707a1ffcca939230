//! # Mesh Importer
//!
//! Turns untrusted mesh files into [`Mesh`] values and provides the cheap
//! validation gate and simple repair used before meshes are handed on.
//!
//! ## Supported Formats
//! - ASCII STL: any line whose first token is `vertex` followed by three
//!   finite numbers contributes a vertex; every three vertices form a triangle.
//!   `facet` / `outer loop` structure is not relied upon.
//! - OBJ: recognised, not supported (always fails with
//!   [`ImportError::UnsupportedFormat`]).
//!
//! Binary STL is not supported.

use crate::mesh::{Mesh, Triangle};
use crate::repair::{repair_mesh, run_repair, RepairParams, RepairSummary};
use millprep_core::{GeometryError, ImportError, Vector3d};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Mesh formats recognised by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    /// STL (STereoLithography), ASCII only
    Stl,
    /// Wavefront OBJ (recognised, not supported)
    Obj,
}

impl MeshFormat {
    /// Detect format from a file extension, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "stl" => Some(Self::Stl),
            "obj" => Some(Self::Obj),
            _ => None,
        }
    }
}

/// Mesh importer
///
/// The associated functions work on their own; an importer instance only
/// adds the choice of repairing meshes as part of [`MeshImporter::import_file`].
#[derive(Debug, Clone, Default)]
pub struct MeshImporter {
    repair_on_import: bool,
    repair_params: RepairParams,
}

impl MeshImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repair every mesh after a successful import
    pub fn with_repair(mut self, repair: bool) -> Self {
        self.repair_on_import = repair;
        self
    }

    /// Thresholds for repair on import; rejected if they do not validate.
    pub fn with_repair_params(mut self, params: RepairParams) -> Result<Self, GeometryError> {
        params.validate()?;
        self.repair_params = params;
        Ok(self)
    }

    pub fn repairs_on_import(&self) -> bool {
        self.repair_on_import
    }

    pub fn repair_params(&self) -> &RepairParams {
        &self.repair_params
    }

    /// Import a mesh, picking the loader from the file extension.
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<Mesh, ImportError> {
        let path = path.as_ref();
        let format = MeshFormat::from_path(path).ok_or_else(|| ImportError::UnknownExtension {
            path: path.display().to_string(),
        })?;

        let mut mesh = match format {
            MeshFormat::Stl => Self::load_stl(path)?,
            MeshFormat::Obj => Self::load_obj(path)?,
        };

        if self.repair_on_import {
            let summary = run_repair(&mut mesh, &self.repair_params);
            debug!("Repaired {} on import: {}", path.display(), summary);
        }

        Ok(mesh)
    }

    /// Load an ASCII STL file.
    ///
    /// Fails if the file cannot be opened or read, or if no vertex could be
    /// parsed. No mesh is produced on failure.
    pub fn load_stl(path: impl AsRef<Path>) -> Result<Mesh, ImportError> {
        let path = path.as_ref();
        debug!("Importing STL file: {}", path.display());

        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ImportError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ImportError::Read {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let mesh = Self::load_stl_from_reader(BufReader::new(file)).map_err(|e| match e {
            StlReadError::Io(reason) => ImportError::Read {
                path: path.display().to_string(),
                reason,
            },
            StlReadError::NoVertices => ImportError::NoVertices {
                path: path.display().to_string(),
            },
            StlReadError::TooManyVertices(count) => ImportError::TooManyVertices {
                path: path.display().to_string(),
                count,
            },
        })?;

        debug!(
            "STL contains {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Parse ASCII STL text from any buffered reader.
    ///
    /// Lines that are not `vertex x y z` with three finite numbers are skipped.
    /// A trailing group of fewer than three vertices adds vertices but no triangle.
    pub fn load_stl_from_reader<R: BufRead>(mut reader: R) -> Result<Mesh, StlReadError> {
        let mut vertices: Vec<Vector3d> = Vec::new();
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| StlReadError::Io(e.to_string()))?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            match parse_vertex_line(&line) {
                VertexLine::Vertex(v) => vertices.push(v),
                VertexLine::Malformed => {
                    trace!("Skipping malformed vertex on line {}", line_number)
                }
                VertexLine::Other => {}
            }
        }

        if vertices.is_empty() {
            return Err(StlReadError::NoVertices);
        }
        if vertices.len() > u32::MAX as usize {
            return Err(StlReadError::TooManyVertices(vertices.len()));
        }

        let triangles: Vec<Triangle> = (0..vertices.len() / 3)
            .map(|i| {
                let base = (i * 3) as u32;
                [base, base + 1, base + 2]
            })
            .collect();

        Ok(Mesh {
            vertices,
            triangles,
        })
    }

    /// Load an OBJ file. Not supported: always fails.
    pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, ImportError> {
        warn!("OBJ import is not supported: {}", path.as_ref().display());
        Err(ImportError::UnsupportedFormat {
            format: "obj".to_string(),
        })
    }

    /// Cheap sanity gate: at least one triangle and only finite coordinates.
    ///
    /// Index ranges and degeneracy are not checked.
    pub fn validate(mesh: &Mesh) -> bool {
        Self::validate_detailed(mesh).is_ok()
    }

    /// Same checks as [`MeshImporter::validate`], reporting which one failed.
    pub fn validate_detailed(mesh: &Mesh) -> Result<(), GeometryError> {
        if mesh.triangles.is_empty() {
            return Err(GeometryError::NoTriangles);
        }
        match mesh.vertices.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(GeometryError::NonFiniteVertex { index }),
            None => Ok(()),
        }
    }

    /// Remove degenerate and duplicate triangles and weld vertices on the
    /// 1e-6 mm grid, in place.
    pub fn repair_simple(mesh: &mut Mesh) -> RepairSummary {
        run_repair(mesh, &RepairParams::default())
    }

    /// [`MeshImporter::repair_simple`] with caller-chosen thresholds.
    ///
    /// Fails with [`GeometryError::InvalidRepairParams`], leaving the mesh
    /// untouched, when the thresholds do not validate.
    pub fn repair_with(
        mesh: &mut Mesh,
        params: &RepairParams,
    ) -> Result<RepairSummary, GeometryError> {
        repair_mesh(mesh, params)
    }
}

/// Failure of [`MeshImporter::load_stl_from_reader`], without path context
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StlReadError {
    /// The reader failed mid-stream
    #[error("read failed: {0}")]
    Io(String),
    /// Nothing parsed as a vertex
    #[error("no vertices found")]
    NoVertices,
    /// More vertices than a `u32` index can address
    #[error("{0} vertices exceed the index range")]
    TooManyVertices(usize),
}

enum VertexLine {
    Vertex(Vector3d),
    Malformed,
    Other,
}

fn parse_vertex_line(line: &str) -> VertexLine {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("vertex") {
        return VertexLine::Other;
    }

    let mut coords = [0.0f64; 3];
    for slot in &mut coords {
        match tokens.next().and_then(|t| t.parse::<f64>().ok()) {
            Some(value) if value.is_finite() => *slot = value,
            _ => return VertexLine::Malformed,
        }
    }
    VertexLine::Vertex(Vector3d::from(coords))
}
