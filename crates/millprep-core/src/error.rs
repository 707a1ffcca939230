//! Error handling for millprep
//!
//! Provides error types for every layer of the pipeline:
//! - Import errors (opening and parsing mesh files)
//! - Geometry errors (mesh sanity checks)
//! - Toolpath errors (export of toolpath data)
//!
//! All error types use `thiserror`. None of them is fatal: callers decide
//! whether to retry, skip, or abort a file in a larger batch.

use thiserror::Error;

/// Mesh import error type
///
/// Represents failures while turning an on-disk file into a raw mesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// The file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The file exists but could not be read
    #[error("Failed to read {path}: {reason}")]
    Read {
        /// The path being read.
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },

    /// No `vertex` line in the file could be parsed
    #[error("No vertices found in {path}")]
    NoVertices {
        /// The path that yielded no vertices.
        path: String,
    },

    /// More vertices than a triangle index can address
    #[error("{path} has {count} vertices, more than a mesh index can address")]
    TooManyVertices {
        /// The offending path.
        path: String,
        /// Number of vertices parsed.
        count: usize,
    },

    /// The format is recognised but has no importer
    #[error("Unsupported mesh format: {format}")]
    UnsupportedFormat {
        /// The format name, e.g. "obj".
        format: String,
    },

    /// The file extension does not map to any known format
    #[error("Unable to determine mesh format for: {path}")]
    UnknownExtension {
        /// The offending path.
        path: String,
    },
}

/// Geometry error type
///
/// Reported by explicit validation calls and by repair when its parameters
/// are unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Mesh has no triangles
    #[error("Mesh has no triangles")]
    NoTriangles,

    /// A vertex has a NaN or infinite coordinate
    #[error("Vertex {index} has a non-finite coordinate")]
    NonFiniteVertex {
        /// Position of the vertex in the vertex list.
        index: usize,
    },

    /// Repair thresholds that would merge or drop arbitrary geometry
    #[error("Invalid repair parameters: {reason}")]
    InvalidRepairParams {
        /// Which threshold is wrong and its value.
        reason: String,
    },
}

/// Toolpath error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolpathError {
    /// Output file could not be created or written
    #[error("Failed to write toolpath to {path}: {reason}")]
    Write {
        /// The destination path.
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },

    /// Serialization to text failed
    #[error("Toolpath serialization failed: {reason}")]
    Serialization {
        /// The serializer's message.
        reason: String,
    },
}

/// Main error type for millprep
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Import error
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Toolpath error
    #[error(transparent)]
    Toolpath(#[from] ToolpathError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

}

impl Error {
    /// Create a configuration error from a string message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is an import error
    pub fn is_import_error(&self) -> bool {
        matches!(self, Error::Import(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a toolpath error
    pub fn is_toolpath_error(&self) -> bool {
        matches!(self, Error::Toolpath(_))
    }

    /// Check if this error means the requested feature is a stub
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Import(ImportError::UnsupportedFormat { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
