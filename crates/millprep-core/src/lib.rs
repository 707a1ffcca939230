//! # millprep Core
//!
//! Core types shared by every millprep crate.
//! Provides the millimetre vector primitives, measurement-system helpers,
//! and the layered error types used across the mesh and toolpath pipelines.

pub mod error;
pub mod units;
pub mod vector;

pub use error::{Error, GeometryError, ImportError, Result, ToolpathError};
pub use units::{unit_label, MeasurementSystem};
pub use vector::{Vector2d, Vector3d};
