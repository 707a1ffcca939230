//! # millprep Toolpath
//!
//! Sequenced 3D toolpath with per-segment motion metadata, as produced by an
//! external planner calling [`Toolpath::append`].
//!
//! The model does no validation of segment content: index monotonicity and
//! move-type-appropriate fields are the producer's business.
//!
//! ## Export
//!
//! [`Toolpath::to_json`] emits a fixed, deliberately narrow shape (units plus
//! index/position/feed per segment). [`Toolpath::load_json`] is a stub.

pub mod serialization;
pub mod toolpath;

pub use serialization::LOAD_JSON_UNSUPPORTED;
pub use toolpath::{MoveType, Toolpath, ToolpathMeta, ToolpathSegment};
