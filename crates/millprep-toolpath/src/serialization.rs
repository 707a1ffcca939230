//! JSON export for toolpaths.
//!
//! The exported document is intentionally lossy: only the unit label and each
//! segment's index, position and feed are written. Spindle, tool, move type,
//! flags, timing and comments stay in memory.

use millprep_core::ToolpathError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::toolpath::{Toolpath, ToolpathMeta};

/// `meta.source` of the toolpath returned by [`Toolpath::load_json`].
pub const LOAD_JSON_UNSUPPORTED: &str = "loadJson: not implemented";

#[derive(Serialize)]
struct ToolpathDoc<'a> {
    meta: MetaDoc<'a>,
    segments: Vec<SegmentDoc>,
}

#[derive(Serialize)]
struct MetaDoc<'a> {
    units: &'a str,
}

#[derive(Serialize)]
struct SegmentDoc {
    index: u64,
    pos: [f64; 3],
    feed: f64,
}

impl<'a> From<&'a Toolpath> for ToolpathDoc<'a> {
    fn from(toolpath: &'a Toolpath) -> Self {
        Self {
            meta: MetaDoc {
                units: &toolpath.meta.units,
            },
            segments: toolpath
                .iter()
                .map(|s| SegmentDoc {
                    index: s.index,
                    pos: s.pos.into(),
                    feed: s.feed,
                })
                .collect(),
        }
    }
}

impl Toolpath {
    /// Serialize to the export document:
    /// `{"meta":{"units":..},"segments":[{"index":..,"pos":[x,y,z],"feed":..},..]}`.
    ///
    /// Non-finite coordinates or feeds are written as `null`.
    pub fn to_json(&self) -> Result<String, ToolpathError> {
        serde_json::to_string(&ToolpathDoc::from(self)).map_err(|e| ToolpathError::Serialization {
            reason: e.to_string(),
        })
    }

    /// Write [`Toolpath::to_json`] output to `path`, replacing any existing file.
    ///
    /// The document is written to a temporary file next to `path` and renamed
    /// into place, so a failed save leaves any previous file intact.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ToolpathError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        let write_err = |e: std::io::Error| ToolpathError::Write {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(json.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;

        debug!(path = %path.display(), segments = self.size(), "Saved toolpath JSON");
        Ok(())
    }

    /// Not implemented: never reads `path` and returns an empty toolpath whose
    /// `meta.source` is [`LOAD_JSON_UNSUPPORTED`].
    pub fn load_json(path: impl AsRef<Path>) -> Toolpath {
        warn!(path = %path.as_ref().display(), "Toolpath JSON loading is not implemented");
        Toolpath::with_meta(ToolpathMeta {
            source: LOAD_JSON_UNSUPPORTED.to_string(),
            ..Default::default()
        })
    }

    /// True for the placeholder returned by [`Toolpath::load_json`].
    pub fn is_load_stub(&self) -> bool {
        self.meta.source == LOAD_JSON_UNSUPPORTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolpath::ToolpathSegment;
    use millprep_core::Vector3d;

    #[test]
    fn test_empty_toolpath_json() {
        let json = Toolpath::new().to_json().unwrap();
        assert_eq!(json, r#"{"meta":{"units":"mm"},"segments":[]}"#);
    }

    #[test]
    fn test_units_are_escaped() {
        let mut tp = Toolpath::new();
        tp.meta.units = "m\"m".to_string();
        let json = tp.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["meta"]["units"], "m\"m");
    }

    #[test]
    fn test_non_finite_feed_is_null() {
        let mut tp = Toolpath::new();
        tp.append(ToolpathSegment::new(0, Vector3d::ZERO).with_feed(f64::NAN));
        let value: serde_json::Value = serde_json::from_str(&tp.to_json().unwrap()).unwrap();
        assert!(value["segments"][0]["feed"].is_null());
    }

    #[test]
    fn test_load_json_stub() {
        let tp = Toolpath::load_json("/definitely/not/here.json");
        assert!(tp.is_empty());
        assert!(tp.is_load_stub());
        assert_eq!(tp.meta.source, LOAD_JSON_UNSUPPORTED);
        assert!(!Toolpath::new().is_load_stub());
    }
}
