//! Configuration for millprep
//!
//! Supports JSON and TOML files, chosen by extension. Every section falls
//! back to its defaults, so a partial file only needs the keys it changes.
//!
//! Configuration is organized into sections:
//! - Import settings (repair on import, weld and degeneracy thresholds)
//! - Clipping settings (integer grid scale)
//! - Toolpath settings (units, default tool)

pub use millprep_core::MeasurementSystem;
use millprep_camtools::{polygon_set_from_clipper, polygon_set_to_clipper, ClipperPath, PolygonSet};
use millprep_core::{unit_label, Error, Result};
use millprep_geometry::{
    MeshImporter, RepairParams, DEFAULT_DEGENERATE_AREA_SQ, DEFAULT_WELD_TOLERANCE,
};
use millprep_toolpath::{Toolpath, ToolpathMeta};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory name under the platform config dir
const APP_DIR: &str = "millprep";

/// Default config file name
const CONFIG_FILE: &str = "config.toml";

/// Mesh import settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Run repair immediately after loading
    pub repair_on_import: bool,
    /// Weld grid cell size in mm
    pub weld_tolerance: f64,
    /// Triangles with squared area below this are dropped
    pub degenerate_area_sq_threshold: f64,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            repair_on_import: true,
            weld_tolerance: DEFAULT_WELD_TOLERANCE,
            degenerate_area_sq_threshold: DEFAULT_DEGENERATE_AREA_SQ,
        }
    }
}

impl ImportSettings {
    pub fn repair_params(&self) -> RepairParams {
        RepairParams::default()
            .with_weld_tolerance(self.weld_tolerance)
            .with_degenerate_area_sq_threshold(self.degenerate_area_sq_threshold)
    }

    /// Importer configured from this section.
    ///
    /// `allow_repair == false` overrides `repair_on_import`.
    pub fn importer(&self, allow_repair: bool) -> Result<MeshImporter> {
        Ok(MeshImporter::new()
            .with_repair(self.repair_on_import && allow_repair)
            .with_repair_params(self.repair_params())?)
    }
}

/// Polygon clipping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClippingSettings {
    /// Integer units per mm
    pub scale: f64,
}

impl Default for ClippingSettings {
    fn default() -> Self {
        Self { scale: 1e6 }
    }
}

impl ClippingSettings {
    /// Polygons on the integer clipping grid at the configured scale
    pub fn to_clipper(&self, polygons: &PolygonSet) -> Vec<ClipperPath> {
        polygon_set_to_clipper(polygons, self.scale)
    }

    /// Clipper output back in millimetres at the configured scale
    pub fn from_clipper(&self, paths: &[ClipperPath]) -> PolygonSet {
        polygon_set_from_clipper(paths, self.scale)
    }
}

/// Toolpath output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolpathSettings {
    pub units: MeasurementSystem,
    pub default_tool_id: i32,
}

impl ToolpathSettings {
    /// Empty toolpath labelled with the configured units and tool, stamped
    /// with the current time.
    pub fn new_toolpath(&self, source: impl Into<String>) -> Toolpath {
        Toolpath::with_meta(ToolpathMeta {
            units: unit_label(self.units).to_string(),
            default_tool_id: self.default_tool_id,
            ..ToolpathMeta::stamped(source)
        })
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub import: ImportSettings,
    pub clipping: ClippingSettings,
    pub toolpath: ToolpathSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Repair parameters derived from the import section
    pub fn repair_params(&self) -> RepairParams {
        self.import.repair_params()
    }

    /// `<platform config dir>/millprep/config.toml`, falling back to the home
    /// directory and then the working directory.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?,
            ConfigFormat::Toml => toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?,
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.repair_params()
            .validate()
            .map_err(|e| Error::config(e.to_string()))?;

        let scale = self.clipping.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::config("Clipping scale must be > 0"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(Error::config("Config file must be .json or .toml")),
        }
    }
}
