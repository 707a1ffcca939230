//! millprep Settings Crate
//!
//! Loads, validates and saves the millprep configuration file.

pub mod config;

pub use config::{ClippingSettings, Config, ImportSettings, ToolpathSettings};
