//! Measurement systems.
//!
//! Geometry is always stored in millimetres. The measurement system only
//! labels toolpath output and is chosen in configuration.

use serde::{Deserialize, Serialize};

/// Unit system a toolpath is labelled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Millimetres
    #[default]
    Metric,
    /// Inches
    Imperial,
}

/// Short unit label written to toolpath metadata ("mm" or "in")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
