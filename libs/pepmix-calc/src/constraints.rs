//! Domain constraint table
//!
//! Fixed numeric thresholds for the calculator fields. Loaded once from
//! configuration at startup, never mutated, and injected into the validator
//! so every validation stays a pure function of its inputs.

use serde::{Deserialize, Serialize};

/// Full constraint table for the three calculator fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraints {
    /// Diluent (bacteriostatic water) volume limits, in mL.
    #[serde(default)]
    pub water: WaterLimits,
    /// Dose advisory thresholds, in mcg.
    #[serde(default)]
    pub dose: DoseThresholds,
    /// Vial content limits, in mg.
    #[serde(default)]
    pub vial: VialLimits,
}

/// Water volume limits in mL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterLimits {
    #[serde(default = "default_water_min")]
    pub min: f64,
    #[serde(default = "default_water_max")]
    pub max: f64,
}

/// Dose advisory thresholds in mcg. Doses above `caution` get an
/// informational note, doses above `warning` a stronger one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseThresholds {
    #[serde(default = "default_dose_caution")]
    pub caution: f64,
    #[serde(default = "default_dose_warning")]
    pub warning: f64,
}

/// Vial content limits in mg, with the range most products ship in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VialLimits {
    #[serde(default = "default_vial_min")]
    pub min: f64,
    #[serde(default = "default_vial_max")]
    pub max: f64,
    #[serde(default)]
    pub common: CommonRange,
}

/// A typical-values range within wider hard limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommonRange {
    #[serde(default = "default_common_min")]
    pub min: f64,
    #[serde(default = "default_common_max")]
    pub max: f64,
}

fn default_water_min() -> f64 {
    1.0
}
fn default_water_max() -> f64 {
    10.0
}
fn default_dose_caution() -> f64 {
    500.0
}
fn default_dose_warning() -> f64 {
    1000.0
}
fn default_vial_min() -> f64 {
    0.1
}
fn default_vial_max() -> f64 {
    30.0
}
fn default_common_min() -> f64 {
    5.0
}
fn default_common_max() -> f64 {
    10.0
}

impl Default for WaterLimits {
    fn default() -> Self {
        Self {
            min: default_water_min(),
            max: default_water_max(),
        }
    }
}

impl Default for DoseThresholds {
    fn default() -> Self {
        Self {
            caution: default_dose_caution(),
            warning: default_dose_warning(),
        }
    }
}

impl Default for VialLimits {
    fn default() -> Self {
        Self {
            min: default_vial_min(),
            max: default_vial_max(),
            common: CommonRange::default(),
        }
    }
}

impl Default for CommonRange {
    fn default() -> Self {
        Self {
            min: default_common_min(),
            max: default_common_max(),
        }
    }
}
