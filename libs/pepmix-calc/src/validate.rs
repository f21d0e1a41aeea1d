//! Field validation
//!
//! Pure validation logic for the calculator inputs.
//! No IO dependencies, no failure modes: malformed input is a normal
//! return value, never an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constraints::Constraints;
use crate::input::NumericInput;

/// Advisory severity attached to a validation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

/// Outcome of validating a single form field.
///
/// `corrected_value` carries the value the rest of the calculator should use:
/// the input unchanged when it was in range, or the nearest limit when it was
/// clamped. It is `None` when nothing usable could be extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    /// In-range value, nothing to report.
    fn accepted(value: f64) -> Self {
        Self {
            valid: true,
            corrected_value: Some(value),
            alert: None,
            message: None,
        }
    }

    /// Unparseable input, nothing usable extracted.
    fn not_numeric() -> Self {
        Self {
            valid: false,
            corrected_value: None,
            alert: None,
            message: None,
        }
    }

    /// Valid with nothing to report and no value carried (optional fields).
    fn silent() -> Self {
        Self {
            valid: true,
            corrected_value: None,
            alert: None,
            message: None,
        }
    }
}

/// Validates calculator fields against the constraint table.
///
/// Holds an immutable copy of the constraints so that identical inputs always
/// produce identical results.
///
/// # Example
///
/// ```rust
/// use pepmix_calc::{AlertLevel, Constraints, InputValidator, NumericInput};
///
/// let validator = InputValidator::new(Constraints::default());
///
/// let result = validator.validate_water_volume(&NumericInput::from(15.0));
/// assert!(result.valid);
/// assert_eq!(result.corrected_value, Some(10.0));
/// assert_eq!(result.alert, Some(AlertLevel::Info));
/// ```
#[derive(Debug, Clone)]
pub struct InputValidator {
    constraints: Constraints,
}

impl InputValidator {
    pub fn new(constraints: Constraints) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Validate the diluent (water) volume in mL.
    ///
    /// Values below the minimum are invalid and corrected upward with an
    /// error; values above the maximum stay valid but are clamped down with
    /// an informational note.
    pub fn validate_water_volume(&self, input: &NumericInput) -> ValidationResult {
        let Some(value) = input.as_finite() else {
            return ValidationResult::not_numeric();
        };
        let limits = self.constraints.water;

        if value < limits.min {
            debug!(value, min = limits.min, "water volume below minimum");
            return ValidationResult {
                valid: false,
                corrected_value: Some(limits.min),
                alert: Some(AlertLevel::Error),
                message: Some(format!("Water volume must be at least {} mL.", limits.min)),
            };
        }
        if value > limits.max {
            debug!(value, max = limits.max, "water volume clamped to maximum");
            return ValidationResult {
                valid: true,
                corrected_value: Some(limits.max),
                alert: Some(AlertLevel::Info),
                message: Some(format!("{} mL is the maximum supported volume.", limits.max)),
            };
        }
        ValidationResult::accepted(value)
    }

    /// Validate the dose in mcg.
    ///
    /// The dose field is optional: an absent, unparseable or non-positive
    /// value means nothing has been entered yet and is simply not flagged.
    /// There is no invalid-format state for this field.
    pub fn validate_dose(&self, input: &NumericInput) -> ValidationResult {
        let Some(value) = input.as_finite().filter(|v| *v > 0.0) else {
            return ValidationResult::silent();
        };
        let thresholds = self.constraints.dose;

        // The warning threshold is the larger of the two, so it must be
        // checked first.
        if value > thresholds.warning {
            debug!(value, warning = thresholds.warning, "dose above warning threshold");
            return ValidationResult {
                valid: true,
                corrected_value: None,
                alert: Some(AlertLevel::Warning),
                message: Some(format!(
                    "{} mcg is a high dosage for those new to self-administering peptides.",
                    value
                )),
            };
        }
        if value > thresholds.caution {
            return ValidationResult {
                valid: true,
                corrected_value: None,
                alert: Some(AlertLevel::Info),
                message: Some(format!(
                    "Most common peptide doses are up to {} mcg.",
                    thresholds.caution
                )),
            };
        }
        ValidationResult::silent()
    }

    /// Validate the vial content in mg.
    pub fn validate_vial_amount(&self, input: &NumericInput) -> ValidationResult {
        let Some(value) = input.as_finite() else {
            return ValidationResult::not_numeric();
        };
        let limits = self.constraints.vial;

        if value <= 0.0 {
            return ValidationResult {
                valid: false,
                corrected_value: None,
                alert: Some(AlertLevel::Error),
                message: Some("Vial amount must be a positive number.".to_string()),
            };
        }
        if value > limits.max {
            debug!(value, max = limits.max, "vial amount clamped to maximum");
            return ValidationResult {
                valid: false,
                corrected_value: Some(limits.max),
                alert: Some(AlertLevel::Error),
                message: Some(format!("Exceeded max vial amount ({} mg).", limits.max)),
            };
        }
        if value > limits.common.max {
            return ValidationResult {
                valid: true,
                corrected_value: Some(value),
                alert: Some(AlertLevel::Info),
                message: Some(format!(
                    "Vial amount {} mg is above the typical {}-{} mg range.",
                    value, limits.common.min, limits.common.max
                )),
            };
        }
        ValidationResult::accepted(value)
    }
}
