//! pepmix-calc - Calculation core for PepMix
//!
//! Pure validation and dosing arithmetic for the peptide reconstitution
//! calculator. Every operation is a deterministic function of its inputs and
//! the constraint table: no IO, no clock, no shared state.
//!
//! # Example
//!
//! ```rust
//! use pepmix_calc::{Constraints, InputValidator, NumericInput};
//! use pepmix_calc::dose::dose_precision;
//!
//! let validator = InputValidator::new(Constraints::default());
//!
//! // Raw form values go through the validator first
//! let water = validator.validate_water_volume(&NumericInput::from("2.5"));
//! assert!(water.valid);
//! assert_eq!(water.corrected_value, Some(2.5));
//!
//! // Corrected values feed the dose calculator
//! let dose = dose_precision(250.0, 5000.0);
//! assert_eq!(dose.dose_ml, 0.05);
//! assert_eq!(dose.format_ml(), "0.05");
//! assert_eq!(dose.format_units(), "5");
//! ```

pub mod constraints;
pub mod dose;
pub mod input;
pub mod mixing;
pub mod validate;

// Re-exports for convenience
pub use constraints::{CommonRange, Constraints, DoseThresholds, VialLimits, WaterLimits};
pub use dose::{dose_precision, format_dose_ml, format_dose_units, DoseCalculation};
pub use input::NumericInput;
pub use mixing::{doses_per_vial, mix_concentration, plan_draws, Concentration, DrawPlan};
pub use validate::{AlertLevel, InputValidator, ValidationResult};
