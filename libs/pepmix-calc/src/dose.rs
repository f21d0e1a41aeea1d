//! Dose precision arithmetic
//!
//! Converts a target dose and a concentration into an injectable volume and
//! a syringe reading, with fixed rounding and display formatting.

use serde::{Deserialize, Serialize};

/// A dose conversion result.
///
/// Both fields derive from the same rounded thousandths-of-a-mL numerator, so
/// `dose_units == dose_ml * 100` holds exactly for every input pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseCalculation {
    /// Injectable volume in mL, rounded to three decimals.
    pub dose_ml: f64,
    /// Syringe reading in units (hundredths of a mL), rounded to one decimal.
    pub dose_units: f64,
}

impl DoseCalculation {
    /// Display rendering of the volume, see [`format_dose_ml`].
    pub fn format_ml(&self) -> String {
        format_dose_ml(self.dose_ml)
    }

    /// Display rendering of the syringe units, see [`format_dose_units`].
    pub fn format_units(&self) -> String {
        format_dose_units(self.dose_units)
    }
}

/// Convert a dose into an injectable volume and syringe units.
///
/// Rounds half away from zero on the thousandths digit, so 0.0375 mL becomes
/// 0.038 mL and 3.8 units.
///
/// `concentration_mcg_per_ml` must be positive; the caller guarantees this.
///
/// # Example
///
/// ```rust
/// use pepmix_calc::dose::dose_precision;
///
/// let calc = dose_precision(375.0, 10_000.0);
/// assert_eq!(calc.dose_ml, 0.038);
/// assert_eq!(calc.dose_units, 3.8);
/// ```
pub fn dose_precision(dose_mcg: f64, concentration_mcg_per_ml: f64) -> DoseCalculation {
    debug_assert!(concentration_mcg_per_ml > 0.0);

    let thousandths = (dose_mcg / concentration_mcg_per_ml * 1000.0).round();
    let dose_ml = thousandths / 1000.0;
    DoseCalculation {
        dose_ml,
        // Re-scaling the already-rounded volume keeps the two fields in exact
        // agreement: units are hundredths of the displayed mL value.
        dose_units: dose_ml * 100.0,
    }
}

/// Render an injectable volume for display.
///
/// Three decimals normally, two when the thousandths digit is zero:
/// "0.05" rather than "0.050", but "0.038" stays as is.
pub fn format_dose_ml(dose_ml: f64) -> String {
    let thousandths = (dose_ml * 1000.0).round() as i64;
    if thousandths % 10 == 0 {
        format!("{:.2}", dose_ml)
    } else {
        format!("{:.3}", dose_ml)
    }
}

/// Render a syringe reading: whole values bare ("5"), everything else with
/// one decimal ("2.5").
pub fn format_dose_units(dose_units: f64) -> String {
    let tenths = (dose_units * 10.0).round() as i64;
    if tenths % 10 == 0 {
        (tenths / 10).to_string()
    } else {
        format!("{:.1}", dose_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_scenarios() {
        let cases = [
            (250.0, 10_000.0, 0.025, 2.5, "0.025", "2.5"),
            (250.0, 5_000.0, 0.05, 5.0, "0.05", "5"),
            (500.0, 5_000.0, 0.1, 10.0, "0.10", "10"),
            (375.0, 10_000.0, 0.038, 3.8, "0.038", "3.8"),
            (100.0, 10_000.0, 0.01, 1.0, "0.01", "1"),
        ];
        for (dose_mcg, concentration, ml, units, ml_str, units_str) in cases {
            let calc = dose_precision(dose_mcg, concentration);
            assert_eq!(calc.dose_ml, ml, "dose {dose_mcg} @ {concentration}");
            assert_eq!(calc.dose_units, units, "dose {dose_mcg} @ {concentration}");
            assert_eq!(calc.format_ml(), ml_str);
            assert_eq!(calc.format_units(), units_str);
        }
    }

    #[test]
    fn test_units_are_always_hundredths_of_ml() {
        let doses = [50.0, 100.0, 125.0, 250.0, 333.0, 375.0, 500.0, 750.0, 1000.0];
        let concentrations = [1_000.0, 2_000.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0];
        for dose_mcg in doses {
            for concentration in concentrations {
                let calc = dose_precision(dose_mcg, concentration);
                assert_eq!(
                    calc.dose_units,
                    calc.dose_ml * 100.0,
                    "dose {dose_mcg} @ {concentration}"
                );
            }
        }
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 0.0375 mL raw sits exactly between 0.037 and 0.038
        let calc = dose_precision(375.0, 10_000.0);
        assert_eq!(calc.dose_ml, 0.038);
    }

    #[test]
    fn test_determinism() {
        let a = dose_precision(333.0, 7_500.0);
        let b = dose_precision(333.0, 7_500.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_ml_keeps_three_decimals_when_needed() {
        assert_eq!(format_dose_ml(0.025), "0.025");
        assert_eq!(format_dose_ml(0.038), "0.038");
        assert_eq!(format_dose_ml(0.333), "0.333");
    }

    #[test]
    fn test_format_ml_drops_trailing_zero_thousandth() {
        assert_eq!(format_dose_ml(0.05), "0.05");
        assert_eq!(format_dose_ml(0.1), "0.10");
        assert_eq!(format_dose_ml(0.01), "0.01");
        assert_eq!(format_dose_ml(1.0), "1.00");
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_dose_units(5.0), "5");
        assert_eq!(format_dose_units(10.0), "10");
        assert_eq!(format_dose_units(1.0), "1");
        assert_eq!(format_dose_units(2.5), "2.5");
        assert_eq!(format_dose_units(3.8), "3.8");
    }
}
