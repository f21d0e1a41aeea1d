//! Reconstitution math
//!
//! Concentration of the mixed vial, dose count per vial, and the draw plan
//! for filling with a syringe smaller than the target volume.

use serde::{Deserialize, Serialize};

/// Concentration of a reconstituted vial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concentration {
    pub mcg_per_ml: f64,
    pub mg_per_ml: f64,
}

/// Concentration after dissolving `vial_mg` of peptide in `water_ml` of
/// diluent. `water_ml` must be positive; the caller guarantees this.
pub fn mix_concentration(vial_mg: f64, water_ml: f64) -> Concentration {
    debug_assert!(water_ml > 0.0);

    Concentration {
        mcg_per_ml: vial_mg * 1000.0 / water_ml,
        mg_per_ml: vial_mg / water_ml,
    }
}

/// Whole doses a vial yields at the given dose size.
/// `dose_mcg` must be positive; the caller guarantees this.
pub fn doses_per_vial(vial_mg: f64, dose_mcg: f64) -> u32 {
    debug_assert!(dose_mcg > 0.0);

    (vial_mg * 1000.0 / dose_mcg).floor() as u32
}

/// Plan for drawing a target volume with a fixed-size syringe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPlan {
    /// Whether more than one draw is needed.
    pub needs_multiple: bool,
    /// Volume summary, e.g. "2.0 mL" or "2.0 mL total".
    pub display_text: String,
    /// Step-by-step instruction when multiple draws are needed, empty
    /// otherwise, e.g. "4 × 0.5 mL" or "6 × 0.3 mL + 1 × 0.2 mL".
    pub instruction: String,
}

/// Work out how many syringe draws reach `target_ml`.
///
/// The remainder draw is rounded to hundredths of a mL so an almost-exact
/// multiple reads as an exact one. `syringe_ml` must be positive; the caller
/// guarantees this.
pub fn plan_draws(target_ml: f64, syringe_ml: f64) -> DrawPlan {
    debug_assert!(syringe_ml > 0.0);

    if target_ml <= syringe_ml {
        return DrawPlan {
            needs_multiple: false,
            display_text: format!("{:.1} mL", target_ml),
            instruction: String::new(),
        };
    }

    let full_draws = (target_ml / syringe_ml).floor();
    let remainder = ((target_ml - full_draws * syringe_ml) * 100.0).round() / 100.0;

    let instruction = if remainder == 0.0 {
        format!("{} × {} mL", full_draws, syringe_ml)
    } else {
        format!("{} × {} mL + 1 × {:.1} mL", full_draws, syringe_ml, remainder)
    };

    DrawPlan {
        needs_multiple: true,
        display_text: format!("{:.1} mL total", target_ml),
        instruction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentration() {
        assert_eq!(mix_concentration(10.0, 2.0).mcg_per_ml, 5000.0);
        assert_eq!(mix_concentration(5.0, 1.0).mcg_per_ml, 5000.0);
        assert_eq!(mix_concentration(10.0, 5.0).mcg_per_ml, 2000.0);
        assert_eq!(mix_concentration(10.0, 2.0).mg_per_ml, 5.0);
    }

    #[test]
    fn test_doses_per_vial() {
        assert_eq!(doses_per_vial(10.0, 250.0), 40);
        assert_eq!(doses_per_vial(5.0, 250.0), 20);
        // Partial doses do not count
        assert_eq!(doses_per_vial(10.0, 300.0), 33);
    }

    #[test]
    fn test_single_draw_fits() {
        let plan = plan_draws(2.0, 3.0);
        assert!(!plan.needs_multiple);
        assert_eq!(plan.display_text, "2.0 mL");
        assert_eq!(plan.instruction, "");
    }

    #[test]
    fn test_exact_multiple_draws() {
        let plan = plan_draws(2.0, 0.5);
        assert!(plan.needs_multiple);
        assert_eq!(plan.display_text, "2.0 mL total");
        assert_eq!(plan.instruction, "4 × 0.5 mL");
    }

    #[test]
    fn test_draws_with_remainder() {
        let plan = plan_draws(2.0, 0.3);
        assert!(plan.needs_multiple);
        assert_eq!(plan.instruction, "6 × 0.3 mL + 1 × 0.2 mL");
    }

    #[test]
    fn test_exactly_equal_is_single_draw() {
        let plan = plan_draws(1.0, 1.0);
        assert!(!plan.needs_multiple);
    }
}
