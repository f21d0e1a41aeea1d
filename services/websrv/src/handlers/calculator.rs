//! Calculator page handler
//!
//! Renders the calculator page. Submitted form values arrive as query
//! parameters, run through the validator, and the computed results are
//! spliced into the page shell. All numbers shown come from the calculation
//! core; the handler owns no domain logic.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use pepmix_calc::{
    dose_precision, doses_per_vial, mix_concentration, plan_draws, AlertLevel, NumericInput,
    ValidationResult,
};

use crate::app_state::AppState;

const PAGE_SHELL: &str = include_str!("index.html");
const RESULTS_MARKER: &str = "<!-- results -->";

/// Raw form values exactly as submitted, before numeric interpretation.
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorQuery {
    pub vial_mg: Option<String>,
    pub water_ml: Option<String>,
    pub dose_mcg: Option<String>,
    /// Mixing syringe size in mL, drives the draw plan when present.
    pub syringe_ml: Option<String>,
}

impl CalculatorQuery {
    fn is_empty(&self) -> bool {
        self.vial_mg.is_none() && self.water_ml.is_none() && self.dose_mcg.is_none()
    }
}

/// Calculator page.
///
/// @route GET /
/// @side-effects None (read-only operation)
pub async fn calculator_page(
    State(state): State<AppState>,
    Query(query): Query<CalculatorQuery>,
) -> Html<String> {
    if query.is_empty() {
        return Html(PAGE_SHELL.replace(RESULTS_MARKER, ""));
    }

    let vial = state
        .validator
        .validate_vial_amount(&NumericInput::from(query.vial_mg.clone()));
    let water = state
        .validator
        .validate_water_volume(&NumericInput::from(query.water_ml.clone()));
    let dose = state
        .validator
        .validate_dose(&NumericInput::from(query.dose_mcg.clone()));

    let mut fragment = String::from("<section class=\"results\">\n");
    for result in [&vial, &water, &dose] {
        fragment.push_str(&render_alert(result));
    }

    // Corrected values drive the math; a vial or water field with nothing
    // usable means there is nothing to compute yet.
    if let (Some(vial_mg), Some(water_ml)) = (vial.corrected_value, water.corrected_value) {
        let mix = mix_concentration(vial_mg, water_ml);
        fragment.push_str(&format!(
            "<p class=\"result\">Concentration: <strong>{:.0} mcg/mL</strong> ({:.1} mg/mL)</p>\n",
            mix.mcg_per_ml, mix.mg_per_ml
        ));

        if let Some(syringe_ml) = NumericInput::from(query.syringe_ml.clone())
            .as_finite()
            .filter(|v| *v > 0.0)
        {
            let plan = plan_draws(water_ml, syringe_ml);
            if plan.needs_multiple {
                fragment.push_str(&format!(
                    "<p class=\"result\">Draw water: {} ({})</p>\n",
                    plan.display_text, plan.instruction
                ));
            } else {
                fragment.push_str(&format!(
                    "<p class=\"result\">Draw water: {}</p>\n",
                    plan.display_text
                ));
            }
        }

        if let Some(dose_mcg) = NumericInput::from(query.dose_mcg.clone())
            .as_finite()
            .filter(|v| *v > 0.0)
        {
            // Both corrections are positive here, so the concentration is too
            // and the dose calculator precondition holds.
            let calc = dose_precision(dose_mcg, mix.mcg_per_ml);
            fragment.push_str(&format!(
                "<p class=\"result\">Dose volume: <strong>{} mL</strong> ({} units)</p>\n",
                calc.format_ml(),
                calc.format_units()
            ));
            fragment.push_str(&format!(
                "<p class=\"result\">Doses in this vial: {}</p>\n",
                doses_per_vial(vial_mg, dose_mcg)
            ));
        }
    }
    fragment.push_str("</section>");

    Html(PAGE_SHELL.replace(RESULTS_MARKER, &fragment))
}

/// Render one validation advisory, or nothing when the field has no message.
/// Messages come from the calculation core and contain no user text.
fn render_alert(result: &ValidationResult) -> String {
    match (result.alert, result.message.as_deref()) {
        (Some(level), Some(message)) => {
            let class = match level {
                AlertLevel::Info => "info",
                AlertLevel::Warning => "warning",
                AlertLevel::Error => "error",
            };
            format!("<p class=\"alert alert--{class}\">{message}</p>\n")
        },
        _ => String::new(),
    }
}
