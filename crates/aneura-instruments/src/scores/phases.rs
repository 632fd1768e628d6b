use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use aneura_core::form::FormState;

use crate::RiskScore;
use crate::catalog::{self, FormItem};

/// PHASES result: the additive score plus the matching 5-year rupture-risk
/// band label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhasesResult {
    pub score: u32,
    pub risk: String,
}

/// Compute the PHASES score and risk band from a form state snapshot.
///
/// Reads the same clinical tokens as UIATS but applies the PHASES point
/// system. Total over its input; an empty state yields
/// `{0, "<0.4% (very low)"}`.
pub fn calculate_phases_score(state: &FormState) -> PhasesResult {
    let mut score: u32 = 0;
    let risk_factors = state.choices("riskFactors");

    // Population. Japanese is checked first; if both tokens were ever
    // present only the Japanese points apply.
    if risk_factors.iter().any(|t| t == "japanese") {
        score += 3;
    } else if risk_factors.iter().any(|t| t == "finnish") {
        score += 5;
    }

    // Hypertension.
    if risk_factors.iter().any(|t| t == "hypertension") {
        score += 1;
    }

    // Age 70 or above.
    if matches!(state.choice("age"), Some("71-80" | ">80")) {
        score += 1;
    }

    // Size, millimeters.
    if let Some(mm) = state.number("maximumDiameter") {
        if mm >= 20.0 {
            score += 10;
        } else if mm >= 10.0 {
            score += 6;
        } else if mm >= 7.0 {
            score += 3;
        }
    }

    // Earlier SAH from another aneurysm.
    if risk_factors.iter().any(|t| t == "sah") {
        score += 1;
    }

    // Site. ICA or unspecified stays at 0.
    match state.choice("location") {
        Some("mca") => score += 2,
        Some(
            "aca" | "acom_pcom" | "basilar_bifurcation" | "vertebral_basilar_other"
            | "posterior_other",
        ) => score += 4,
        _ => {}
    }

    let result = PhasesResult {
        score,
        risk: risk_band(score).to_string(),
    };
    debug!(score = result.score, risk = %result.risk, "phases score computed");
    result
}

/// 5-year rupture-risk bands. The score cannot be negative, so the six arms
/// partition the whole domain.
fn risk_band(score: u32) -> &'static str {
    match score {
        0..=2 => "<0.4% (very low)",
        3..=4 => "1.5% (low)",
        5..=6 => "3.2% (moderate)",
        7..=8 => "6.4% (high)",
        9..=10 => "12.3% (very high)",
        _ => "17.8% (extremely high)",
    }
}

/// PHASES: additive 5-year rupture-risk estimate from population,
/// hypertension, age, size, earlier SAH, and site.
pub struct Phases;

impl RiskScore for Phases {
    fn id(&self) -> &str {
        "phases"
    }

    fn name(&self) -> &str {
        "PHASES"
    }

    fn items(&self) -> &[FormItem] {
        static ITEMS: LazyLock<Vec<FormItem>> = LazyLock::new(|| {
            ["age", "riskFactors", "maximumDiameter", "location"]
                .iter()
                .filter_map(|id| catalog::form_item(id).cloned())
                .collect()
        });
        &ITEMS
    }
}
