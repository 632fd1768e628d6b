use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use aneura_core::form::FormState;

use crate::RiskScore;
use crate::catalog::{self, FormItem, InputKind};

/// Which of the two UIATS axes an item's points are added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Axis {
    Intervention,
    Conservative,
}

/// An option in the UIATS-native encoding: the clinical token plus the
/// points it is worth on its item's axis.
#[derive(Debug, Clone, Copy)]
pub struct WeightedOption {
    pub label: &'static str,
    pub token: &'static str,
    pub points: u32,
}

/// One row of the UIATS-native item table. Shares ids with the combined
/// form catalog but pre-weights every option.
#[derive(Debug, Clone, Copy)]
pub struct UiatsItem {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub favors: Axis,
    pub options: &'static [WeightedOption],
}

/// UIATS result: one score per axis. The conservative axis starts from a
/// built-in 5-point baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UiatsScores {
    pub intervention: u32,
    pub conservative: u32,
}

const CONSERVATIVE_BASELINE: u32 = 5;

/// The UIATS item table, in scoring order. Age and maximum diameter appear
/// here for ordering but weigh on both axes through the handlers in
/// `BESPOKE`; their point tables live there.
static UIATS_ITEMS: &[UiatsItem] = &[
    UiatsItem {
        id: "age",
        label: "Age",
        kind: InputKind::Single,
        favors: Axis::Intervention,
        options: &[],
    },
    UiatsItem {
        id: "riskFactors",
        label: "Risk Factors",
        kind: InputKind::Multiple,
        favors: Axis::Intervention,
        options: &[
            weighted("Previous subarachnoid hemorrhage (2nd aneurysm)", "sah", 4),
            weighted("Family disposition", "family", 3),
            weighted("Japanese", "japanese", 2),
            weighted("Finnish", "finnish", 2),
            weighted("Inuit", "inuit", 2),
            weighted("Smoker", "smoker", 3),
            weighted("Hypertension (systolic blood pressure > 140 mmHg)", "hypertension", 2),
            weighted("Polycystic kidney disease", "pkd", 2),
            weighted("Drug abuse (Cocaine, Amphetamines)", "drug_abuse", 2),
            weighted("Alcohol abuse", "alcohol_abuse", 1),
        ],
    },
    UiatsItem {
        id: "symptoms",
        label: "Symptoms",
        kind: InputKind::Multiple,
        favors: Axis::Intervention,
        options: &[
            weighted("Cranial nerve palsy", "cn_palsy", 4),
            weighted("Mass effect", "mass_effect", 4),
            weighted("Thrombembolic event from aneurysm", "thromboembolic", 3),
            weighted("Seizures", "seizures", 1),
        ],
    },
    UiatsItem {
        id: "otherUiatsFactors",
        label: "Other UIATS Factors",
        kind: InputKind::Multiple,
        favors: Axis::Intervention,
        options: &[
            weighted("Fear of rupture", "fear_rupture", 2),
            weighted("Multiple aneurysms", "multiple_aneurysms", 1),
        ],
    },
    UiatsItem {
        id: "lifeExpectancy",
        label: "Life Expectancy",
        kind: InputKind::Single,
        favors: Axis::Conservative,
        options: &[
            weighted("< 5 years", "<5", 4),
            weighted("5-10 years", "5-10", 3),
            weighted("> 10 years", ">10", 1),
        ],
    },
    UiatsItem {
        id: "comorbidity",
        label: "Comorbidity",
        kind: InputKind::Multiple,
        favors: Axis::Conservative,
        options: &[
            weighted("Dementia", "dementia", 3),
            weighted("Coagulopathy, Thrombosis", "coagulopathy_thrombosis", 2),
            weighted("Psychiatric disorders", "psych_disorders", 2),
        ],
    },
    UiatsItem {
        id: "maximumDiameter",
        label: "Maximum Diameter",
        kind: InputKind::Number,
        favors: Axis::Intervention,
        options: &[],
    },
    UiatsItem {
        id: "morphology",
        label: "Morphology",
        kind: InputKind::Multiple,
        favors: Axis::Intervention,
        options: &[
            weighted("Irregular or lobulated", "irregular_lobulated", 3),
            weighted("Height/Width ratio > 1.6", "hw_ratio_gt_1.6", 1),
        ],
    },
    UiatsItem {
        id: "location",
        label: "Location",
        kind: InputKind::Single,
        favors: Axis::Intervention,
        // The zero rows are kept explicit: ICA, MCA, ACA, and other posterior
        // sites carry no UIATS location weight even though PHASES scores them.
        options: &[
            weighted("Basilar Artery Bifurcation", "basilar_bifurcation", 5),
            weighted("Vertebral or Basilar Artery (not bifurcation)", "vertebral_basilar_other", 4),
            weighted("Anterior or Posterior Communicating Artery (ACOM/PCOM)", "acom_pcom", 2),
            weighted("Internal Carotid Artery (ICA)", "ica", 0),
            weighted("Middle Cerebral Artery (MCA)", "mca", 0),
            weighted("Anterior Cerebral Artery (ACA)", "aca", 0),
            weighted("Other Posterior Circulation", "posterior_other", 0),
        ],
    },
    UiatsItem {
        id: "additionalFindings",
        label: "Additional Findings",
        kind: InputKind::Multiple,
        favors: Axis::Intervention,
        options: &[
            weighted("Aneurysm growth over time", "growth_over_time", 4),
            weighted("De novo aneurysm over time", "denovo_over_time", 3),
            weighted("Contralateral arterial stenosis", "contralateral_stenosis", 1),
        ],
    },
    UiatsItem {
        id: "aneurysmComplexity",
        label: "Aneurysm Complexity",
        kind: InputKind::Single,
        favors: Axis::Conservative,
        options: &[
            weighted("High complexity", "high_complexity", 3),
            weighted("Low complexity", "low_complexity", 0),
        ],
    },
];

/// The UIATS-native item table, in scoring order.
pub fn uiats_items() -> &'static [UiatsItem] {
    UIATS_ITEMS
}

type BespokeHandler = fn(&FormState, &mut UiatsScores);

/// Items whose one raw value maps onto both axes through separately defined
/// point tables. Checked before the generic per-axis path.
const BESPOKE: &[(&str, BespokeHandler)] = &[
    ("age", score_age),
    ("maximumDiameter", score_diameter),
];

// Both age tables are clinically defined; the conservative one is not an
// arithmetic mirror of the intervention one.
const AGE_INTERVENTION: &[(&str, u32)] = &[
    ("<40", 4),
    ("41-60", 3),
    ("61-70", 2),
    ("71-80", 1),
    (">80", 0),
];
const AGE_CONSERVATIVE: &[(&str, u32)] = &[
    ("<40", 0),
    ("41-60", 1),
    ("61-70", 3),
    ("71-80", 4),
    (">80", 5),
];

fn score_age(state: &FormState, scores: &mut UiatsScores) {
    let Some(bracket) = state.choice("age") else {
        return;
    };
    scores.intervention += table_points(AGE_INTERVENTION, bracket);
    scores.conservative += table_points(AGE_CONSERVATIVE, bracket);
}

// The two axes bracket the same millimeter value at different cut points.
fn score_diameter(state: &FormState, scores: &mut UiatsScores) {
    let Some(mm) = state.number("maximumDiameter") else {
        return;
    };

    scores.intervention += if mm < 3.9 {
        0
    } else if mm <= 6.9 {
        1
    } else if mm <= 12.9 {
        2
    } else if mm <= 24.9 {
        3
    } else {
        4
    };

    scores.conservative += if mm < 6.0 {
        0
    } else if mm <= 10.0 {
        1
    } else if mm <= 20.0 {
        3
    } else {
        5
    };
}

fn table_points(table: &[(&str, u32)], token: &str) -> u32 {
    table
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn option_points(item: &UiatsItem, token: &str) -> u32 {
    item.options
        .iter()
        .find(|o| o.token == token)
        .map(|o| o.points)
        .unwrap_or(0)
}

/// Compute both UIATS axis scores from a form state snapshot.
///
/// Total over its input: absent ids, unknown tokens, and wrong-shaped values
/// contribute nothing. An empty state yields the `{0, 5}` baseline.
pub fn calculate_uiats_scores(state: &FormState) -> UiatsScores {
    let mut scores = UiatsScores {
        intervention: 0,
        conservative: CONSERVATIVE_BASELINE,
    };

    for item in UIATS_ITEMS {
        if let Some((_, handler)) = BESPOKE.iter().find(|(id, _)| *id == item.id) {
            handler(state, &mut scores);
            continue;
        }

        let points: u32 = match item.kind {
            InputKind::Single => state
                .choice(item.id)
                .map(|token| option_points(item, token))
                .unwrap_or(0),
            InputKind::Multiple => state
                .choices(item.id)
                .iter()
                .map(|token| option_points(item, token))
                .sum(),
            // The only numeric item is bespoke.
            InputKind::Number => 0,
        };

        match item.favors {
            Axis::Intervention => scores.intervention += points,
            Axis::Conservative => scores.conservative += points,
        }
    }

    debug!(
        intervention = scores.intervention,
        conservative = scores.conservative,
        "uiats scores computed"
    );
    scores
}

/// UIATS: Unruptured Intracranial Aneurysm Treatment Score. Two axes,
/// intervention vs. conservative; the higher axis is the side the score
/// leans toward.
pub struct Uiats;

impl RiskScore for Uiats {
    fn id(&self) -> &str {
        "uiats"
    }

    fn name(&self) -> &str {
        "UIATS"
    }

    fn items(&self) -> &[FormItem] {
        static ITEMS: LazyLock<Vec<FormItem>> =
            LazyLock::new(|| catalog::form_items().to_vec());
        &ITEMS
    }
}

const fn weighted(label: &'static str, token: &'static str, points: u32) -> WeightedOption {
    WeightedOption {
        label,
        token,
        points,
    }
}
