use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The input widget shape of a form item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InputKind {
    /// One option token.
    Single,
    /// Any subset of option tokens.
    Multiple,
    /// A free-form number.
    Number,
}

/// One selectable option, carrying the stable clinical token the calculators
/// interpret (e.g. `"basilar_bifurcation"`, `"71-80"`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormOption {
    pub label: String,
    pub value: String,
}

/// One clinical factor surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormItem {
    pub id: String,
    pub label: String,
    pub description: String,
    pub kind: InputKind,
    /// Ordered display options; empty for numeric items.
    pub options: Vec<FormOption>,
}

impl FormItem {
    pub fn has_option(&self, token: &str) -> bool {
        self.options.iter().any(|o| o.value == token)
    }
}

/// An advisory finding from form-value validation. Scoring never depends on
/// these; the calculators stay fail-open regardless.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub attribute_id: String,
    pub kind: InputKind,
    pub message: String,
}

/// The combined form catalog, in canonical display order.
///
/// Both calculators read their inputs from values keyed by these ids; each
/// applies its own point system to the tokens.
pub fn form_items() -> &'static [FormItem] {
    static ITEMS: LazyLock<Vec<FormItem>> = LazyLock::new(|| {
        vec![
            FormItem {
                id: "age".to_string(),
                label: "Age".to_string(),
                description: "The patient's age".to_string(),
                kind: InputKind::Single,
                options: vec![
                    option("< 40 years", "<40"),
                    option("41-60 years", "41-60"),
                    option("61-70 years", "61-70"),
                    option("71-80 years", "71-80"),
                    option("> 80 years", ">80"),
                ],
            },
            FormItem {
                id: "riskFactors".to_string(),
                label: "Risk Factors".to_string(),
                description: "The patient's risk factors. Select all that apply.".to_string(),
                kind: InputKind::Multiple,
                options: vec![
                    option("Previous subarachnoid hemorrhage (2nd aneurysm)", "sah"),
                    option("Family disposition", "family"),
                    option("North American or European (non-Finnish)", "na_eur_non_finnish"),
                    option("Japanese", "japanese"),
                    option("Finnish", "finnish"),
                    option("Inuit", "inuit"),
                    option("Smoker", "smoker"),
                    option("Hypertension (systolic blood pressure > 140 mmHg)", "hypertension"),
                    option("Polycystic kidney disease", "pkd"),
                    option("Drug abuse (Cocaine, Amphetamines)", "drug_abuse"),
                    option("Alcohol abuse", "alcohol_abuse"),
                ],
            },
            FormItem {
                id: "symptoms".to_string(),
                label: "Symptoms".to_string(),
                description: "The patient's symptoms. Select all that apply.".to_string(),
                kind: InputKind::Multiple,
                options: vec![
                    option("Cranial nerve palsy", "cn_palsy"),
                    option("Mass effect", "mass_effect"),
                    option("Thrombembolic event from aneurysm", "thromboembolic"),
                    option("Seizures", "seizures"),
                ],
            },
            FormItem {
                id: "otherUiatsFactors".to_string(),
                label: "Other UIATS Factors".to_string(),
                description: "Other information relevant for UIATS. Select all that apply."
                    .to_string(),
                kind: InputKind::Multiple,
                options: vec![
                    option("Fear of rupture", "fear_rupture"),
                    option("Multiple aneurysms", "multiple_aneurysms"),
                ],
            },
            FormItem {
                id: "lifeExpectancy".to_string(),
                label: "Life Expectancy".to_string(),
                description: "The patient's life expectancy".to_string(),
                kind: InputKind::Single,
                options: vec![
                    option("< 5 years", "<5"),
                    option("5-10 years", "5-10"),
                    option("> 10 years", ">10"),
                ],
            },
            FormItem {
                id: "comorbidity".to_string(),
                label: "Comorbidity".to_string(),
                description: "The patient's comorbidity. Select all that apply.".to_string(),
                kind: InputKind::Multiple,
                options: vec![
                    option("Dementia", "dementia"),
                    option("Coagulopathy, Thrombosis", "coagulopathy_thrombosis"),
                    option("Psychiatric disorders", "psych_disorders"),
                ],
            },
            FormItem {
                id: "maximumDiameter".to_string(),
                label: "Maximum Diameter".to_string(),
                description: "The maximum diameter of the aneurysm in millimeters".to_string(),
                kind: InputKind::Number,
                options: vec![],
            },
            FormItem {
                id: "morphology".to_string(),
                label: "Morphology".to_string(),
                description: "Morphological features of the aneurysm. Select all that apply."
                    .to_string(),
                kind: InputKind::Multiple,
                options: vec![
                    option("Irregular or lobulated", "irregular_lobulated"),
                    option("Height/Width ratio > 1.6", "hw_ratio_gt_1.6"),
                ],
            },
            FormItem {
                id: "location".to_string(),
                label: "Location".to_string(),
                description: "Location of the aneurysm. Select the most specific option."
                    .to_string(),
                kind: InputKind::Single,
                options: vec![
                    option("Basilar Artery Bifurcation", "basilar_bifurcation"),
                    option("Vertebral or Basilar Artery (not bifurcation)", "vertebral_basilar_other"),
                    option(
                        "Anterior or Posterior Communicating Artery (ACOM/PCOM)",
                        "acom_pcom",
                    ),
                    option("Internal Carotid Artery (ICA)", "ica"),
                    option("Middle Cerebral Artery (MCA)", "mca"),
                    option("Anterior Cerebral Artery (ACA)", "aca"),
                    option(
                        "Other Posterior Circulation (e.g., PCA, PICA if not covered above)",
                        "posterior_other",
                    ),
                ],
            },
            FormItem {
                id: "additionalFindings".to_string(),
                label: "Additional Findings".to_string(),
                description: "Other risk-relevant vascular findings. Select all that apply."
                    .to_string(),
                kind: InputKind::Multiple,
                options: vec![
                    option("Aneurysm growth over time", "growth_over_time"),
                    option("De novo aneurysm over time", "denovo_over_time"),
                    option("Contralateral arterial stenosis", "contralateral_stenosis"),
                ],
            },
            FormItem {
                id: "aneurysmComplexity".to_string(),
                label: "Aneurysm Complexity".to_string(),
                description: "Assessment of aneurysm treatment complexity".to_string(),
                kind: InputKind::Single,
                options: vec![
                    option("High complexity", "high_complexity"),
                    option("Low complexity", "low_complexity"),
                ],
            },
        ]
    });
    &ITEMS
}

/// Look up a form item by ID.
pub fn form_item(id: &str) -> Option<&'static FormItem> {
    form_items().iter().find(|item| item.id == id)
}

fn option(label: &str, value: &str) -> FormOption {
    FormOption {
        label: label.to_string(),
        value: value.to_string(),
    }
}
