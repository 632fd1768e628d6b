//! aneura-instruments
//!
//! Clinical risk score definitions for unruptured intracranial aneurysms.
//! Pure data and arithmetic — no I/O. Defines the combined form catalog and
//! the scoring rules for each supported score.

pub mod catalog;
pub mod scores;

use aneura_core::form::{AttributeValue, FormState};
use catalog::{FormItem, InputKind, ValidationError};

pub use scores::phases::{PhasesResult, calculate_phases_score};
pub use scores::uiats::{UiatsScores, calculate_uiats_scores};

/// Trait implemented by each clinical risk score.
pub trait RiskScore: Send + Sync {
    /// Unique identifier for this score (e.g., "uiats", "phases").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "UIATS", "PHASES").
    fn name(&self) -> &str;

    /// The form items this score reads, in display order.
    fn items(&self) -> &[FormItem];

    /// Advisory check of a form state against this score's items.
    ///
    /// The calculators are fail-open and never consult these findings; they
    /// exist so the presentation layer can surface suspect input.
    fn validate_values(&self, state: &FormState) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for item in self.items() {
            let Some(value) = state.get(&item.id) else {
                continue;
            };
            match (item.kind, value) {
                (InputKind::Single, AttributeValue::Choice(token)) => {
                    if !item.has_option(token) {
                        errors.push(unknown_token(item, token));
                    }
                }
                (InputKind::Multiple, AttributeValue::Choices(tokens)) => {
                    for token in tokens {
                        if !item.has_option(token) {
                            errors.push(unknown_token(item, token));
                        }
                    }
                }
                (InputKind::Number, AttributeValue::Number(value)) => {
                    if !value.is_finite() || *value < 0.0 {
                        errors.push(ValidationError {
                            attribute_id: item.id.clone(),
                            kind: item.kind,
                            message: format!(
                                "{}: {} is not a usable measurement",
                                item.label, value
                            ),
                        });
                    }
                }
                (kind, _) => {
                    errors.push(ValidationError {
                        attribute_id: item.id.clone(),
                        kind,
                        message: format!(
                            "{}: value does not match the expected input shape",
                            item.label
                        ),
                    });
                }
            }
        }
        errors
    }
}

/// Return all registered risk scores.
pub fn all_scores() -> Vec<Box<dyn RiskScore>> {
    vec![
        Box::new(scores::uiats::Uiats),
        Box::new(scores::phases::Phases),
    ]
}

/// Look up a risk score by ID.
pub fn get_score(id: &str) -> Option<Box<dyn RiskScore>> {
    all_scores().into_iter().find(|s| s.id() == id)
}

fn unknown_token(item: &FormItem, token: &str) -> ValidationError {
    ValidationError {
        attribute_id: item.id.clone(),
        kind: item.kind,
        message: format!("{}: '{}' is not one of the defined options", item.label, token),
    }
}
