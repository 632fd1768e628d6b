use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One answered form attribute.
///
/// Single-choice items hold the selected option token (e.g. `"71-80"`),
/// multi-choice items the set of selected tokens (order irrelevant), and
/// numeric items a plain number. Untagged so the JSON shape matches what the
/// frontend form state already produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AttributeValue {
    Choice(String),
    Choices(Vec<String>),
    Number(f64),
}

impl AttributeValue {
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AttributeValue::Choice(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Choices(tokens) => Some(tokens),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(token: &str) -> Self {
        AttributeValue::Choice(token.to_string())
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(tokens: Vec<&str>) -> Self {
        AttributeValue::Choices(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

/// The attribute value map for one form instance.
///
/// Keys are attribute ids from the form catalog. The presentation layer owns
/// all mutation, one field per input event; the calculators only ever read a
/// snapshot. An id that was never filled in is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormState(BTreeMap<String, AttributeValue>);

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: &str, value: impl Into<AttributeValue>) {
        self.0.insert(id.to_string(), value.into());
    }

    pub fn unset(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn get(&self, id: &str) -> Option<&AttributeValue> {
        self.0.get(id)
    }

    /// The selected token of a single-choice attribute, if one is set and
    /// has that shape.
    pub fn choice(&self, id: &str) -> Option<&str> {
        self.0.get(id).and_then(AttributeValue::as_choice)
    }

    /// The selected tokens of a multi-choice attribute; empty when absent or
    /// differently shaped.
    pub fn choices(&self, id: &str) -> &[String] {
        self.0
            .get(id)
            .and_then(AttributeValue::as_choices)
            .unwrap_or(&[])
    }

    /// The value of a numeric attribute, if one is set and has that shape.
    pub fn number(&self, id: &str) -> Option<f64> {
        self.0.get(id).and_then(AttributeValue::as_number)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
