use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name → value, in the order fields were first assigned.
pub type FormObject = IndexMap<String, FieldValue>;

/// How an input element stores its state.
///
/// Resolved once from the `type` attribute: checkboxes carry a checked flag,
/// everything else carries a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Checkbox,
}

impl FieldKind {
    pub fn from_type_attr(input_type: Option<&str>) -> Self {
        match input_type {
            Some(t) if t.trim().eq_ignore_ascii_case("checkbox") => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }
}

/// A single extracted or to-be-filled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Truthiness used when filling a checkbox: `true`, or any non-empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => !s.is_empty(),
        }
    }

    /// String form used when filling a text-like input.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Kind of input this value was read from: booleans only come from checkboxes.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Bool(_) => FieldKind::Checkbox,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Policy for a mapping key that names more than one input in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Write every element carrying the name, each by its own kind.
    #[default]
    All,
    /// Write only the first element in document order.
    First,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(DuplicatePolicy::All),
            "first" => Ok(DuplicatePolicy::First),
            other => Err(format!("unknown duplicate policy '{}' (expected all or first)", other)),
        }
    }
}
