use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::form::form_model::{FieldKind, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Extract,
    Fill,
}

/// What happened to a single field during an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOutcome {
    Assigned,
    Filtered,
    Filled,
    Unmatched,
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub operation: Operation,

    pub field: String,
    pub outcome: Option<FieldOutcome>,
    pub kind: Option<FieldKind>,

    /// SHA-1 of the value; raw values never reach the trace
    pub value_fingerprint: Option<String>,
}

impl TraceEvent {
    pub fn now(operation: Operation, field: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            operation,
            field: field.to_string(),
            outcome: None,
            kind: None,
            value_fingerprint: None,
        }
    }

    pub fn with_outcome(mut self, outcome: FieldOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_value(mut self, value: &FieldValue) -> Self {
        self.value_fingerprint = Some(value_fingerprint(value));
        self
    }
}

pub fn value_fingerprint(value: &FieldValue) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(value.to_text().as_bytes());
    format!("{:x}", hasher.finalize())
}
