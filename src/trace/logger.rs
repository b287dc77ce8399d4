use std::{fmt::Display, fs::OpenOptions, io::Write, sync::Mutex};

use crate::form::form_model::{FieldKind, FieldValue};
use crate::trace::trace::{FieldOutcome, Operation, TraceEvent};

/// Per-field JSONL trace of extract/fill runs.
///
/// A trace that cannot be opened or written is reported on stderr and
/// otherwise ignored; the form operations never fail because of it.
pub struct TraceLogger {
    file: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                warn(&format!("could not open trace file '{}'", path), e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Logger for an optional path; `None` disables tracing.
    pub fn from_path(path: Option<&str>) -> Self {
        path.map(Self::new).unwrap_or_else(Self::disabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Record what happened to one field. `kind` is the kind of the target
    /// input when there is one.
    pub fn log_field(
        &self,
        operation: Operation,
        field: &str,
        outcome: FieldOutcome,
        kind: Option<FieldKind>,
        value: &FieldValue,
    ) {
        if !self.is_enabled() {
            return;
        }

        let mut event = TraceEvent::now(operation, field)
            .with_outcome(outcome)
            .with_value(value);
        if let Some(kind) = kind {
            event = event.with_kind(kind);
        }
        self.log(&event);
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(file) = &self.file else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => return warn("trace event serialization failed", e),
        };

        match file.lock() {
            Ok(mut f) => {
                if let Err(e) = writeln!(f, "{}", line) {
                    warn("trace write failed", e);
                }
            }
            Err(e) => warn("trace file lock poisoned", e),
        }
    }
}

fn warn(what: &str, err: impl Display) {
    eprintln!("Warning: {}: {}", what, err);
}
