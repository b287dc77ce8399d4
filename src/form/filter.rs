use serde::{Deserialize, Serialize};

use crate::form::form_model::{FieldValue, FormObject};

/// Declarative extraction filter, loadable from config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    /// Names that are never extracted
    #[serde(default)]
    pub skip: Vec<String>,

    /// If non-empty, only these names are extracted
    #[serde(default)]
    pub only: Vec<String>,

    /// Drop text fields whose value is empty
    #[serde(default)]
    pub skip_empty: bool,
}

impl FieldFilter {
    pub fn allows(&self, name: &str, value: &FieldValue) -> bool {
        if self.skip.iter().any(|s| s == name) {
            return false;
        }
        if !self.only.is_empty() && !self.only.iter().any(|o| o == name) {
            return false;
        }
        if self.skip_empty && value.as_str() == Some("") {
            return false;
        }
        true
    }

    /// True when the filter lets everything through.
    pub fn is_passthrough(&self) -> bool {
        self.skip.is_empty() && self.only.is_empty() && !self.skip_empty
    }

    /// Closure form accepted by the extractor.
    pub fn as_predicate(&self) -> impl FnMut(&FormObject, &str, &FieldValue) -> bool + '_ {
        move |_, name, value| self.allows(name, value)
    }
}
