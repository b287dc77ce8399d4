use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::form::form_model::{FieldValue, FormObject};
use crate::scope::error::FormError;
use crate::scope::html::parse_html;
use crate::scope::scope_model::DomNode;

// ============================================================================
// Scope
// ============================================================================

/// Load a scope from disk. `.html`/`.htm` files are parsed as markup,
/// anything else as a JSON snapshot.
pub fn load_scope(path: &str) -> Result<DomNode, FormError> {
    let content = read_file(path)?;
    if is_html_path(path) {
        parse_html(&content)
    } else {
        parse_snapshot(&content)
    }
}

pub fn parse_snapshot(json: &str) -> Result<DomNode, FormError> {
    serde_json::from_str(json).map_err(|e| FormError::JsonParse {
        context: "scope snapshot".into(),
        source: e,
    })
}

pub fn snapshot_json(scope: &DomNode) -> Result<String, FormError> {
    serde_json::to_string_pretty(scope).map_err(|e| FormError::JsonSerialize {
        context: "scope snapshot".into(),
        source: e,
    })
}

fn is_html_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}

// ============================================================================
// Form objects
// ============================================================================

pub fn load_object(path: &str) -> Result<FormObject, FormError> {
    let content = read_file(path)?;
    parse_object(&content)
}

/// Parse a flat JSON object of string/boolean values, keeping key order.
pub fn parse_object(json: &str) -> Result<FormObject, FormError> {
    let raw: IndexMap<String, Value> =
        serde_json::from_str(json).map_err(|e| FormError::JsonParse {
            context: "form object".into(),
            source: e,
        })?;

    let mut object = FormObject::with_capacity(raw.len());
    for (name, value) in raw {
        let field = match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Bool(b) => FieldValue::Bool(b),
            other => {
                return Err(FormError::InvalidObject(format!(
                    "field '{}' must be a string or boolean, got {}",
                    name, other
                )));
            }
        };
        object.insert(name, field);
    }
    Ok(object)
}

pub fn object_json(object: &FormObject) -> Result<String, FormError> {
    serde_json::to_string_pretty(object).map_err(|e| FormError::JsonSerialize {
        context: "form object".into(),
        source: e,
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn read_file(path: &str) -> Result<String, FormError> {
    std::fs::read_to_string(path).map_err(|e| FormError::Io {
        path: path.to_string(),
        source: e,
    })
}

pub fn write_file(path: &str, content: &str) -> Result<(), FormError> {
    std::fs::write(path, content).map_err(|e| FormError::Io {
        path: path.to_string(),
        source: e,
    })
}
