use std::fmt;

#[derive(Debug)]
pub enum FormError {
    /// Scope or values file could not be read or written
    Io { path: String, source: std::io::Error },

    /// JSON parsing failed (snapshot or values file)
    JsonParse { context: String, source: serde_json::Error },

    /// JSON serialization failed (snapshot or extracted object)
    JsonSerialize { context: String, source: serde_json::Error },

    /// HTML fragment produced no elements
    HtmlStructure(String),

    /// Values file is not a flat object of strings and booleans
    InvalidObject(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            FormError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            FormError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            FormError::HtmlStructure(msg) => {
                write!(f, "Unexpected HTML structure: {}", msg)
            }
            FormError::InvalidObject(msg) => {
                write!(f, "Invalid form object: {}", msg)
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Io { source, .. } => Some(source),
            FormError::JsonParse { source, .. } => Some(source),
            FormError::JsonSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
