//! Form serialization helpers: read named inputs out of an element tree into
//! a flat object, and write such an object back into the inputs.

pub mod cli;
pub mod form;
pub mod scope;
pub mod trace;

pub use form::extractor::{extract, extract_filtered, extract_into};
pub use form::filler::{fill, fill_with, unmatched_fields};
pub use form::form_model::{DuplicatePolicy, FieldKind, FieldValue, FormObject};
pub use scope::scope_model::DomNode;
