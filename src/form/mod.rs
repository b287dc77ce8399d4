pub mod extractor;
pub mod filler;
pub mod filter;
pub mod form_model;
