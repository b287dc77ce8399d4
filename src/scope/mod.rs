pub mod error;
pub mod html;
pub mod loader;
pub mod scope_model;
