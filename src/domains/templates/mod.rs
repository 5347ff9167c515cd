//! Templates domain module.
//!
//! Owns the letter template catalog served by the backend at
//! `GET /templates/{template_id}`, and the backend's OpenAPI document.
//!
//! ## Architecture
//!
//! - `catalog.rs` - Immutable catalog with fallback lookup
//! - `definitions.rs` - Built-in template bodies and citations
//! - `openapi.rs` - Backend OpenAPI document
//! - `error.rs` - Catalog construction errors

mod catalog;
pub mod definitions;
mod error;
pub mod openapi;

pub use catalog::{Template, TemplateCatalog};
pub use error::CatalogError;
