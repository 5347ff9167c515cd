//! Template catalog error types.

use thiserror::Error;

/// Errors that can occur while building a template catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fallback template id is not in the catalog.
    #[error("Fallback template not in catalog: {0}")]
    MissingFallback(String),
}

impl CatalogError {
    /// Create a new "missing fallback" error.
    pub fn missing_fallback(id: impl Into<String>) -> Self {
        Self::MissingFallback(id.into())
    }
}
