//! Error types and handling for the ReClaim services.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and the service layer.

use thiserror::Error;

/// A specialized Result type for ReClaim operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from a tool call.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error building the template catalog.
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::domains::templates::CatalogError),

    /// Error starting or running a service.
    #[error("Service error: {0}")]
    Service(#[from] super::service::ServiceError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_from_tool_error() {
        let err: Error = ToolError::missing_argument("template_id").into();
        assert_eq!(err.to_string(), "Tool error: template_id required");
    }

    #[test]
    fn test_from_catalog_error() {
        let err: Error = crate::domains::templates::CatalogError::missing_fallback("X").into();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn test_config_error() {
        assert_eq!(
            Error::config("bad port").to_string(),
            "Configuration error: bad port"
        );
    }
}
