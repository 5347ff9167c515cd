//! Tool-specific error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type for tool calls.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during a tool call.
///
/// Unknown tools are HTTP 404 and argument or body problems are HTTP 400.
/// Everything that goes wrong talking to the backend is HTTP 500.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A required argument is absent or empty.
    #[error("{0} required")]
    MissingArgument(&'static str),

    /// An argument has the wrong type or shape.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request body is not valid JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// The backend answered with a non-success status.
    #[error("Backend error: {status} {reason}")]
    Upstream { status: u16, reason: String },

    /// The backend could not be reached.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a body that is not JSON.
    #[error("Invalid backend response: {0}")]
    Decode(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(name: &'static str) -> Self {
        Self::MissingArgument(name)
    }

    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an upstream error from a backend status code.
    pub fn upstream(status: reqwest::StatusCode) -> Self {
        Self::Upstream {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingArgument(_) | Self::InvalidArgument(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Upstream { .. } | Self::Transport(_) | Self::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let err = ToolError::missing_argument("template_id");
        assert_eq!(err.to_string(), "template_id required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_is_404() {
        let err = ToolError::not_found("delete_case");
        assert_eq!(err.to_string(), "Tool not found: delete_case");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_message() {
        let err = ToolError::upstream(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Backend error: 503 Service Unavailable");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_errors_are_400() {
        assert_eq!(
            ToolError::invalid_argument("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ToolError::InvalidBody("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_backend_failures_are_500() {
        assert_eq!(
            ToolError::Transport("connection refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ToolError::Decode("expected value".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
