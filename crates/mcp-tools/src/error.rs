//! Error types for tool operations.

use thiserror::Error;

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Expected field absent from an upstream document.
    #[error("Missing field in upstream response: {0}")]
    MissingField(String),

    /// Field present but of the wrong JSON type.
    #[error("Field '{field}' is not {expected}")]
    UnexpectedType { field: String, expected: &'static str },

    /// HTTP client could not be built.
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// General execution error.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}
