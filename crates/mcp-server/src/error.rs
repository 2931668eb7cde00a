//! Error types for server startup.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Upstream client setup failed.
    #[error("Tool setup error: {0}")]
    Tool(#[from] mcp_tools::ToolError),

    /// Listener bind or serve failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
