//! Application state shared across handlers.

use std::sync::Arc;

use mcp_tools::ToolRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Registered tools, read-only after startup.
    pub registry: Arc<ToolRegistry>,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
