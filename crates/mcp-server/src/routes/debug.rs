//! Introspection of the registered tools.

use axum::extract::State;
use axum::Json;
use mcp_tools::ToolDescriptor;
use serde::Serialize;

use crate::state::AppState;

/// Registered tools with their declared parameters.
#[derive(Serialize)]
pub struct ToolListing {
    pub count: usize,
    pub tools: Vec<ToolDescriptor>,
}

/// List registered tools without invoking any of them.
pub async fn tools(State(state): State<AppState>) -> Json<ToolListing> {
    let tools = state.registry.descriptors();
    Json(ToolListing {
        count: tools.len(),
        tools,
    })
}
