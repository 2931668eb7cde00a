//! Route handlers for the MCP server.

pub mod debug;
pub mod health;
pub mod rpc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // MCP endpoint
        .route("/mcp", post(rpc::rpc))
        // Health check
        .route("/health", get(health::health))
        // Introspection
        .route("/debug/tools", get(debug::tools))
        .layer(CorsLayer::permissive())
}
