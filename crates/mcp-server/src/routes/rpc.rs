//! MCP JSON-RPC endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::mcp;
use crate::state::AppState;

/// Accept one JSON-RPC request. Notifications are acknowledged with 202.
pub async fn rpc(State(state): State<AppState>, body: Bytes) -> Response {
    match mcp::handle_body(&state.registry, &body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
