//! MCP method dispatch.
//!
//! Turns one JSON-RPC request body into a response, routing `tools/*`
//! methods to the [`ToolRegistry`].

use std::collections::HashMap;

use mcp_tools::{ToolError, ToolRegistry};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::protocol::{
    error_codes, methods, CallToolParams, CallToolResult, JsonRpcId, JsonRpcRequest,
    JsonRpcResponse, DEFAULT_PROTOCOL_VERSION,
};

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "weather-mcp-server";

const INSTRUCTIONS: &str = "Tools for US weather alerts and forecasts (api.weather.gov) \
                            and cryptocurrency spot prices (CoinGecko).";

/// A failed method call, reported as a JSON-RPC error.
#[derive(Debug)]
struct MethodError {
    code: i32,
    message: String,
}

impl MethodError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Handle a raw request body.
///
/// Returns `None` for notifications, which get no response. Any body that
/// is not JSON, including one that is not UTF-8, is a parse error.
pub async fn handle_body(registry: &ToolRegistry, body: &[u8]) -> Option<JsonRpcResponse> {
    let raw: Value = match serde_json::from_slice(body) {
        Ok(raw) => raw,
        Err(e) => {
            return Some(JsonRpcResponse::error(
                None,
                error_codes::PARSE_ERROR,
                format!("Parse error: {}", e),
            ))
        }
    };

    // Keep the id around so an invalid request can still be answered to it.
    let raw_id = raw
        .get("id")
        .cloned()
        .and_then(|id| serde_json::from_value::<JsonRpcId>(id).ok());

    let has_id = raw.get("id").is_some();

    let mut request: JsonRpcRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(e) => {
            return Some(JsonRpcResponse::error(
                raw_id,
                error_codes::INVALID_REQUEST,
                format!("Invalid request: {}", e),
            ))
        }
    };

    // `"id": null` still names a request; only a missing id is a notification.
    if has_id && request.id.is_none() {
        request.id = Some(JsonRpcId::Null);
    }

    handle_request(registry, request).await
}

/// Handle a parsed request.
pub async fn handle_request(
    registry: &ToolRegistry,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::error(
            request.id,
            error_codes::INVALID_REQUEST,
            "Invalid request: jsonrpc must be \"2.0\"",
        ));
    }

    if request.is_notification() {
        debug!("Notification received: {}", request.method);
        return None;
    }

    debug!("MCP request: {}", request.method);

    let result = match request.method.as_str() {
        methods::INITIALIZE => Ok(initialize(request.params.as_ref())),
        methods::PING => Ok(json!({})),
        methods::TOOLS_LIST => Ok(list_tools(registry)),
        methods::TOOLS_CALL => call_tool(registry, request.params).await,
        m if m.starts_with(methods::NOTIFICATION_PREFIX) => {
            // Notification sent with an id; acknowledge it.
            Ok(json!({}))
        }
        other => Err(MethodError::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", other),
        )),
    };

    Some(match result {
        Ok(value) => JsonRpcResponse::success(request.id, value),
        Err(e) => JsonRpcResponse::error(request.id, e.code, e.message),
    })
}

fn initialize(params: Option<&Value>) -> Value {
    let protocol_version = params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "instructions": INSTRUCTIONS,
    })
}

fn list_tools(registry: &ToolRegistry) -> Value {
    let tools: Vec<Value> = registry
        .descriptors()
        .iter()
        .map(|d| {
            json!({
                "name": d.name,
                "description": d.description,
                "inputSchema": d.input_schema(),
            })
        })
        .collect();

    json!({ "tools": tools })
}

async fn call_tool(registry: &ToolRegistry, params: Option<Value>) -> Result<Value, MethodError> {
    let params: CallToolParams = params
        .ok_or_else(|| MethodError::new(error_codes::INVALID_PARAMS, "Missing params"))
        .and_then(|p| {
            serde_json::from_value(p).map_err(|e| {
                MethodError::new(error_codes::INVALID_PARAMS, format!("Invalid params: {}", e))
            })
        })?;

    if !registry.has_tool(&params.name) {
        return Err(MethodError::new(
            error_codes::INVALID_PARAMS,
            format!("Unknown tool: {}", params.name),
        ));
    }

    let arguments: HashMap<String, Value> = params.arguments.unwrap_or_default().into_iter().collect();

    let result = match registry.execute(&params.name, arguments).await {
        Ok(output) => CallToolResult::text(output.content, false),
        Err(e) => {
            warn!("Tool '{}' failed: {}", params.name, e);
            CallToolResult::text(failure_text(&params.name, &e), true)
        }
    };

    serde_json::to_value(result)
        .map_err(|e| MethodError::new(error_codes::INTERNAL_ERROR, e.to_string()))
}

fn failure_text(tool: &str, error: &ToolError) -> String {
    format!("An error occurred invoking '{}': {}", tool, error)
}
