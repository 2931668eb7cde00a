//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ToolError;

/// Semantic type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Free-form text.
    String,
    /// Floating point number.
    Number,
}

impl ParameterKind {
    /// JSON Schema type name.
    pub fn schema_type(self) -> &'static str {
        match self {
            ParameterKind::String => "string",
            ParameterKind::Number => "number",
        }
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolParameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    pub description: &'static str,
    pub required: bool,
}

impl ToolParameter {
    /// A parameter the caller must supply.
    pub const fn required(name: &'static str, kind: ParameterKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
        }
    }

    /// A parameter with a default applied by the tool.
    pub const fn optional(name: &'static str, kind: ParameterKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
        }
    }
}

/// Name, description and parameters of a registered tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

impl ToolDescriptor {
    /// JSON Schema object describing the tool's arguments.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.parameters {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
        }

        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an optional string parameter.
    ///
    /// Absent and `null` read as `None`; any other non-string is an error.
    pub fn get_string_opt(&self, key: &str) -> Result<Option<String>, ToolError> {
        match self.params.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            }),
        }
    }

    /// Get a string parameter, falling back to `default` when absent, blank or whitespace.
    pub fn get_string_or(&self, key: &str, default: &str) -> Result<String, ToolError> {
        Ok(self
            .get_string_opt(key)?
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| default.to_string()))
    }

    /// Get an f64 parameter, returning an error if missing or not a number.
    pub fn get_f64(&self, key: &str) -> Result<f64, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_f64()
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected number".to_string(),
            })
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result text.
    pub content: String,
}

impl ToolOutput {
    /// Create a successful output. Failures are reported as [`ToolError`].
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A named operation an MCP client can invoke.
///
/// Each tool declares its parameters up front so that it can be listed
/// without being executed.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Declared parameters, in order.
    fn parameters(&self) -> &[ToolParameter];

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;

    /// Snapshot of the tool's declaration.
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: Value) -> ToolArgs {
        let params = value
            .as_object()
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();
        ToolArgs::new(params)
    }

    #[test]
    fn test_get_string_or_defaults_blank() {
        let a = args(json!({"coin": "   ", "vs": "", "name": "eth"}));
        assert_eq!(a.get_string_or("coin", "BTC").unwrap(), "BTC");
        assert_eq!(a.get_string_or("vs", "usd").unwrap(), "usd");
        assert_eq!(a.get_string_or("absent", "usd").unwrap(), "usd");
        assert_eq!(a.get_string_or("name", "BTC").unwrap(), "eth");
    }

    #[test]
    fn test_get_string_opt_rejects_numbers() {
        let a = args(json!({"coin": 5, "other": null}));
        assert!(matches!(
            a.get_string_opt("coin"),
            Err(ToolError::InvalidParameter { .. })
        ));
        assert_eq!(a.get_string_opt("other").unwrap(), None);
    }

    #[test]
    fn test_get_f64() {
        let a = args(json!({"latitude": 39.7456, "bad": "north"}));
        assert_eq!(a.get_f64("latitude").unwrap(), 39.7456);
        assert!(matches!(
            a.get_f64("longitude"),
            Err(ToolError::MissingParameter(_))
        ));
        assert!(matches!(
            a.get_f64("bad"),
            Err(ToolError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_input_schema() {
        let descriptor = ToolDescriptor {
            name: "demo".to_string(),
            description: "Demo tool".to_string(),
            parameters: vec![
                ToolParameter::required("latitude", ParameterKind::Number, "Latitude"),
                ToolParameter::optional("unit", ParameterKind::String, "Unit"),
            ],
        };

        let schema = descriptor.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["latitude"]["type"], "number");
        assert_eq!(schema["properties"]["unit"]["description"], "Unit");
        assert_eq!(schema["required"], json!(["latitude"]));
    }
}
