//! Strict field access over upstream JSON documents.
//!
//! A missing key is always an error. A JSON `null` where a string is expected
//! reads as an empty string.

use serde_json::Value;

use crate::error::ToolError;

/// Get a required member of an object.
pub fn field<'a>(value: &'a Value, key: &str) -> Result<&'a Value, ToolError> {
    value
        .get(key)
        .ok_or_else(|| ToolError::MissingField(key.to_string()))
}

/// Get a required string member. `null` yields `""`.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    match field(value, key)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(""),
        _ => Err(ToolError::UnexpectedType {
            field: key.to_string(),
            expected: "a string",
        }),
    }
}

/// Get a required integer member.
pub fn i64_field(value: &Value, key: &str) -> Result<i64, ToolError> {
    field(value, key)?
        .as_i64()
        .ok_or_else(|| ToolError::UnexpectedType {
            field: key.to_string(),
            expected: "an integer",
        })
}

/// Get a required array member.
pub fn array_field<'a>(value: &'a Value, key: &str) -> Result<&'a Vec<Value>, ToolError> {
    field(value, key)?
        .as_array()
        .ok_or_else(|| ToolError::UnexpectedType {
            field: key.to_string(),
            expected: "an array",
        })
}
