use crate::artifacts::core::error::{Result, ToolError};
use serde_json::Value;

const FORMAT: &str = "json-format";

pub fn validate(input: &str) -> bool {
    serde_json::from_str::<Value>(input).is_ok()
}

/// Pretty-prints JSON with 2-space indentation, keeping object key order.
pub fn format(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input).map_err(|e| ToolError::Format {
        operation: FORMAT,
        reason: format!("Invalid JSON: {e}"),
    })?;

    serde_json::to_string_pretty(&value).map_err(|e| ToolError::Format {
        operation: FORMAT,
        reason: e.to_string(),
    })
}
