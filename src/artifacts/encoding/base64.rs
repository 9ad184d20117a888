use super::into_text;
use crate::artifacts::core::error::{Result, ToolError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const DECODE: &str = "base64-decode";

pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decodes padded Base64; ASCII whitespace such as line wrapping is ignored.
pub fn decode(input: &str) -> Result<String> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ToolError::Decode {
            operation: DECODE,
            reason: format!("invalid Base64 string ({e})"),
        })?;

    tracing::debug!(input = input.len(), output = bytes.len(), "decoded base64");
    into_text(DECODE, bytes)
}
