//! Binary-to-text encodings and digests
//!
//! - `base64`: standard padded Base64 over the UTF-8 bytes of a text
//! - `base91`: basE91, denser than Base64 for the same payload
//! - `digest`: SHA-256 / SHA-1 digests rendered as hex or Base64

pub mod base64;
pub mod base91;
pub mod digest;

use crate::artifacts::core::error::{Result, ToolError};

// decoded payloads must be valid UTF-8 text
fn into_text(operation: &'static str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ToolError::Decode {
        operation,
        reason: format!("decoded bytes are not valid UTF-8 ({e})"),
    })
}
