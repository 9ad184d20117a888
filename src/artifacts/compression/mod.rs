//! Text compression
//!
//! Compressed payloads are binary, so they travel as Base64 text:
//! `compress` returns Base64 and `decompress` expects it.
//!
//! - `gzip`: RFC 1952 streams via flate2
//! - `zstd`: Zstandard frames

pub mod gzip;
pub mod zstd;

use crate::artifacts::core::error::{Result, ToolError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

fn to_transport(compressed: Bytes) -> String {
    STANDARD.encode(&compressed)
}

fn from_transport(operation: &'static str, input: &str) -> Result<Bytes> {
    STANDARD
        .decode(input.trim().as_bytes())
        .map(Bytes::from)
        .map_err(|e| ToolError::Decompression {
            operation,
            reason: format!("input is not Base64 ({e})"),
        })
}

fn into_text(operation: &'static str, decompressed: Vec<u8>) -> Result<String> {
    String::from_utf8(decompressed).map_err(|e| ToolError::Decompression {
        operation,
        reason: format!("decompressed bytes are not valid UTF-8 ({e})"),
    })
}
