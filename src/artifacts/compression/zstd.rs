use super::{from_transport, into_text, to_transport};
use crate::artifacts::core::error::{Result, ToolError};

const COMPRESS: &str = "zstd-compress";
const DECOMPRESS: &str = "zstd-decompress";
const LEVEL: i32 = 3;

pub fn compress(input: &str) -> Result<String> {
    let compressed =
        ::zstd::encode_all(input.as_bytes(), LEVEL).map_err(|e| ToolError::Compression {
            operation: COMPRESS,
            reason: e.to_string(),
        })?;

    tracing::debug!(
        input = input.len(),
        output = compressed.len(),
        "zstd compressed"
    );
    Ok(to_transport(compressed.into()))
}

pub fn decompress(input: &str) -> Result<String> {
    let compressed = from_transport(DECOMPRESS, input)?;

    let decompressed = ::zstd::decode_all(&*compressed).map_err(|e| ToolError::Decompression {
        operation: DECOMPRESS,
        reason: e.to_string(),
    })?;

    tracing::debug!(
        input = compressed.len(),
        output = decompressed.len(),
        "zstd decompressed"
    );
    into_text(DECOMPRESS, decompressed)
}
