use super::{from_transport, into_text, to_transport};
use crate::artifacts::core::error::{Result, ToolError};
use bytes::Bytes;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

const COMPRESS: &str = "gzip-compress";
const DECOMPRESS: &str = "gzip-decompress";

fn compression_error(e: std::io::Error) -> ToolError {
    ToolError::Compression {
        operation: COMPRESS,
        reason: e.to_string(),
    }
}

pub fn compress(input: &str) -> Result<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(input.as_bytes())
        .map_err(compression_error)?;

    let compressed: Bytes = encoder.finish().map_err(compression_error)?.into();

    tracing::debug!(
        input = input.len(),
        output = compressed.len(),
        "gzip compressed"
    );
    Ok(to_transport(compressed))
}

pub fn decompress(input: &str) -> Result<String> {
    let compressed = from_transport(DECOMPRESS, input)?;

    let mut decoder = GzDecoder::new(&*compressed);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| ToolError::Decompression {
            operation: DECOMPRESS,
            reason: e.to_string(),
        })?;

    tracing::debug!(
        input = compressed.len(),
        output = decompressed.len(),
        "gzip decompressed"
    );
    into_text(DECOMPRESS, decompressed)
}

#[cfg(test)]
mod tests {
    use super::{compress, decompress};
    use crate::artifacts::core::error::ToolError;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Hello, World!")]
    #[case("")]
    #[case("Test 123")]
    #[case(
        "A longer string to test compression efficiency. This should be significantly compressed."
    )]
    #[case("Special chars: !@#$%^&*()")]
    fn round_trips_text(#[case] text: &str) {
        let compressed = compress(text).unwrap();

        assert_eq!(decompress(&compressed).unwrap(), text);
    }

    #[test]
    fn writes_gzip_magic_header() {
        let compressed = STANDARD.decode(compress("abc").unwrap()).unwrap();

        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn shrinks_repetitive_text() {
        let text = "abcabcabc".repeat(200);

        assert!(compress(&text).unwrap().len() < text.len() / 4);
    }

    #[rstest]
    #[case::not_base64("%%%")]
    #[case::foreign_format("SW52YWxpZENvbnRlbnQ=")]
    fn rejects_corrupt_input(#[case] input: &str) {
        let err = decompress(input).unwrap_err();

        assert!(matches!(err, ToolError::Decompression { .. }));
        assert_eq!(err.operation(), "gzip-decompress");
    }
}
