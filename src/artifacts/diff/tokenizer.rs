//! Line tokenizer
//!
//! Splits text at `\n` and `\r\n` terminators. Concatenating the produced
//! tokens always yields the (optionally CR-normalized) input back.

use std::borrow::Cow;

/// Normalizes line endings if requested, borrowing the input when untouched.
pub fn normalize(text: &str, strip_trailing_cr: bool) -> Cow<'_, str> {
    if strip_trailing_cr && text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Splits `text` into alternating content and terminator pieces.
///
/// The result always has an odd length (content, terminator, content, ...),
/// except that an empty final content piece is dropped.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let terminator_len = match bytes[i] {
            b'\n' => 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
            _ => 0,
        };

        if terminator_len == 0 {
            i += 1;
            continue;
        }

        pieces.push(&text[start..i]);
        pieces.push(&text[i..i + terminator_len]);
        i += terminator_len;
        start = i;
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

/// Tokenizes already-normalized text into lines.
///
/// Unless `newline_is_token` is set, each terminator is merged into the
/// line it ends.
pub fn tokenize(text: &str, newline_is_token: bool) -> Vec<&str> {
    let pieces = split_lines(text);

    if newline_is_token {
        return pieces;
    }

    let mut tokens = Vec::with_capacity(pieces.len() / 2 + 1);
    let mut line_start = 0;
    let mut offset = 0;
    for (i, piece) in pieces.iter().enumerate() {
        offset += piece.len();

        // terminators sit at odd positions and close the current line
        if i % 2 == 1 || i == pieces.len() - 1 {
            tokens.push(&text[line_start..offset]);
            line_start = offset;
        }
    }

    tokens
}
