//! basE91 encoding
//!
//! Packs the input bit stream into 13- or 14-bit groups, each written as two
//! characters of a 91-symbol alphabet. A 13-bit group is used whenever its
//! value is above 88, so both characters stay within the alphabet.

use super::into_text;
use crate::artifacts::core::error::Result;

const ALPHABET: &[u8; 91] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"";

const DECODE: &str = "base91-decode";

fn symbol(value: u32) -> char {
    ALPHABET[value as usize] as char
}

fn value_of(c: char) -> Option<u32> {
    ALPHABET
        .iter()
        .position(|&symbol| symbol as char == c)
        .map(|index| index as u32)
}

pub fn encode(input: &str) -> String {
    let mut output = String::with_capacity(input.len() * 16 / 13 + 2);
    let mut queue: u32 = 0;
    let mut bits = 0;

    for &byte in input.as_bytes() {
        queue |= (byte as u32) << bits;
        bits += 8;

        if bits > 13 {
            let mut value = queue & 8191;
            if value > 88 {
                queue >>= 13;
                bits -= 13;
            } else {
                value = queue & 16383;
                queue >>= 14;
                bits -= 14;
            }

            output.push(symbol(value % 91));
            output.push(symbol(value / 91));
        }
    }

    if bits > 0 {
        output.push(symbol(queue % 91));
        if bits > 7 || queue > 90 {
            output.push(symbol(queue / 91));
        }
    }

    output
}

/// Decodes basE91 text. Characters outside the alphabet are skipped.
pub fn decode(input: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(input.len() * 14 / 16 + 1);
    let mut queue: u32 = 0;
    let mut bits = 0;
    let mut pending: Option<u32> = None;

    for value in input.chars().filter_map(value_of) {
        let Some(low) = pending.take() else {
            pending = Some(value);
            continue;
        };

        let group = low + value * 91;
        queue |= group << bits;
        bits += if group & 8191 > 88 { 13 } else { 14 };

        while bits > 7 {
            bytes.push((queue & 0xff) as u8);
            queue >>= 8;
            bits -= 8;
        }
    }

    if let Some(low) = pending {
        bytes.push(((queue | low << bits) & 0xff) as u8);
    }

    tracing::debug!(input = input.len(), output = bytes.len(), "decoded base91");
    into_text(DECODE, bytes)
}
