//! Command implementations
//!
//! Every command is a method on [`Toolbox`](crate::areas::toolbox::Toolbox)
//! that runs one tool and writes its result to the toolbox writer:
//!
//! - `diff`: line diff of two files
//! - `encode`: Base64 / basE91 encoding and digests
//! - `compress`: GZIP / Zstandard with Base64 transport
//! - `format`: JSON / YAML pretty-printing and validation
//! - `validate`: CPF / CNPJ check digits

pub mod compress;
pub mod diff;
pub mod encode;
pub mod format;
pub mod validate;

use anyhow::Context;
use std::io::Read;

const STDIN: &str = "-";

/// Returns the given text, or reads stdin when it is absent or `-`.
pub fn read_input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) if text != STDIN => Ok(text),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Unable to read input from stdin")?;
            Ok(input)
        }
    }
}

/// Reads a file, or stdin for `-`.
pub fn read_source(path: &str) -> anyhow::Result<String> {
    if path == STDIN {
        return read_input(None);
    }

    std::fs::read_to_string(path).with_context(|| format!("Unable to read file {path}"))
}
