//! Text tools
//!
//! Each module is an independent, stateless transform:
//!
//! - `core`: Shared utilities (tool errors, pager output)
//! - `diff`: Line diff (Myers' algorithm over line tokens)
//! - `encoding`: Base64, basE91 and digests
//! - `compression`: GZIP and Zstandard with Base64 transport
//! - `formatting`: JSON and YAML validation and pretty-printing
//! - `validation`: Brazilian CPF / CNPJ check digits

pub mod compression;
pub mod core;
pub mod diff;
pub mod encoding;
pub mod formatting;
pub mod validation;
