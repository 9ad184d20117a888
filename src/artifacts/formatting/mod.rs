//! Structured-data validation and pretty-printing
//!
//! - `json`: strict JSON via serde_json, printed with 2-space indentation
//! - `yaml`: a line-oriented YAML checker and re-indenter (no schema, no
//!   full YAML parsing)

pub mod json;
pub mod yaml;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Syntax {
    Json,
    Yaml,
}

impl Syntax {
    pub fn validate(&self, input: &str) -> bool {
        match self {
            Syntax::Json => json::validate(input),
            Syntax::Yaml => yaml::validate(input),
        }
    }

    pub fn format(&self, input: &str) -> crate::artifacts::core::error::Result<String> {
        match self {
            Syntax::Json => json::format(input),
            Syntax::Yaml => yaml::format(input),
        }
    }
}
