//! A toolbox of independent text utilities.
//!
//! - `artifacts`: the tools themselves (line diff, encodings, compression,
//!   structured-data formatting, national ID validation)
//! - `areas`: the [`Toolbox`](areas::toolbox::Toolbox) that owns the output writer
//! - `commands`: front-end commands implemented on top of the toolbox

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::{
    Change, ChangeTag, DiffConfig, DiffOptions, EditScript, LineDiff, diff_lines,
    diff_trimmed_lines,
};
