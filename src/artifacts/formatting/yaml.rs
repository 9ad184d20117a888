//! YAML checks and re-indentation
//!
//! A document is valid when serde_yaml parses it and every meaningful line is
//! a list item or a `key: value` pair. The line rules are stricter than YAML
//! itself: a bare scalar line such as `name value` is rejected. They are
//! also looser in one place: a tab after `key:` counts as a separator.
//!
//! Formatting works line by line: nesting levels are re-indented to two
//! spaces and `key:value` becomes `key: value`. The result has to be valid,
//! otherwise formatting fails.

use crate::artifacts::core::error::{Result, ToolError};
use serde_yaml::Value;

const FORMAT: &str = "yaml-format";
const INDENT: &str = "  ";

#[derive(Debug, PartialEq, Eq)]
enum Line<'l> {
    Blank,
    Comment,
    Marker(&'l str),
    Item(&'l str),
    Entry { key: &'l str, value: &'l str },
    Scalar(&'l str),
}

fn is_quoted(key: &str) -> bool {
    key.len() >= 2
        && ((key.starts_with('"') && key.ends_with('"'))
            || (key.starts_with('\'') && key.ends_with('\'')))
}

// quotes must be closed on the line they open; an apostrophe inside a word
// does not open a quote
fn quotes_balanced(content: &str) -> bool {
    let mut in_single = false;
    let mut in_double = false;
    let mut prev: Option<char> = None;

    for c in content.chars() {
        match c {
            '"' if !in_single => in_double = !in_double,
            '\'' if !in_double => {
                let inside_word = prev.is_some_and(char::is_alphanumeric);
                if in_single || !inside_word {
                    in_single = !in_single;
                }
            }
            _ => {}
        }
        prev = Some(c);
    }

    !in_single && !in_double
}

// position of the first ':' outside quotes
fn key_separator(content: &str) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;

    for (i, c) in content.char_indices() {
        match c {
            '"' if !in_single => in_double = !in_double,
            '\'' if !in_double && (in_single || i == 0) => in_single = !in_single,
            ':' if !in_single && !in_double => return Some(i),
            _ => {}
        }
    }

    None
}

fn classify(content: &str) -> Line<'_> {
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment;
    }
    if trimmed == "---" || trimmed == "..." {
        return Line::Marker(trimmed);
    }
    if trimmed == "-" {
        return Line::Item("");
    }
    if let Some(rest) = trimmed.strip_prefix("- ") {
        return Line::Item(rest.trim_start());
    }

    match key_separator(trimmed) {
        Some(i) => Line::Entry {
            key: trimmed[..i].trim(),
            value: trimmed[i + 1..].trim(),
        },
        None => Line::Scalar(trimmed),
    }
}

fn valid_entry(key: &str) -> bool {
    !key.is_empty() && (!key.contains(char::is_whitespace) || is_quoted(key))
}

fn valid_content(line: &Line<'_>) -> bool {
    match line {
        Line::Blank | Line::Comment | Line::Marker(_) => true,
        Line::Item(rest) => match classify(rest) {
            Line::Entry { key, .. } => valid_entry(key),
            _ => true,
        },
        Line::Entry { key, .. } => valid_entry(key),
        Line::Scalar(_) => false,
    }
}

fn indentation(line: &str) -> &str {
    let content_start = line.len() - line.trim_start().len();
    &line[..content_start]
}

// number of the first line breaking the line rules
fn check_lines(input: &str) -> std::result::Result<(), usize> {
    for (number, raw) in input.split('\n').enumerate() {
        let line = raw.trim_end();
        let parsed = classify(line);

        if matches!(parsed, Line::Blank | Line::Comment) {
            continue;
        }

        let valid = !indentation(line).contains('\t')
            && quotes_balanced(line)
            && valid_content(&parsed);
        if !valid {
            return Err(number + 1);
        }
    }

    Ok(())
}

fn line_rule_violation(line: usize) -> String {
    format!("line {line} is not a list item or key: value pair")
}

// same document with single spaces after `key:` and `-`, indentation kept;
// the parser rejects a tab there while the line rules accept it
fn respace(input: &str) -> String {
    input
        .split('\n')
        .map(|raw| match classify(raw) {
            Line::Blank | Line::Comment => raw.to_string(),
            parsed => format!("{}{}", indentation(raw), render(&parsed)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn check(input: &str) -> std::result::Result<(), String> {
    check_lines(input).map_err(line_rule_violation)?;
    serde_yaml::from_str::<Value>(&respace(input)).map_err(|e| e.to_string())?;

    Ok(())
}

fn invalid(reason: String) -> ToolError {
    ToolError::Format {
        operation: FORMAT,
        reason: format!("Invalid YAML format ({reason})"),
    }
}

pub fn validate(input: &str) -> bool {
    match check(input) {
        Ok(()) => true,
        Err(reason) => {
            tracing::debug!(%reason, "rejected yaml");
            false
        }
    }
}

fn render_entry(key: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{key}:")
    } else {
        format!("{key}: {value}")
    }
}

fn render(line: &Line<'_>) -> String {
    match line {
        Line::Blank | Line::Comment => String::new(),
        Line::Marker(marker) => marker.to_string(),
        Line::Item(rest) => match classify(rest) {
            Line::Entry { key, value } => format!("- {}", render_entry(key, value)),
            _ if rest.is_empty() => "-".to_string(),
            _ => format!("- {rest}"),
        },
        Line::Entry { key, value } => render_entry(key, value),
        Line::Scalar(scalar) => scalar.to_string(),
    }
}

/// Re-indents nesting levels to two spaces and normalizes `key: value`
/// spacing. Comments and blank lines are kept. Fails when the input breaks
/// the line rules or the re-indented document is not valid YAML.
pub fn format(input: &str) -> Result<String> {
    check_lines(input).map_err(|line| invalid(line_rule_violation(line)))?;

    // source indentation of each open nesting level
    let mut levels: Vec<usize> = Vec::new();
    let mut formatted = Vec::new();

    for raw in input.split('\n') {
        let line = raw.trim_end();
        let parsed = classify(line);

        match parsed {
            Line::Blank => {
                formatted.push(String::new());
                continue;
            }
            Line::Comment => {
                formatted.push(line.to_string());
                continue;
            }
            _ => {}
        }

        let indent = indentation(line).len();
        while levels.last().is_some_and(|&top| top > indent) {
            levels.pop();
        }
        if levels.last() != Some(&indent) {
            levels.push(indent);
        }

        let depth = levels.len() - 1;
        formatted.push(format!("{}{}", INDENT.repeat(depth), render(&parsed)));
    }

    let formatted = formatted.join("\n");
    check(&formatted).map_err(invalid)?;

    Ok(formatted)
}
