//! Line diff
//!
//! This module implements a line-level differ:
//!
//! - `tokenizer`: splits texts into line tokens
//! - `equivalence`: decides when two tokens count as equal
//! - `myers`: Myers' shortest edit script search over token sequences
//! - `edit_script`: groups the search result into runs of changes
//! - `options`: diff options and the options-or-callback entry config
//! - `filter`: selects which kinds of runs to display
//!
//! A diff is computed synchronously and owns all of its state; identical
//! inputs and options always give an identical [`EditScript`].

pub mod edit_script;
pub mod equivalence;
pub mod filter;
pub mod myers;
pub mod options;
pub mod tokenizer;

pub use edit_script::{Change, ChangeTag, EditScript};
pub use equivalence::TokenEquivalence;
pub use filter::ChangeFilter;
pub use options::{DiffConfig, DiffOptions};

use derive_new::new;
use myers::{DiffAlgorithm, MyersDiff};

/// Line differ configured with a fixed set of options.
#[derive(Debug, Clone, Copy, Default, new)]
pub struct LineDiff {
    options: DiffOptions,
}

impl LineDiff {
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn diff(&self, old: &str, new: &str) -> EditScript {
        let old = tokenizer::normalize(old, self.options.strip_trailing_cr);
        let new = tokenizer::normalize(new, self.options.strip_trailing_cr);
        let old_tokens = tokenizer::tokenize(&old, self.options.newline_is_token);
        let new_tokens = tokenizer::tokenize(&new, self.options.newline_is_token);

        let equivalence = TokenEquivalence::from_options(&self.options);
        let myers = MyersDiff::new(
            old_tokens.as_slice(),
            new_tokens.as_slice(),
            |left: &&str, right: &&str| equivalence.equals(left, right),
        );

        let trace = myers.compute_shortest_edit();
        let path = myers.backtrack(&trace);
        let script = edit_script::emit(&old_tokens, &new_tokens, &path);

        tracing::debug!(
            old_tokens = old_tokens.len(),
            new_tokens = new_tokens.len(),
            edit_distance = trace.depth(),
            cells = trace.cells().len(),
            runs = script.len(),
            ?equivalence,
            "computed line diff"
        );

        script
    }
}

/// Diffs two texts line by line.
///
/// With [`DiffConfig::Options`] the script is returned. With
/// [`DiffConfig::Callback`] it is handed to the callback instead, computed
/// with default options, and `None` is returned.
pub fn diff_lines<'c>(
    old: &str,
    new: &str,
    config: impl Into<DiffConfig<'c>>,
) -> Option<EditScript> {
    let (options, callback) = config.into().resolve(DiffOptions::default());
    deliver(LineDiff::new(options).diff(old, new), callback)
}

/// Same as [`diff_lines`] with `ignore_whitespace` forced on.
pub fn diff_trimmed_lines<'c>(
    old: &str,
    new: &str,
    config: impl Into<DiffConfig<'c>>,
) -> Option<EditScript> {
    let defaults = DiffOptions::default().with_ignore_whitespace(true);
    let (options, callback) = config.into().resolve(defaults);
    let options = options.with_ignore_whitespace(true);
    deliver(LineDiff::new(options).diff(old, new), callback)
}

fn deliver(
    script: EditScript,
    callback: Option<Box<dyn FnOnce(EditScript) + '_>>,
) -> Option<EditScript> {
    match callback {
        Some(callback) => {
            callback(script);
            None
        }
        None => Some(script),
    }
}
