use super::options::DiffOptions;

/// Rule deciding whether two line tokens are equal.
///
/// Chosen once from [`DiffOptions`]; whitespace trimming takes priority over
/// the end-of-file newline rule, and the two are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEquivalence {
    /// Trim surrounding whitespace before comparing. When newlines are
    /// tokens of their own, a token containing `\n` is left untouched so a
    /// separator never collapses into an empty line.
    Trimmed { newline_is_token: bool },
    /// Drop one trailing `\n` from each side before comparing.
    IgnoreNewlineAtEof,
    Exact,
}

impl TokenEquivalence {
    pub fn from_options(options: &DiffOptions) -> Self {
        if options.ignore_whitespace {
            TokenEquivalence::Trimmed {
                newline_is_token: options.newline_is_token,
            }
        } else if options.ignore_newline_at_eof && !options.newline_is_token {
            TokenEquivalence::IgnoreNewlineAtEof
        } else {
            TokenEquivalence::Exact
        }
    }

    pub fn equals(&self, left: &str, right: &str) -> bool {
        match *self {
            TokenEquivalence::Trimmed { newline_is_token } => {
                Self::trim(left, newline_is_token) == Self::trim(right, newline_is_token)
            }
            TokenEquivalence::IgnoreNewlineAtEof => {
                Self::strip_newline(left) == Self::strip_newline(right)
            }
            TokenEquivalence::Exact => left == right,
        }
    }

    fn trim(token: &str, newline_is_token: bool) -> &str {
        if newline_is_token && token.contains('\n') {
            token
        } else {
            token.trim()
        }
    }

    fn strip_newline(token: &str) -> &str {
        token.strip_suffix('\n').unwrap_or(token)
    }
}
