use super::edit_script::EditScript;

/// Options controlling how texts are tokenized and compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Compare lines with surrounding whitespace trimmed.
    pub ignore_whitespace: bool,
    /// Emit line terminators as standalone tokens.
    pub newline_is_token: bool,
    /// Treat a missing final newline as equal to a present one.
    pub ignore_newline_at_eof: bool,
    /// Replace every `\r\n` with `\n` before tokenizing.
    pub strip_trailing_cr: bool,
}

impl DiffOptions {
    pub fn with_ignore_whitespace(mut self, value: bool) -> Self {
        self.ignore_whitespace = value;
        self
    }

    pub fn with_newline_is_token(mut self, value: bool) -> Self {
        self.newline_is_token = value;
        self
    }

    pub fn with_ignore_newline_at_eof(mut self, value: bool) -> Self {
        self.ignore_newline_at_eof = value;
        self
    }

    pub fn with_strip_trailing_cr(mut self, value: bool) -> Self {
        self.strip_trailing_cr = value;
        self
    }
}

/// Either a set of options or a callback that receives the edit script.
///
/// Older call sites hand a bare callback instead of options; the script is
/// then delivered to the callback and computed with default options.
pub enum DiffConfig<'c> {
    Options(DiffOptions),
    Callback(Box<dyn FnOnce(EditScript) + 'c>),
}

impl<'c> DiffConfig<'c> {
    pub fn callback(callback: impl FnOnce(EditScript) + 'c) -> Self {
        DiffConfig::Callback(Box::new(callback))
    }

    /// Splits the config into the options to run with and the optional callback.
    pub(crate) fn resolve(
        self,
        defaults: DiffOptions,
    ) -> (DiffOptions, Option<Box<dyn FnOnce(EditScript) + 'c>>) {
        match self {
            DiffConfig::Options(options) => (options, None),
            DiffConfig::Callback(callback) => (defaults, Some(callback)),
        }
    }
}

impl Default for DiffConfig<'_> {
    fn default() -> Self {
        DiffConfig::Options(DiffOptions::default())
    }
}

impl From<DiffOptions> for DiffConfig<'_> {
    fn from(options: DiffOptions) -> Self {
        DiffConfig::Options(options)
    }
}

impl From<&DiffOptions> for DiffConfig<'_> {
    fn from(options: &DiffOptions) -> Self {
        DiffConfig::Options(*options)
    }
}

impl std::fmt::Debug for DiffConfig<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffConfig::Options(options) => f.debug_tuple("Options").field(options).finish(),
            DiffConfig::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
