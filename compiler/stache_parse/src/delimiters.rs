//! Active tag delimiters and the set-delimiter directive.

/// The opening and closing strings that bound a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters {
            open: Self::DEFAULT_OPEN.to_owned(),
            close: Self::DEFAULT_CLOSE.to_owned(),
        }
    }
}

impl Delimiters {
    pub const DEFAULT_OPEN: &'static str = "{{";
    pub const DEFAULT_CLOSE: &'static str = "}}";
    /// Closing delimiter of the `{{{name}}}` shorthand.
    pub const TRIPLE_CLOSE: &'static str = "}}}";

    /// Returns `true` while the `{{`/`}}` pair is active, the only time the
    /// triple-brace shorthand is recognised.
    pub fn is_default(&self) -> bool {
        self.open == Self::DEFAULT_OPEN && self.close == Self::DEFAULT_CLOSE
    }

    /// Parse trimmed directive contents such as `=<% %>=`.
    ///
    /// The contents must be at least five characters, end with `=`, and hold
    /// exactly one space separating two non-empty tokens. Returns `None` for
    /// anything else.
    pub fn from_directive(contents: &str) -> Option<Self> {
        // Smallest legal directive is "=X X="
        if contents.len() < 5 {
            return None;
        }
        let inner = contents.strip_prefix('=')?.strip_suffix('=')?;
        let (open, close) = inner.split_once(' ')?;
        if open.is_empty() || close.is_empty() || close.contains(' ') {
            return None;
        }
        Some(Delimiters {
            open: open.to_owned(),
            close: close.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests;
