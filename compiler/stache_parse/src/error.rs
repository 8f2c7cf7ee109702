//! Structural parse errors.

/// Why a template failed to parse.
///
/// Every variant carries the byte offset of the construct at fault: the
/// opening delimiter of the tag, or of the section's opening tag. Offsets
/// count UTF-8 bytes, not characters, so `é{{#a}}` reports its section at 2.
/// Messages are the human-readable form surfaced by `Template::error_message`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An opening delimiter with no closing delimiter after it.
    #[error("No tag end delimiter found for start delimiter at {offset}")]
    UnterminatedTag { offset: usize },

    /// A `{{=...=}}` directive not of the form `=OPEN CLOSE=`.
    #[error("Invalid set delimiter tag found at {offset}")]
    MalformedDelimiterTag { offset: usize },

    /// `{{/name}}` with no section open.
    #[error("Section end tag \"{name}\" found without start tag at {offset}")]
    UnmatchedSectionEnd { name: String, offset: usize },

    /// A section never closed, or closed by a tag with another name.
    #[error("No section end tag found for section \"{name}\" at {offset}")]
    UnterminatedSection { name: String, offset: usize },

    /// Source longer than `u32::MAX` bytes; spans could not address it.
    #[error("Template of {len} bytes is too large (limit is {} bytes)", u32::MAX)]
    TemplateTooLarge { len: usize },
}

impl ParseError {
    /// Byte offset of the offending construct. Slicing the source at this
    /// offset always lands on a `char` boundary.
    ///
    /// For [`ParseError::TemplateTooLarge`] this is the first offset that
    /// cannot be addressed.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnterminatedTag { offset }
            | ParseError::MalformedDelimiterTag { offset }
            | ParseError::UnmatchedSectionEnd { offset, .. }
            | ParseError::UnterminatedSection { offset, .. } => *offset,
            ParseError::TemplateTooLarge { .. } => u32::MAX as usize,
        }
    }

    /// The section or tag name involved, where there is one.
    pub fn name(&self) -> Option<&str> {
        match self {
            ParseError::UnmatchedSectionEnd { name, .. }
            | ParseError::UnterminatedSection { name, .. } => Some(name),
            ParseError::UnterminatedTag { .. }
            | ParseError::MalformedDelimiterTag { .. }
            | ParseError::TemplateTooLarge { .. } => None,
        }
    }

    /// Stable code for tooling and tests.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnterminatedTag { .. } => "E0001",
            ParseError::MalformedDelimiterTag { .. } => "E0002",
            ParseError::UnmatchedSectionEnd { .. } => "E0003",
            ParseError::UnterminatedSection { .. } => "E0004",
            ParseError::TemplateTooLarge { .. } => "E0005",
        }
    }
}
