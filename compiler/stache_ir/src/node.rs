//! Tree nodes and their ids.

use std::fmt;

use crate::Span;

/// Index into a node arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The implicit root section. Always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Kind of a tag, decided by the first character of its contents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TagKind {
    /// `{{name}}`: HTML-escaped substitution.
    Variable,
    /// `{{{name}}}` or `{{&name}}`: verbatim substitution.
    UnescapedVariable,
    /// `{{#name}}`
    SectionBegin,
    /// `{{^name}}`
    SectionBeginInverted,
    /// `{{/name}}`. Only present while a tree is being built.
    SectionEnd,
    /// `{{! text}}`
    Comment,
    /// `{{> name}}`
    Partial,
}

impl TagKind {
    /// Classify trimmed tag contents by their first character.
    ///
    /// Anything without a recognised sigil (including empty contents) is a
    /// plain variable.
    pub fn from_sigil(first: Option<char>) -> Self {
        match first {
            Some('#') => TagKind::SectionBegin,
            Some('^') => TagKind::SectionBeginInverted,
            Some('/') => TagKind::SectionEnd,
            Some('>') => TagKind::Partial,
            Some('&') => TagKind::UnescapedVariable,
            Some('!') => TagKind::Comment,
            _ => TagKind::Variable,
        }
    }

    /// The sigil written before the name, if this kind has one.
    ///
    /// Unescaped variables report `&`, which is also how the triple-brace
    /// form is written back by the dump.
    pub fn sigil(self) -> Option<char> {
        match self {
            TagKind::Variable => None,
            TagKind::UnescapedVariable => Some('&'),
            TagKind::SectionBegin => Some('#'),
            TagKind::SectionBeginInverted => Some('^'),
            TagKind::SectionEnd => Some('/'),
            TagKind::Comment => Some('!'),
            TagKind::Partial => Some('>'),
        }
    }

    #[inline]
    pub fn is_section_begin(self) -> bool {
        matches!(self, TagKind::SectionBegin | TagKind::SectionBeginInverted)
    }

    #[inline]
    pub fn is_section_end(self) -> bool {
        matches!(self, TagKind::SectionEnd)
    }
}

/// What a node is.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// The implicit top-level section.
    Root,
    /// Literal source text, rendered verbatim.
    Text,
    Tag(TagKind),
}

/// A node in the template tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Whole extent in the source: the text itself, or the tag from its
    /// opening delimiter through its closing one.
    pub span: Span,
    /// Tag name after sigil stripping and trimming. Empty for text and root.
    pub name: Span,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span, name: Span) -> Self {
        Node {
            kind,
            span,
            name,
            children: Vec::new(),
        }
    }

    /// The tag kind, or `None` for text and root nodes.
    #[inline]
    pub fn tag(&self) -> Option<TagKind> {
        match self.kind {
            NodeKind::Tag(tag) => Some(tag),
            NodeKind::Root | NodeKind::Text => None,
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text)
    }

    /// Returns `true` for `{{#..}}` and `{{^..}}` tags.
    #[inline]
    pub fn is_section_begin(&self) -> bool {
        self.tag().is_some_and(TagKind::is_section_begin)
    }

    #[inline]
    pub fn is_section_end(&self) -> bool {
        self.tag().is_some_and(TagKind::is_section_end)
    }

    /// Byte offset (not character count) of the node in the source, used in
    /// diagnostics.
    #[inline]
    pub fn position(&self) -> usize {
        self.span.start as usize
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }
}

#[cfg(test)]
mod tests;
