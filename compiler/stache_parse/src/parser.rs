//! The left-to-right scan that builds the tree.

use memchr::memmem;
use stache_ir::{Node, NodeId, NodeKind, Span, TagKind, TreeBuilder};
use tracing::trace;

use crate::delimiters::Delimiters;
use crate::tag::{classify, trim};
use crate::ParseError;

pub(crate) struct Parser<'src> {
    source: &'src str,
    builder: TreeBuilder,
    delimiters: Delimiters,
    /// Open sections, innermost last. The root is never popped.
    sections: Vec<NodeId>,
    /// Scan position: everything before it has been turned into nodes.
    pos: usize,
}

/// Callers check the source fits in `u32` before parsing.
#[inline]
fn span(start: usize, end: usize) -> Span {
    Span::try_from_range(start..end).unwrap_or(Span::DUMMY)
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Parser {
            source,
            builder: TreeBuilder::new(source),
            delimiters: Delimiters::default(),
            sections: vec![NodeId::ROOT],
            pos: 0,
        }
    }

    /// Scan the whole source. Sections are matched but not yet verified.
    pub(crate) fn run(mut self) -> Result<TreeBuilder, ParseError> {
        let len = self.source.len();
        while self.pos < len {
            let rest = &self.source.as_bytes()[self.pos..];
            let Some(found) = memmem::find(rest, self.delimiters.open.as_bytes()) else {
                self.push_text(self.pos, len);
                break;
            };
            let tag_start = self.pos + found;
            if tag_start > self.pos {
                self.push_text(self.pos, tag_start);
            }
            self.pos = self.parse_tag(tag_start)?;
        }
        Ok(self.builder)
    }

    #[inline]
    fn current(&self) -> NodeId {
        self.sections.last().copied().unwrap_or(NodeId::ROOT)
    }

    fn push_text(&mut self, start: usize, end: usize) {
        let parent = self.current();
        self.builder
            .push(parent, Node::new(NodeKind::Text, span(start, end), Span::DUMMY));
    }

    /// Parse the tag whose opening delimiter starts at `tag_start`.
    ///
    /// Returns the position just past its closing delimiter.
    fn parse_tag(&mut self, tag_start: usize) -> Result<usize, ParseError> {
        let source = self.source;
        let bytes = source.as_bytes();

        let mut contents_start = tag_start + self.delimiters.open.len();
        let triple = self.delimiters.is_default() && bytes.get(contents_start) == Some(&b'{');
        let close = if triple {
            contents_start += 1;
            Delimiters::TRIPLE_CLOSE
        } else {
            self.delimiters.close.as_str()
        };

        let Some(found) = memmem::find(&bytes[contents_start..], close.as_bytes()) else {
            return Err(ParseError::UnterminatedTag { offset: tag_start });
        };
        let contents_end = contents_start + found;
        let tag_end = contents_end + close.len();

        let contents = trim(source, contents_start..contents_end);
        if source[contents.clone()].starts_with('=') {
            let Some(delimiters) = Delimiters::from_directive(&source[contents]) else {
                return Err(ParseError::MalformedDelimiterTag { offset: tag_start });
            };
            trace!(open = %delimiters.open, close = %delimiters.close, "set delimiters");
            self.delimiters = delimiters;
            return Ok(tag_end);
        }

        let (kind, name_range) = classify(source, contents, triple);
        let name = &source[name_range.clone()];
        let parent = self.current();
        let id = self.builder.push(
            parent,
            Node::new(
                NodeKind::Tag(kind),
                span(tag_start, tag_end),
                span(name_range.start, name_range.end),
            ),
        );

        if kind.is_section_begin() {
            trace!(name, offset = tag_start, "open section");
            self.sections.push(id);
        } else if kind == TagKind::SectionEnd {
            if self.sections.len() == 1 {
                return Err(ParseError::UnmatchedSectionEnd {
                    name: name.to_owned(),
                    offset: tag_start,
                });
            }
            trace!(name, offset = tag_start, "close section");
            self.sections.pop();
        }

        Ok(tag_end)
    }
}
