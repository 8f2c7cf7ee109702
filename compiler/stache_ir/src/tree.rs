//! Node arena: [`TreeBuilder`] while parsing, [`TemplateTree`] afterwards.

use crate::{Node, NodeId, NodeKind, Span};

/// Read access shared by the builder and the finished tree, so the same
/// walk can run over either.
pub trait NodeArena {
    /// The node with this id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    fn node(&self, id: NodeId) -> &Node;

    /// The template source every span points into.
    fn source(&self) -> &str;

    #[inline]
    fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    /// The source covered by a node: literal text for text nodes, the whole
    /// tag (delimiters included) for tags.
    fn text(&self, id: NodeId) -> &str {
        slice(self.source(), self.node(id).span)
    }

    /// The tag name, or `""` for text and root nodes.
    fn name(&self, id: NodeId) -> &str {
        slice(self.source(), self.node(id).name)
    }

    /// Byte offset of a node in the source.
    #[inline]
    fn position(&self, id: NodeId) -> usize {
        self.node(id).position()
    }
}

#[inline]
fn slice(source: &str, span: Span) -> &str {
    source.get(span.to_range()).unwrap_or_default()
}

#[inline]
fn to_u32(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Growing arena used by the parser.
///
/// Nodes are appended to a parent by id, so the parser's open-section stack
/// holds ids that stay valid however much the arena grows.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    source: String,
    nodes: Vec<Node>,
}

impl TreeBuilder {
    /// Start a tree over `source` with only the root allocated.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let root = Node::new(
            NodeKind::Root,
            Span::new(0, to_u32(source.len())),
            Span::DUMMY,
        );
        TreeBuilder {
            source,
            nodes: vec![root],
        }
    }

    /// Allocate `node` as the last child of `parent`.
    pub fn push(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId::new(to_u32(self.nodes.len()));
        self.nodes.push(node);
        self.nodes[parent.index()].children_mut().push(id);
        id
    }

    /// Freeze into a [`TemplateTree`].
    ///
    /// Reachable nodes are renumbered in document order and `SectionEnd`
    /// tags are dropped: once sections are matched the closing tag carries
    /// nothing the renderer needs.
    pub fn finish(self) -> TemplateTree {
        let TreeBuilder { source, nodes } = self;
        let mut slots: Vec<Option<Node>> = nodes.into_iter().map(Some).collect();
        let mut out: Vec<Node> = Vec::with_capacity(slots.len());

        // Explicit stack of (old id, new parent) so deep nesting can't overflow.
        let mut pending: Vec<(NodeId, Option<NodeId>)> = vec![(NodeId::ROOT, None)];
        while let Some((old, parent)) = pending.pop() {
            let Some(mut node) = slots.get_mut(old.index()).and_then(Option::take) else {
                continue;
            };
            if node.is_section_end() {
                continue;
            }
            let children = std::mem::take(node.children_mut());
            let id = NodeId::new(to_u32(out.len()));
            if let Some(parent) = parent {
                out[parent.index()].children_mut().push(id);
            }
            out.push(node);
            pending.extend(children.into_iter().rev().map(|child| (child, Some(id))));
        }

        TemplateTree { source, nodes: out }
    }
}

impl NodeArena for TreeBuilder {
    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn source(&self) -> &str {
        &self.source
    }
}

/// A parsed template.
///
/// Immutable: it can be rendered any number of times, from any number of
/// threads, each render with its own scope stack and sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateTree {
    source: String,
    nodes: Vec<Node>,
}

impl TemplateTree {
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the template produced no nodes at all (empty source).
    pub fn is_empty(&self) -> bool {
        self.children(NodeId::ROOT).is_empty()
    }

    /// Iterate over all nodes in document order, root first.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(to_u32(i)), node))
    }
}

impl NodeArena for TemplateTree {
    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests;
