use pretty_assertions::assert_eq;

use super::*;
use crate::TagKind;

fn tag(kind: TagKind, span: (u32, u32), name: (u32, u32)) -> Node {
    Node::new(
        NodeKind::Tag(kind),
        Span::new(span.0, span.1),
        Span::new(name.0, name.1),
    )
}

fn text(start: u32, end: u32) -> Node {
    Node::new(NodeKind::Text, Span::new(start, end), Span::DUMMY)
}

/// `a{{#s}}b{{/s}}c`
fn build_section() -> TreeBuilder {
    let mut builder = TreeBuilder::new("a{{#s}}b{{/s}}c");
    builder.push(NodeId::ROOT, text(0, 1));
    let section = builder.push(NodeId::ROOT, tag(TagKind::SectionBegin, (1, 7), (4, 5)));
    builder.push(section, text(7, 8));
    builder.push(section, tag(TagKind::SectionEnd, (8, 14), (11, 12)));
    builder.push(NodeId::ROOT, text(14, 15));
    builder
}

#[test]
fn test_builder_appends_in_order() {
    let builder = build_section();
    let top: Vec<&str> = builder
        .children(NodeId::ROOT)
        .iter()
        .map(|&id| builder.text(id))
        .collect();
    assert_eq!(top, ["a", "{{#s}}", "c"]);

    let section = builder.children(NodeId::ROOT)[1];
    assert_eq!(builder.name(section), "s");
    assert_eq!(builder.children(section).len(), 2);
}

#[test]
fn test_finish_drops_section_ends() {
    let tree = build_section().finish();
    assert_eq!(tree.len(), 5);
    assert!(tree.iter().all(|(_, node)| !node.is_section_end()));

    let section = tree.children(tree.root())[1];
    let inner: Vec<&str> = tree
        .children(section)
        .iter()
        .map(|&id| tree.text(id))
        .collect();
    assert_eq!(inner, ["b"]);
}

#[test]
fn test_finish_renumbers_depth_first() {
    let mut builder = TreeBuilder::new("{{#s}}zxy");
    let section = builder.push(NodeId::ROOT, tag(TagKind::SectionBegin, (0, 6), (3, 4)));
    let trailing = builder.push(NodeId::ROOT, text(7, 9));
    // Allocated after its parent's sibling.
    builder.push(section, text(6, 7));
    assert_eq!(trailing, NodeId::new(2));

    let tree = builder.finish();
    let order: Vec<&str> = tree.iter().skip(1).map(|(id, _)| tree.text(id)).collect();
    assert_eq!(order, ["{{#s}}", "z", "xy"]);
}

#[test]
fn test_empty_tree() {
    let tree = TreeBuilder::new("").finish();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.name(tree.root()), "");
}

#[test]
fn test_root_spans_whole_source() {
    let tree = build_section().finish();
    assert_eq!(tree.text(tree.root()), "a{{#s}}b{{/s}}c");
    assert_eq!(tree.source(), "a{{#s}}b{{/s}}c");
}

#[test]
fn test_positions_survive_renumbering() {
    let tree = build_section().finish();
    let positions: Vec<usize> = tree
        .children(tree.root())
        .iter()
        .map(|&id| tree.position(id))
        .collect();
    assert_eq!(positions, [0, 1, 14]);
}
