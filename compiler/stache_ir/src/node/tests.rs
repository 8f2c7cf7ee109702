use super::*;

#[test]
fn test_from_sigil() {
    assert_eq!(TagKind::from_sigil(Some('#')), TagKind::SectionBegin);
    assert_eq!(TagKind::from_sigil(Some('^')), TagKind::SectionBeginInverted);
    assert_eq!(TagKind::from_sigil(Some('/')), TagKind::SectionEnd);
    assert_eq!(TagKind::from_sigil(Some('>')), TagKind::Partial);
    assert_eq!(TagKind::from_sigil(Some('&')), TagKind::UnescapedVariable);
    assert_eq!(TagKind::from_sigil(Some('!')), TagKind::Comment);
    assert_eq!(TagKind::from_sigil(Some('x')), TagKind::Variable);
    assert_eq!(TagKind::from_sigil(Some('=')), TagKind::Variable);
    assert_eq!(TagKind::from_sigil(None), TagKind::Variable);
}

#[test]
fn test_sigil_inverse() {
    for kind in [
        TagKind::UnescapedVariable,
        TagKind::SectionBegin,
        TagKind::SectionBeginInverted,
        TagKind::SectionEnd,
        TagKind::Comment,
        TagKind::Partial,
    ] {
        assert_eq!(TagKind::from_sigil(kind.sigil()), kind);
    }
    assert_eq!(TagKind::Variable.sigil(), None);
}

#[test]
fn test_node_queries() {
    let section = Node::new(
        NodeKind::Tag(TagKind::SectionBeginInverted),
        Span::new(4, 12),
        Span::new(7, 9),
    );
    assert!(section.is_section_begin());
    assert!(!section.is_section_end());
    assert!(!section.is_text());
    assert_eq!(section.position(), 4);
    assert!(section.children().is_empty());

    let text = Node::new(NodeKind::Text, Span::new(0, 4), Span::DUMMY);
    assert!(text.is_text());
    assert_eq!(text.tag(), None);
}

#[test]
fn test_node_id_debug() {
    assert_eq!(format!("{:?}", NodeId::ROOT), "NodeId(0)");
    assert_eq!(NodeId::new(5).index(), 5);
}
