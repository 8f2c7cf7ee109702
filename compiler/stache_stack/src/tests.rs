use super::*;

/// A chain of sections, each holding the next.
enum Section {
    Leaf,
    Nested(Box<Section>),
}

fn chain(depth: usize) -> Section {
    (0..depth).fold(Section::Leaf, |inner, _| Section::Nested(Box::new(inner)))
}

fn measure(section: &Section) -> usize {
    ensure_sufficient_stack(|| match section {
        Section::Leaf => 0,
        Section::Nested(inner) => measure(inner) + 1,
    })
}

#[test]
fn test_shallow_chain() {
    assert_eq!(measure(&chain(3)), 3);
}

#[test]
fn test_chain_deeper_than_default_stack() {
    let deep = chain(200_000);
    assert_eq!(measure(&deep), 200_000);

    drop_chain(deep);
}

/// The derived drop of a boxed chain recurses once per level.
fn drop_chain(mut section: Section) {
    while let Section::Nested(inner) = section {
        section = *inner;
    }
}

#[test]
fn test_passes_through_result() {
    let result: Result<&str, usize> = ensure_sufficient_stack(|| Err(7));
    assert_eq!(result, Err(7));
}
