//! Post-scan check that every section was closed by its own end tag.

use stache_ir::walk::{walk, WalkControl};
use stache_ir::{NodeArena, NodeId, TreeBuilder};

use crate::ParseError;

/// Every section's last child must be a section end with the same name.
///
/// The scan appends each end tag to the innermost open section and then
/// closes it, so a section whose last child is anything else was never
/// closed, and one whose end tag names another section was closed by the
/// wrong tag. The first such section in document order is reported.
pub(crate) fn check_sections(builder: &TreeBuilder) -> Result<(), ParseError> {
    let mut unterminated = None;
    walk(
        &mut |arena: &TreeBuilder, id: NodeId, _: usize| {
            if !arena.node(id).is_section_begin() {
                return WalkControl::Continue;
            }
            let closed = arena.children(id).last().is_some_and(|&end| {
                arena.node(end).is_section_end() && arena.name(end) == arena.name(id)
            });
            if closed {
                WalkControl::Continue
            } else {
                unterminated = Some(id);
                WalkControl::Stop
            }
        },
        builder,
    );

    match unterminated {
        Some(id) => Err(ParseError::UnterminatedSection {
            name: builder.name(id).to_owned(),
            offset: builder.position(id),
        }),
        None => Ok(()),
    }
}
