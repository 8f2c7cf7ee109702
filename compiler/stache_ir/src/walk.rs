//! Depth-first traversal with per-node control over descent.
//!
//! Every pass over a tree goes through [`walk_node`]. The visitor decides for
//! each node whether its children are visited automatically:
//!
//! - [`WalkControl::Continue`]: visit the children next, then the siblings.
//! - [`WalkControl::Skip`]: don't descend, carry on with the siblings. Used by
//!   nodes that traverse their own children (sections) or have none to show.
//! - [`WalkControl::Stop`]: abandon the whole walk.
//!
//! Sections render their children by calling [`walk_children`] from inside
//! `visit`, which is how the renderer repeats a section once per list
//! element.
//!
//! # Example
//!
//! ```
//! use stache_ir::walk::{walk, WalkControl};
//! use stache_ir::{NodeId, TemplateTree, TreeBuilder};
//!
//! let tree: TemplateTree = TreeBuilder::new("").finish();
//! let mut count = 0;
//! walk(&mut |_: &TemplateTree, _: NodeId, _: usize| {
//!     count += 1;
//!     WalkControl::Continue
//! }, &tree);
//! assert_eq!(count, 0);
//! ```

use stache_stack::ensure_sufficient_stack;

use crate::{NodeArena, NodeId};

/// Outcome of visiting one node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WalkControl {
    Continue,
    Stop,
    Skip,
}

impl WalkControl {
    #[inline]
    pub fn is_stop(self) -> bool {
        matches!(self, WalkControl::Stop)
    }
}

/// Per-node callback of a walk.
///
/// `depth` is 0 for the root's children and grows by one per level.
pub trait Visitor<A: NodeArena + ?Sized> {
    fn visit(&mut self, arena: &A, id: NodeId, depth: usize) -> WalkControl;
}

impl<A, F> Visitor<A> for F
where
    A: NodeArena + ?Sized,
    F: FnMut(&A, NodeId, usize) -> WalkControl,
{
    #[inline]
    fn visit(&mut self, arena: &A, id: NodeId, depth: usize) -> WalkControl {
        self(arena, id, depth)
    }
}

/// Walk every node below the root.
///
/// Returns [`WalkControl::Stop`] if the visitor stopped, else `Continue`.
pub fn walk<A, V>(visitor: &mut V, arena: &A) -> WalkControl
where
    A: NodeArena + ?Sized,
    V: Visitor<A> + ?Sized,
{
    walk_children(visitor, arena, NodeId::ROOT, 0)
}

/// Walk each child of `parent` in order, stopping early on `Stop`.
pub fn walk_children<A, V>(visitor: &mut V, arena: &A, parent: NodeId, depth: usize) -> WalkControl
where
    A: NodeArena + ?Sized,
    V: Visitor<A> + ?Sized,
{
    for &child in arena.children(parent) {
        if walk_node(visitor, arena, child, depth).is_stop() {
            return WalkControl::Stop;
        }
    }
    WalkControl::Continue
}

/// Visit `id`, then its subtree unless the visitor skipped or stopped.
///
/// Only ever returns `Continue` or `Stop`: a `Skip` is absorbed here.
pub fn walk_node<A, V>(visitor: &mut V, arena: &A, id: NodeId, depth: usize) -> WalkControl
where
    A: NodeArena + ?Sized,
    V: Visitor<A> + ?Sized,
{
    ensure_sufficient_stack(|| match visitor.visit(arena, id, depth) {
        WalkControl::Stop => WalkControl::Stop,
        WalkControl::Skip => WalkControl::Continue,
        WalkControl::Continue => walk_children(visitor, arena, id, depth + 1),
    })
}
