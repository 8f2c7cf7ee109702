//! Stache IR - the parsed form of a template.
//!
//! A template compiles to a [`TemplateTree`]: an arena of [`Node`]s addressed
//! by [`NodeId`], rooted at an implicit unnamed section. Text nodes and tag
//! names are [`Span`]s into the source the tree owns, so a tree holds exactly
//! one string no matter how many nodes it has.
//!
//! # Design
//!
//! - **Indices, not pointers**: children are `NodeId`s, so the parser can keep
//!   a stack of open sections while the arena grows underneath it.
//! - **Immutable once built**: [`TreeBuilder::finish`] is the only way to get a
//!   tree, and a tree has no mutators. Any number of renders may share it.
//! - **One traversal**: [`walk`] drives every pass over the tree (section
//!   verification, rendering, the debug dump) with [`WalkControl`] deciding
//!   whether children are visited.

mod dump;
mod node;
mod span;
mod tree;
pub mod walk;

pub use node::{Node, NodeId, NodeKind, TagKind};
pub use span::Span;
pub use tree::{NodeArena, TemplateTree, TreeBuilder};
pub use walk::{Visitor, WalkControl};
