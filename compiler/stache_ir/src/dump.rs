//! Debug rendering of the tree structure itself.

use crate::walk::{walk, WalkControl};
use crate::{NodeArena, NodeId, NodeKind, TemplateTree};

impl TemplateTree {
    /// One line per node, indented one space per nesting level:
    ///
    /// ```text
    /// TXT: Hello
    /// TAG: {{#people}}
    ///  TAG: {{name}}
    /// ```
    ///
    /// Not used when rendering; intended for inspecting what the parser built.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        walk(
            &mut |tree: &TemplateTree, id: NodeId, depth: usize| {
                let node = tree.node(id);
                out.push_str(&" ".repeat(depth));
                match node.kind {
                    NodeKind::Tag(kind) => {
                        out.push_str("TAG: {{");
                        if let Some(sigil) = kind.sigil() {
                            out.push(sigil);
                        }
                        out.push_str(tree.name(id));
                        out.push_str("}}");
                    }
                    NodeKind::Text | NodeKind::Root => {
                        out.push_str("TXT: ");
                        out.push_str(tree.text(id));
                    }
                }
                out.push('\n');
                WalkControl::Continue
            },
            self,
        );
        out
    }
}
