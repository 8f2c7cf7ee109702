//! The parse-once, render-many facade.

use stache_ir::TemplateTree;
use stache_parse::ParseError;
use stache_render::{Renderer, Sink};
use stache_value::Value;
use tracing::warn;

/// A template parsed at construction.
///
/// A template that failed to parse keeps its error and renders nothing;
/// check [`is_valid`](Template::is_valid) first.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    parsed: Result<TemplateTree, ParseError>,
}

impl Template {
    pub fn new(source: &str) -> Self {
        Template {
            parsed: stache_parse::parse(source),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.parsed.is_ok()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.parsed.as_ref().err()
    }

    /// The parse error as text, or `""` for a valid template.
    pub fn error_message(&self) -> String {
        self.error().map(ToString::to_string).unwrap_or_default()
    }

    pub fn tree(&self) -> Option<&TemplateTree> {
        self.parsed.as_ref().ok()
    }

    /// Consume the template, keeping the tree or the error.
    pub fn into_tree(self) -> Result<TemplateTree, ParseError> {
        self.parsed
    }

    /// Render against `value` into a new string.
    pub fn render(&self, value: &Value) -> String {
        self.render_with(&Renderer::new(), value)
    }

    /// Render against `value` into `sink`, returning it.
    pub fn render_into<S: Sink>(&self, value: &Value, sink: S) -> S {
        self.render_into_with(&Renderer::new(), value, sink)
    }

    /// Render with a configured renderer (partials, limits).
    pub fn render_with(&self, renderer: &Renderer<'_>, value: &Value) -> String {
        self.render_into_with(renderer, value, String::new())
    }

    pub fn render_into_with<S: Sink>(
        &self,
        renderer: &Renderer<'_>,
        value: &Value,
        sink: S,
    ) -> S {
        match &self.parsed {
            Ok(tree) => renderer.render_into(tree, value, sink),
            Err(error) => {
                warn!(%error, "rendering an invalid template produces no output");
                sink
            }
        }
    }

    /// The tree structure as text, see [`TemplateTree::dump`].
    pub fn dump(&self) -> Option<String> {
        self.tree().map(TemplateTree::dump)
    }
}

impl From<TemplateTree> for Template {
    fn from(tree: TemplateTree) -> Self {
        Template { parsed: Ok(tree) }
    }
}
