//! The tree walk that turns a template and a value into text.

use stache_ir::walk::{walk, walk_children, Visitor, WalkControl};
use stache_ir::{NodeArena, NodeId, NodeKind, TagKind, TemplateTree};
use stache_value::Value;
use tracing::{debug, trace, warn};

use crate::escape::write_escaped;
use crate::{PartialResolver, RenderConfig, ScopeStack, Sink};

/// Renders trees, optionally resolving partials.
///
/// A `Renderer` holds no per-render state; each call builds its own scope
/// stack, so one renderer can serve any number of renders.
///
/// ```
/// use stache_render::{PartialMap, Renderer};
/// use stache_value::Value;
///
/// let mut partials = PartialMap::new();
/// partials.insert("item", stache_parse::parse("<li>{{name}}</li>").unwrap());
///
/// let page = stache_parse::parse("<ul>{{#items}}{{> item}}{{/items}}</ul>").unwrap();
/// let data = Value::object().with(
///     "items",
///     Value::from(vec![Value::object().with("name", "a"), Value::object().with("name", "b")]),
/// );
///
/// let html = Renderer::new().with_partials(&partials).render(&page, &data);
/// assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
/// ```
#[derive(Clone, Copy, Default)]
pub struct Renderer<'p> {
    partials: Option<&'p dyn PartialResolver>,
    config: RenderConfig,
}

impl<'p> Renderer<'p> {
    /// A renderer with no partial resolver and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_partials(mut self, partials: &'p dyn PartialResolver) -> Self {
        self.partials = Some(partials);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render into a fresh string.
    pub fn render(&self, tree: &TemplateTree, value: &Value) -> String {
        self.render_into(tree, value, String::new())
    }

    /// Render into `sink` and hand it back.
    pub fn render_into<S: Sink>(&self, tree: &TemplateTree, value: &Value, mut sink: S) -> S {
        let mut scopes = ScopeStack::new(value);
        self.render_scoped(tree, &mut scopes, &mut sink);
        sink
    }

    /// Render against an existing scope stack.
    ///
    /// The stack is left at the depth it had on entry, whether the walk ran
    /// to the end or stopped because the sink closed. Returns
    /// [`WalkControl::Stop`] in the latter case.
    #[tracing::instrument(level = "trace", skip_all, fields(nodes = tree.len()))]
    pub fn render_scoped<S: Sink + ?Sized>(
        &self,
        tree: &TemplateTree,
        scopes: &mut ScopeStack<'_>,
        sink: &mut S,
    ) -> WalkControl {
        let mut pass = RenderPass {
            scopes,
            sink,
            partials: self.partials,
            config: &self.config,
            partial_depth: 0,
        };
        let control = walk(&mut pass, tree);
        if control.is_stop() {
            debug!("render stopped: sink closed");
        }
        control
    }
}

/// One walk over one tree. Sections and partials start nested passes that
/// share the sink and see the scopes pushed so far.
struct RenderPass<'a, 'v, S: Sink + ?Sized> {
    scopes: &'a mut ScopeStack<'v>,
    sink: &'a mut S,
    partials: Option<&'a dyn PartialResolver>,
    config: &'a RenderConfig,
    /// Partials currently open around this pass.
    partial_depth: usize,
}

impl<'v, S: Sink + ?Sized> RenderPass<'_, 'v, S> {
    /// `Stop` once the sink has closed.
    #[inline]
    fn status(&self) -> WalkControl {
        if self.sink.is_closed() {
            WalkControl::Stop
        } else {
            WalkControl::Continue
        }
    }

    fn variable(&mut self, name: &str, escape: bool) -> WalkControl {
        match self.scopes.resolve(name) {
            Some(Value::String(text)) if escape => write_escaped(&mut *self.sink, text),
            Some(Value::String(text)) => self.sink.append(text),
            Some(Value::True) => self.sink.append("true"),
            Some(Value::False) => self.sink.append("false"),
            Some(Value::Object(_) | Value::List(_)) | None => {
                trace!(name, "variable renders nothing");
            }
        }
        self.status()
    }

    /// Run `f` on a pass with `value` pushed as the innermost scope.
    fn with_scope<R>(
        &mut self,
        value: &'v Value,
        f: impl FnOnce(&mut RenderPass<'_, 'v, S>) -> R,
    ) -> R {
        let mut guard = self.scopes.enter(value);
        let mut inner = RenderPass {
            scopes: &mut *guard,
            sink: &mut *self.sink,
            partials: self.partials,
            config: self.config,
            partial_depth: self.partial_depth,
        };
        f(&mut inner)
    }

    /// Render the children of section `id` for `value`.
    ///
    /// A non-empty list repeats them once per element with that element
    /// pushed; an object is pushed for one pass; anything else (`True`, or
    /// the missing/falsy value of an inverted section) renders them once
    /// against the enclosing scopes.
    fn section<A: NodeArena + ?Sized>(
        &mut self,
        arena: &A,
        id: NodeId,
        depth: usize,
        value: Option<&'v Value>,
    ) -> WalkControl {
        let control = match value {
            Some(Value::List(items)) if !items.is_empty() => {
                let mut control = WalkControl::Continue;
                for item in items {
                    control = self.with_scope(item, |pass| {
                        walk_children(pass, arena, id, depth + 1)
                    });
                    if control.is_stop() {
                        break;
                    }
                }
                control
            }
            Some(object) if object.is_object() => {
                self.with_scope(object, |pass| walk_children(pass, arena, id, depth + 1))
            }
            _ => walk_children(self, arena, id, depth + 1),
        };
        if control.is_stop() {
            WalkControl::Stop
        } else {
            WalkControl::Skip
        }
    }

    fn partial(&mut self, name: &str) -> WalkControl {
        let Some(partials) = self.partials else {
            debug!(name, "no partial resolver; skipping partial");
            return WalkControl::Skip;
        };
        let Some(tree) = partials.resolve(name) else {
            debug!(name, "partial not found");
            return WalkControl::Skip;
        };
        if self.partial_depth >= self.config.max_partial_depth {
            warn!(
                name,
                max = self.config.max_partial_depth,
                "partial nesting too deep; skipping"
            );
            return WalkControl::Skip;
        }

        trace!(name, depth = self.partial_depth + 1, "enter partial");
        let mut inner = RenderPass {
            scopes: &mut *self.scopes,
            sink: &mut *self.sink,
            partials: self.partials,
            config: self.config,
            partial_depth: self.partial_depth + 1,
        };
        if walk(&mut inner, tree).is_stop() {
            WalkControl::Stop
        } else {
            WalkControl::Skip
        }
    }
}

impl<A, S> Visitor<A> for RenderPass<'_, '_, S>
where
    A: NodeArena + ?Sized,
    S: Sink + ?Sized,
{
    fn visit(&mut self, arena: &A, id: NodeId, depth: usize) -> WalkControl {
        let kind = match arena.node(id).kind {
            NodeKind::Root => return WalkControl::Continue,
            NodeKind::Text => {
                self.sink.append(arena.text(id));
                return self.status();
            }
            NodeKind::Tag(kind) => kind,
        };

        let name = arena.name(id);
        match kind {
            TagKind::Variable => self.variable(name, true),
            TagKind::UnescapedVariable => self.variable(name, false),
            TagKind::SectionBegin => match self.scopes.resolve(name) {
                Some(value) if !value.is_falsy() => self.section(arena, id, depth, Some(value)),
                _ => WalkControl::Skip,
            },
            TagKind::SectionBeginInverted => match self.scopes.resolve(name) {
                Some(value) if !value.is_falsy() => WalkControl::Skip,
                value => self.section(arena, id, depth, value),
            },
            TagKind::Partial => self.partial(name),
            TagKind::Comment | TagKind::SectionEnd => WalkControl::Skip,
        }
    }
}
