//! Stache Render - walks a [`TemplateTree`] against a [`Value`].
//!
//! Rendering never fails. Missing names, values of the wrong kind for a tag
//! and falsy sections all render as nothing; the only way a render ends early
//! is a [`Sink`] reporting itself closed.
//!
//! Names resolve through a [`ScopeStack`] of borrowed values: the root value
//! at the bottom and one entry per section being rendered above it. Each
//! push is owned by a [`ScopeGuard`], so the stack unwinds on every exit
//! path.
//!
//! ```
//! use stache_value::Value;
//!
//! let tree = stache_parse::parse("{{#people}}<{{name}}>{{/people}}").unwrap();
//! let data = Value::object().with(
//!     "people",
//!     Value::from(vec![
//!         Value::object().with("name", "Ann & Bo"),
//!         Value::object().with("name", "Cy"),
//!     ]),
//! );
//! assert_eq!(stache_render::render(&tree, &data), "<Ann &amp; Bo><Cy>");
//! ```

mod config;
mod escape;
mod partial;
mod renderer;
mod scope;
mod sink;

use stache_ir::TemplateTree;
use stache_value::Value;

pub use config::RenderConfig;
pub use escape::{escape_html, write_escaped};
pub use partial::{PartialMap, PartialResolver};
pub use renderer::Renderer;
pub use scope::{ScopeGuard, ScopeStack};
pub use sink::{IoSink, Sink};

/// Render `tree` against `value` into a new string.
pub fn render(tree: &TemplateTree, value: &Value) -> String {
    Renderer::new().render(tree, value)
}

/// Render `tree` against `value` into `sink`, returning the sink.
pub fn render_into<S: Sink>(tree: &TemplateTree, value: &Value, sink: S) -> S {
    Renderer::new().render_into(tree, value, sink)
}
