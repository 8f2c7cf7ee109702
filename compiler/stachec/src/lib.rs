//! Stache - logic-less templates.
//!
//! [`Template`] is the entry point: it parses its source once, up front, and
//! can then be rendered any number of times against different [`Value`]s.
//!
//! ```
//! use stachec::{Template, Value};
//!
//! let template = Template::new("Hello {{name}}!{{#admin}} (admin){{/admin}}");
//! assert!(template.is_valid());
//!
//! let data = Value::object().with("name", "Ann").with("admin", true);
//! assert_eq!(template.render(&data), "Hello Ann! (admin)");
//!
//! let broken = Template::new("{{#a}}text");
//! assert!(!broken.is_valid());
//! assert_eq!(broken.error_message(), "No section end tag found for section \"a\" at 0");
//! ```
//!
//! # Crates
//!
//! - `stache_value`: the [`Value`] data model
//! - `stache_ir`: the parsed [`TemplateTree`] and its walk
//! - `stache_parse`: template text to tree
//! - `stache_render`: scope stack, sinks, partials and the renderer
//!
//! # Logging
//!
//! Everything logs through `tracing`. Call [`init_tracing`] and set
//! `RUST_LOG` (e.g. `RUST_LOG=stache_parse=trace`) to see parse and render
//! events as an indented tree on stderr.

pub mod commands;
mod template;

use std::sync::Once;

pub use stache_ir::TemplateTree;
pub use stache_parse::ParseError;
pub use stache_render::{
    IoSink, PartialMap, PartialResolver, RenderConfig, Renderer, ScopeStack, Sink,
};
pub use stache_value::{Object, Value, ValueError, ValueKind};
pub use template::Template;

static TRACING_INIT: Once = Once::new();

/// Install the global `tracing` subscriber.
///
/// Does nothing unless `RUST_LOG` is set, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
