//! Stache Parse - turns template text into a [`TemplateTree`].
//!
//! A single left-to-right scan finds each opening delimiter, then the
//! matching closing delimiter, and classifies the trimmed contents by sigil.
//! Sections are tracked on a stack of open node ids; once the scan is done a
//! verification pass checks every section was closed by a tag with its own
//! name. Parsing is all-or-nothing: a failure yields only a [`ParseError`]
//! carrying the byte offset of the offending construct.
//!
//! # Syntax
//!
//! | Tag            | Meaning                                       |
//! |----------------|-----------------------------------------------|
//! | `{{name}}`     | Escaped variable                              |
//! | `{{{name}}}`   | Unescaped variable (default delimiters only)  |
//! | `{{&name}}`    | Unescaped variable                            |
//! | `{{#name}}`    | Section                                       |
//! | `{{^name}}`    | Inverted section                              |
//! | `{{/name}}`    | Section end                                   |
//! | `{{! text}}`   | Comment                                       |
//! | `{{> name}}`   | Partial                                       |
//! | `{{=<% %>=}}`  | Set delimiters (produces no node)             |
//!
//! ```
//! use stache_ir::NodeArena;
//!
//! let tree = stache_parse::parse("Hello {{name}}!").unwrap();
//! let top = tree.children(tree.root());
//! assert_eq!(top.len(), 3);
//! assert_eq!(tree.name(top[1]), "name");
//!
//! let err = stache_parse::parse("{{#a}}text").unwrap_err();
//! assert_eq!(err.to_string(), "No section end tag found for section \"a\" at 0");
//! ```

mod delimiters;
mod error;
mod parser;
mod tag;
mod verify;

use stache_ir::TemplateTree;

pub use delimiters::Delimiters;
pub use error::ParseError;

/// Parse a complete template.
#[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<TemplateTree, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::TemplateTooLarge { len: source.len() });
    }
    let builder = parser::Parser::new(source).run()?;
    verify::check_sections(&builder)?;
    let tree = builder.finish();
    tracing::debug!(nodes = tree.len(), "parsed template");
    Ok(tree)
}
