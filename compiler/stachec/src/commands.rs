//! Command handlers for the `stache` CLI.
//!
//! Each handler returns a [`CommandError`] instead of exiting so the binary
//! decides how failures are reported.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stache_ir::TemplateTree;
use stache_parse::ParseError;
use stache_render::{IoSink, PartialMap, Renderer};
use stache_value::Value;

use crate::Template;

/// File extension of partial templates in a `--partials` directory.
pub const PARTIAL_EXTENSION: &str = "mustache";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },
    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
    #[error("invalid argument '{0}': expected name=value")]
    Assignment(String),
}

/// Read a template file.
pub fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CommandError::NotFound {
            path: path.to_owned(),
        },
        _ => CommandError::Read {
            path: path.to_owned(),
            source,
        },
    })
}

fn parse_file(path: &Path) -> Result<TemplateTree, CommandError> {
    stache_parse::parse(&read_file(path)?).map_err(|source| CommandError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Read and parse a template file.
pub fn load_template(path: &Path) -> Result<Template, CommandError> {
    parse_file(path).map(Template::from)
}

/// Parse every `*.mustache` file in `dir`, keyed by file stem.
pub fn load_partials(dir: &Path) -> Result<PartialMap, CommandError> {
    let read_error = |source| CommandError::Read {
        path: dir.to_owned(),
        source,
    };

    let mut partials = PartialMap::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(PARTIAL_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let tree = parse_file(&path)?;
        tracing::debug!(name, path = %path.display(), "loaded partial");
        partials.insert(name, tree);
    }
    Ok(partials)
}

/// Build the root object from `name=value` arguments.
///
/// `true` and `false` become booleans; anything else is a string. Later
/// assignments to the same name win.
pub fn parse_assignments<I, S>(args: I) -> Result<Value, CommandError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut data = Value::object();
    for arg in args {
        let arg = arg.as_ref();
        let Some((name, value)) = arg.split_once('=') else {
            return Err(CommandError::Assignment(arg.to_owned()));
        };
        if name.is_empty() {
            return Err(CommandError::Assignment(arg.to_owned()));
        }
        let value = match value {
            "true" => Value::True,
            "false" => Value::False,
            text => Value::string(text),
        };
        data = data.with(name, value);
    }
    Ok(data)
}

/// `stache check`: parse only.
pub fn check_file(path: &Path) -> Result<(), CommandError> {
    load_template(path)?;
    println!("{}: ok", path.display());
    Ok(())
}

/// `stache dump`: print the parsed tree.
pub fn dump_file(path: &Path) -> Result<(), CommandError> {
    let template = load_template(path)?;
    let mut out = io::stdout().lock();
    out.write_all(template.dump().unwrap_or_default().as_bytes())?;
    Ok(())
}

/// Render a template file into `out`, handing the writer back once flushed.
pub fn render_to<W: Write>(
    path: &Path,
    partials_dir: Option<&Path>,
    data: &Value,
    out: W,
) -> Result<W, CommandError> {
    let template = load_template(path)?;
    let partials = partials_dir.map(load_partials).transpose()?;

    let mut renderer = Renderer::new();
    if let Some(partials) = &partials {
        renderer = renderer.with_partials(partials);
    }

    let sink = template.render_into_with(&renderer, data, IoSink::new(out));
    sink.finish().map_err(CommandError::from)
}

/// `stache render`: render to stdout.
pub fn render_file(
    path: &Path,
    partials_dir: Option<&Path>,
    data: &Value,
) -> Result<(), CommandError> {
    drop(render_to(path, partials_dir, data, io::stdout().lock())?);
    Ok(())
}
