//! Stache CLI
//!
//! Parse, inspect and render logic-less templates.

use std::path::Path;

use stachec::commands::{check_file, dump_file, parse_assignments, render_file, CommandError};

fn main() {
    stachec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "check" => {
            let Some(path) = args.get(2) else {
                usage_error("Usage: stache check <file>");
            };
            check_file(Path::new(path))
        }
        "dump" => {
            let Some(path) = args.get(2) else {
                usage_error("Usage: stache dump <file>");
            };
            dump_file(Path::new(path))
        }
        "render" => run_render(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("stache {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

/// `render <file> [--partials <dir>] [name=value ...]`, options in any order.
fn run_render(args: &[String]) -> Result<(), CommandError> {
    let mut file = None;
    let mut partials = None;
    let mut assignments = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--partials" {
            let Some(dir) = args.get(i + 1) else {
                usage_error("error: --partials needs a directory");
            };
            partials = Some(Path::new(dir));
            i += 2;
            continue;
        }
        if let Some(dir) = arg.strip_prefix("--partials=") {
            partials = Some(Path::new(dir));
        } else if file.is_none() && !arg.contains('=') {
            file = Some(Path::new(arg));
        } else {
            assignments.push(arg);
        }
        i += 1;
    }

    let Some(file) = file else {
        usage_error("Usage: stache render <file> [--partials <dir>] [name=value ...]");
    };
    let data = parse_assignments(assignments)?;
    render_file(file, partials, &data)
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Stache - logic-less templates");
    println!();
    println!("Usage: stache <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file>         Parse a template and report errors");
    println!("  dump <file>          Print the parsed template tree");
    println!("  render <file>        Render a template to stdout");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Render options:");
    println!("  --partials <dir>     Load *.mustache files in <dir> as partials");
    println!("  name=value           Set a top-level value (true/false are booleans)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to trace parsing and rendering.");
}
