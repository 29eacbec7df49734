//! `jsoncons` CLI -- query, inspect, validate and reformat JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Query a document from stdin; matches are printed as a JSON array
//! echo '{"key":[10,20,30]}' | jsoncons query '$.key[1]'
//!
//! # Query a file, compact output, written to a file
//! jsoncons query '$.books[*].title' -i library.json -o titles.json --compact
//!
//! # Print the kind of the root, or of each match
//! jsoncons kind -i data.json --path '$.key[0]'
//!
//! # Check that the input parses
//! jsoncons validate -i data.json
//!
//! # Re-serialize (pretty by default)
//! jsoncons fmt -i data.json
//!
//! # Debug logging on stderr (RUST_LOG takes precedence over --log-level)
//! RUST_LOG=debug jsoncons query '$.key' -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsoncons_core::{Path, Value};
use std::io::{self, Read};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "jsoncons",
    version,
    about = "Query and inspect JSON documents with path expressions",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter used when RUST_LOG is unset (e.g. "warn", "debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a path expression and print the matches as a JSON array
    Query {
        /// Path expression, e.g. '$.key[1]' or '$.items[*].name'
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print compact JSON instead of indented JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the kind of the document root, or of each match of --path
    Kind {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Path expression selecting the values to inspect
        #[arg(long)]
        path: Option<String>,
    },
    /// Check that the input is a single well-formed JSON document
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Re-serialize the input, preserving key order
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print compact JSON instead of indented JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Query {
            path,
            input,
            output,
            compact,
        } => {
            let path = parse_path(&path)?;
            let doc = load_document(input.as_deref())?;
            let matches: Vec<&Value> = jsoncons_core::select(&doc, &path);
            debug!(matches = matches.len(), "query evaluated");

            let result = Value::array(matches.into_iter().cloned());
            write_output(output.as_deref(), &render(&result, compact)?)?;
        }
        Commands::Kind { input, path } => {
            let path = path.as_deref().map(parse_path).transpose()?;
            let doc = load_document(input.as_deref())?;
            let kinds: Vec<String> = match path {
                Some(path) => {
                    jsoncons_core::select(&doc, &path)
                        .into_iter()
                        .map(|value| value.kind().to_string())
                        .collect()
                }
                None => vec![doc.kind().to_string()],
            };
            for kind in kinds {
                println!("{kind}");
            }
        }
        Commands::Validate { input } => {
            let doc = load_document(input.as_deref())?;
            debug!(kind = %doc.kind(), "document is valid");
            println!("valid");
        }
        Commands::Fmt {
            input,
            output,
            compact,
        } => {
            let doc = load_document(input.as_deref())?;
            write_output(output.as_deref(), &render(&doc, compact)?)?;
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn parse_path(text: &str) -> Result<Path> {
    let path = Path::parse(text).with_context(|| format!("Invalid path expression: {text}"))?;
    debug!(path = %path, fan_out = path.has_fan_out(), "parsed path");
    Ok(path)
}

fn load_document(path: Option<&str>) -> Result<Value> {
    let bytes = read_input(path)?;
    debug!(source = path.unwrap_or("<stdin>"), bytes = bytes.len(), "read input");
    jsoncons_core::parse(&bytes).context("Failed to parse JSON input")
}

fn render(value: &Value, compact: bool) -> Result<String> {
    let text = if compact {
        jsoncons_core::to_string(value)
    } else {
        jsoncons_core::to_string_pretty(value)
    };
    Ok(text.context("Failed to serialize JSON")? + "\n")
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
