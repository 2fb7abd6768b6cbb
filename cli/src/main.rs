use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use snippet_core::{NO_SNIPPETS_FOUND, SNIPPET_NOT_FOUND};
use snippet_sqlite::SnippetStore;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Output format for command results.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "snippets")]
#[command(about = "Store, retrieve, and search named text snippets")]
struct Cli {
    /// Database file path.
    #[arg(long, global = true, default_value = "snippets.db")]
    db: PathBuf,

    /// Log file path.
    #[arg(long, global = true, default_value = "snippets.log")]
    log_file: PathBuf,

    /// Output format for results (default: plain).
    #[arg(long, global = true, value_enum, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Store a snippet under a name, replacing any existing one.
    Put {
        /// Name to store the snippet under.
        name: String,
        /// Snippet text to store.
        snippet: String,
    },
    /// Retrieve the snippet stored under a name.
    Get {
        /// Name of the snippet to retrieve.
        name: String,
    },
    /// Update an existing snippet; never creates a new one.
    Post {
        /// Name of the snippet to update.
        name: String,
        /// Replacement snippet text.
        snippet: String,
    },
    /// Delete the snippet stored under a name.
    Delete {
        /// Name of the snippet to delete.
        name: String,
    },
    /// List all stored snippet names.
    Catalog,
    /// Find snippets whose text contains a literal substring.
    Search {
        /// Substring to look for in snippet texts.
        string: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_file);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Directs log output to the configured file, honoring `RUST_LOG`.
///
/// A log file that cannot be opened leaves the process without a
/// subscriber rather than aborting the requested operation.
fn init_logging(path: &Path) {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let mut store = SnippetStore::open(&cli.db)
        .map_err(|err| format!("Failed to open database '{}': {err}", cli.db.display()))?;
    tracing::info!(db = %cli.db.display(), "opened snippet store");

    match cli.command {
        Command::Put { name, snippet } => run_put(&mut store, &name, &snippet, cli.format),
        Command::Get { name } => run_get(&mut store, &name, cli.format),
        Command::Post { name, snippet } => run_post(&mut store, &name, &snippet, cli.format),
        Command::Delete { name } => run_delete(&mut store, &name, cli.format),
        Command::Catalog => run_catalog(&mut store, cli.format),
        Command::Search { string } => run_search(&mut store, &string, cli.format),
    }
}

fn run_put(
    store: &mut SnippetStore,
    name: &str,
    snippet: &str,
    format: OutputFormat,
) -> Result<(), String> {
    let stored = store
        .put(name, snippet)
        .map_err(|err| format!("Put failed: {err}"))?;
    match format {
        OutputFormat::Plain => println!("Stored '{}' as '{}'", stored.message, stored.keyword),
        OutputFormat::Json => print_json(&stored)?,
    }
    Ok(())
}

fn run_get(store: &mut SnippetStore, name: &str, format: OutputFormat) -> Result<(), String> {
    let message = store
        .get(name)
        .map_err(|err| format!("Get failed: {err}"))?;
    match format {
        OutputFormat::Plain => match message {
            Some(message) => println!("{message}"),
            None => println!("{SNIPPET_NOT_FOUND}"),
        },
        OutputFormat::Json => print_json(&message)?,
    }
    Ok(())
}

fn run_post(
    store: &mut SnippetStore,
    name: &str,
    snippet: &str,
    format: OutputFormat,
) -> Result<(), String> {
    let updated = store
        .post(name, snippet)
        .map_err(|err| format!("Post failed: {err}"))?;
    match format {
        OutputFormat::Plain => match updated {
            Some(updated) => println!("Updated '{}' to '{}'", updated.keyword, updated.message),
            None => println!("{name}: {SNIPPET_NOT_FOUND}"),
        },
        OutputFormat::Json => print_json(&updated)?,
    }
    Ok(())
}

fn run_delete(store: &mut SnippetStore, name: &str, format: OutputFormat) -> Result<(), String> {
    let deleted = store
        .delete(name)
        .map_err(|err| format!("Delete failed: {err}"))?;
    match format {
        OutputFormat::Plain => match deleted {
            Some(deleted) => println!("Deleted '{deleted}'"),
            None => println!("{SNIPPET_NOT_FOUND}"),
        },
        OutputFormat::Json => print_json(&deleted)?,
    }
    Ok(())
}

fn run_catalog(store: &mut SnippetStore, format: OutputFormat) -> Result<(), String> {
    let keywords = store
        .catalog()
        .map_err(|err| format!("Catalog failed: {err}"))?;
    match format {
        OutputFormat::Plain => {
            if keywords.is_empty() {
                println!("{NO_SNIPPETS_FOUND}");
            } else {
                for keyword in &keywords {
                    println!("{keyword}");
                }
            }
        }
        OutputFormat::Json => print_json(&keywords)?,
    }
    Ok(())
}

fn run_search(store: &mut SnippetStore, string: &str, format: OutputFormat) -> Result<(), String> {
    let matches = store
        .search(string)
        .map_err(|err| format!("Search failed: {err}"))?;
    match format {
        OutputFormat::Plain => {
            if matches.is_empty() {
                println!("{SNIPPET_NOT_FOUND} containing '{string}'");
            } else {
                for snippet in &matches {
                    println!("{}: {}", snippet.keyword, snippet.message);
                }
            }
        }
        OutputFormat::Json => print_json(&matches)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let raw = serde_json::to_string_pretty(value)
        .map_err(|err| format!("Failed to serialize output: {err}"))?;
    println!("{raw}");
    Ok(())
}
