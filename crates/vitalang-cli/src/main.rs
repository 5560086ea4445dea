use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use vitalang_lsp_core::{
    scan_identifiers, ChangeEvent, CompletionEngine, CompletionRequest, LANGUAGE,
};

mod report;

/// Vitalang - completion engine toolkit
#[derive(Parser)]
#[command(name = "vitalang")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect Vitalang completions from the command line", long_about = "Vitalang Completion Toolkit\n\nRuns the same engine the language server uses:\n  - Completions at a cursor position\n  - Variables used in a file\n  - The keyword table and language settings")]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show completions at a cursor position
    Complete {
        /// Vitalang source file
        file: String,
        /// Zero-based line of the cursor
        #[arg(long)]
        line: u32,
        /// Zero-based column of the cursor, in characters
        #[arg(long)]
        column: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the `$` and `£` variables used in a file
    Variables {
        /// File to scan
        file: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the keyword table
    Keywords {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the language configuration as JSON
    Language,
    /// Check whether an edit would reopen the suggestion list
    Trigger {
        /// Text inserted by the edit
        text: String,
        /// Number of characters the edit replaced
        #[arg(long, default_value_t = 0)]
        removed: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "vitalang=debug" } else { "vitalang=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    let engine = CompletionEngine::default();

    let outcome = match cli.command {
        Commands::Complete {
            file,
            line,
            column,
            json,
        } => complete_command(&engine, &file, line, column, json),
        Commands::Variables { file, json } => variables_command(&file, json),
        Commands::Keywords { json } => keywords_command(&engine, json),
        Commands::Language => print_json(&LANGUAGE),
        Commands::Trigger { text, removed } => trigger_command(&engine, text, removed),
    };

    if let Err(err) = outcome {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("reading file '{}'", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing JSON")?;
    println!("{}", json);
    Ok(())
}

// ============================================================================
// COMPLETE COMMAND
// ============================================================================

fn complete_command(
    engine: &CompletionEngine,
    filename: &str,
    line: u32,
    column: u32,
    json_output: bool,
) -> Result<()> {
    let contents = read_source(filename)?;
    let request = CompletionRequest::at(&contents, line, column);
    let report = report::CompletionReport::build(engine, &request);

    tracing::debug!(
        context = ?report.context,
        rule = report.rule.as_str(),
        items = report.result.len(),
        "resolved completions in {}",
        filename
    );

    if json_output {
        print_json(&report)
    } else {
        print!("{}", report::render_completions(&report));
        Ok(())
    }
}

// ============================================================================
// VARIABLES COMMAND
// ============================================================================

fn variables_command(filename: &str, json_output: bool) -> Result<()> {
    let contents = read_source(filename)?;
    let identifiers = scan_identifiers(&contents);

    tracing::debug!(count = identifiers.len(), "scanned {}", filename);

    if json_output {
        print_json(&identifiers)
    } else {
        print!("{}", report::render_variables(&identifiers));
        Ok(())
    }
}

// ============================================================================
// KEYWORDS COMMAND
// ============================================================================

fn keywords_command(engine: &CompletionEngine, json_output: bool) -> Result<()> {
    if json_output {
        print_json(engine.keywords())
    } else {
        print!("{}", report::render_keywords(engine.keywords()));
        Ok(())
    }
}

fn trigger_command(engine: &CompletionEngine, text: String, removed: usize) -> Result<()> {
    let event = ChangeEvent::new(text, removed);
    println!("{}", engine.on_document_changed(&event));
    Ok(())
}
