//! Command-line entry point for `codechart`.
//!
//! Reads one source file (or stdin), builds its flowchart and prints either
//! a human-readable table or the raw JSON contract shape.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use codechart::config::Config;
use codechart::flow::build_flowchart_with;
use codechart::output;
use codechart::scorer::{LineScorer, NullScorer, RemoteScorer};

/// Command line interface configuration using `clap`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to convert. Omit (or pass "-") to read stdin.
    input: Option<PathBuf>,

    /// Output the flowchart as raw JSON.
    #[arg(long)]
    json: bool,

    /// Ask the configured remote service for per-line complexity scores.
    /// Only consulted when the input falls back to line-based conversion;
    /// any service failure silently degrades to the local heuristic.
    #[arg(long)]
    remote_scores: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "codechart=debug"
    } else {
        "codechart=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = read_source(cli.input.as_deref())?;

    let scorer: Box<dyn LineScorer> = if cli.remote_scores {
        let config = Config::load();
        match RemoteScorer::from_env(config.scorer) {
            Ok(remote) => Box::new(remote),
            Err(err) => {
                tracing::warn!(error = %err, "remote scoring disabled");
                Box::new(NullScorer)
            }
        }
    } else {
        Box::new(NullScorer)
    };

    let flowchart = build_flowchart_with(&source, scorer.as_ref());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&flowchart)?);
    } else {
        let stdout = std::io::stdout();
        output::print_flowchart(&mut stdout.lock(), &flowchart)?;
    }
    Ok(())
}
