//! `mailsift` - command-line driver for the triage pipeline.
//!
//! Reads threads as JSON from a file or stdin, runs them through
//! [`mailsift_core::TriageEngine`] and prints JSON on stdout. Logs go to
//! stderr and are controlled with `RUST_LOG`.

mod input;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mailsift_core::{TriageConfig, TriageEngine};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::report::BatchReport;

#[derive(Parser)]
#[command(name = "mailsift")]
#[command(about = "Compress, score, categorize and rank email threads", long_about = None)]
struct Cli {
    /// JSON configuration file (defaults are used for missing keys)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate and rank a JSON array of threads
    Batch {
        /// Input file; stdin when omitted or `-`
        path: Option<PathBuf>,
    },

    /// Annotate one JSON thread with folder, meeting and unsubscribe info
    Triage {
        /// Input file; stdin when omitted or `-`
        path: Option<PathBuf>,
    },

    /// Detect meeting cues in a piece of text
    Meetings {
        /// Text to scan
        text: String,
    },

    /// Detect unsubscribe cues in a piece of text
    Unsubscribe {
        /// Text to scan
        text: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailsift=info,mailsift_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = build_engine(cli.config.as_deref())?;

    match cli.cmd {
        Command::Batch { path } => {
            let started = Instant::now();
            let threads = input::read_threads(path.as_deref())?;
            info!(count = threads.len(), "loaded threads");

            let outcome = engine.process_batch(&threads);
            let report = BatchReport::new(outcome, started.elapsed(), engine.read_volume());
            print_json(&report, cli.pretty)
        }

        Command::Triage { path } => {
            let thread = input::read_thread(path.as_deref())?;
            input::ensure_content(&thread)?;
            print_json(&engine.triage(&thread), cli.pretty)
        }

        Command::Meetings { text } => print_json(&engine.detect_meeting(&text), cli.pretty),

        Command::Unsubscribe { text } => {
            print_json(&engine.detect_unsubscribe(&text), cli.pretty)
        }
    }
}

fn build_engine(config_path: Option<&std::path::Path>) -> Result<TriageEngine> {
    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            TriageConfig::from_path(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => TriageConfig::default(),
    };
    TriageEngine::new(config).context("Failed to build triage engine")
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
