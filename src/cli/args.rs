//! Command line argument parsing for the logseek CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// logseek - search indexed event and log records
#[derive(Parser, Debug, Clone)]
#[command(name = "logseek")]
#[command(about = "Index event records and run ranked full-text queries over them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LogseekArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LogseekArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Index a data file and run a query against it
    Search(SearchArgs),

    /// Index a data file and report what was accepted and skipped
    Ingest(IngestArgs),

    /// Show the terms a piece of text analyzes into
    Analyze(AnalyzeArgs),

    /// Index a data file and show index statistics
    Stats(StatsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Data file or directory to index (JSON array or one object per line)
    #[arg(value_name = "DATA_PATH")]
    pub data_file: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for ingesting
#[derive(Parser, Debug, Clone)]
pub struct IngestArgs {
    /// Data file or directory to index (JSON array or one object per line)
    #[arg(value_name = "DATA_PATH")]
    pub data_file: PathBuf,

    /// Rows analyzed and applied per batch
    #[arg(short, long, default_value = "1000")]
    pub batch_size: usize,

    /// Reject duplicate event ids instead of overwriting
    #[arg(long)]
    pub reject_duplicates: bool,
}

/// Arguments for analysis inspection
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Use the keyword analyzer instead of the standard one
    #[arg(short, long)]
    pub keyword: bool,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Data file or directory to index (JSON array or one object per line)
    #[arg(value_name = "DATA_PATH")]
    pub data_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
