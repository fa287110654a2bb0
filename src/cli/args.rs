//! Command line argument parsing for the Prosemeter CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prosemeter - lexical and readability analytics for web articles
#[derive(Parser, Debug, Clone)]
#[command(name = "prosemeter")]
#[command(about = "Batch lexical and readability analytics for web articles")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ProsemeterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

impl ProsemeterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch article pages and cache extracted text files
    Extract(ExtractArgs),

    /// Compute metrics for every document in the input table
    Analyze(AnalyzeArgs),
}

/// Arguments for extracting articles to a cache directory
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Input table (CSV with URL_ID and URL columns)
    #[arg(short, long, value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Directory to write {URL_ID}.txt article files into
    #[arg(short, long, value_name = "DIR")]
    pub articles_dir: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,
}

/// Arguments for running the analysis pipeline
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input table (CSV with URL_ID and URL columns)
    #[arg(short, long, value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output table path
    #[arg(short, long, value_name = "OUTPUT_CSV")]
    pub output: PathBuf,

    /// Stop-word category files (repeat for each file; all are unioned)
    #[arg(long = "stop-words", value_name = "FILE", required = true)]
    pub stop_word_files: Vec<PathBuf>,

    /// Positive sentiment word list
    #[arg(long, value_name = "FILE")]
    pub positive: PathBuf,

    /// Negative sentiment word list
    #[arg(long, value_name = "FILE")]
    pub negative: PathBuf,

    /// Read article text from cached {URL_ID}.txt files in this directory
    /// instead of fetching over HTTP
    #[arg(long, value_name = "DIR")]
    pub articles_dir: Option<PathBuf>,

    /// Analyze documents in parallel
    #[arg(long)]
    pub parallel: bool,

    /// HTTP request timeout in seconds (ignored with --articles-dir)
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
