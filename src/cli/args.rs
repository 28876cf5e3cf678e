//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// bannersync - push coverage summaries into source file banners
#[derive(Parser, Debug)]
#[command(name = "bannersync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rewrite source file coverage banners from a coverage report")]
#[command(long_about = "bannersync consumes a hierarchical coverage report (modules containing files, \
each carrying covered/total line counts) and rewrites the first line of each eligible source file \
with a coverage banner such as '//UT Coverage: 67%, 2/3, NEED_MORE'. Files outside the banner \
convention are never touched, trailing human-authored annotations on the banner line are preserved, \
and per-file failures are logged without aborting the batch.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Update banners from coverage.json in the current directory
    bannersync

    # Use a specific coverage report
    bannersync build/coverage.json

    # Exclude generated sources (can specify multiple patterns)
    bannersync --exclude '**/generated/**' --exclude '**/third_party/**'

Output Options:
    # Emit the summary as JSON
    bannersync --output json

    # Emit per-file outcomes as CSV for spreadsheet analysis
    bannersync --output csv --output-file outcomes.csv

    # Disable colored output
    bannersync --no-colors

Diagnostics:
    # Write the diagnostic log to a known location
    bannersync --log-file bannersync.log

    # Quiet mode with minimal output
    bannersync --quiet

    # Verbose mode listing every file outcome
    bannersync --verbose

Configuration:
    # Use a specific configuration file
    bannersync --config ./bannersync.toml

    # Create a default configuration file
    bannersync --init
")]
pub struct Args {
    /// Path of the coverage report to consume
    #[arg(value_name = "REPORT", help = "Coverage report JSON file (defaults to coverage.json if not specified)")]
    pub report: Option<PathBuf>,

    /// Exclude file paths matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for file paths to exclude from the walk (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Output format for the batch summary: 'text' for human-readable output, 'json' for machine processing, 'csv' for per-file outcomes")]
    pub output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the summary to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Diagnostic log path
    #[arg(long, value_name = "FILE", help = "File receiving one record per failed file (defaults to a temp file)")]
    pub log_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only show the final summary)")]
    pub quiet: bool,

    /// Show detailed progress and per-file outcomes
    #[arg(short, long, help = "Show detailed progress information and list every file outcome")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable progress bars (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .bannersync.toml in current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.bannersync.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
