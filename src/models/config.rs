//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for bannersync
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the coverage report to consume
    pub report_path: PathBuf,

    /// Glob patterns for file paths to exclude from the walk
    pub exclude_patterns: Vec<String>,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Diagnostic log path (if not specified, a temp file is used)
    pub log_file: Option<PathBuf>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show progress bars
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("coverage.json"),
            exclude_patterns: Vec::new(),
            output_format: OutputFormat::Text,
            output_file: None,
            log_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub report_path: Option<PathBuf>,
    pub exclude_patterns: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another partial configuration into this one; fields set in
    /// `other` take precedence
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.report_path.is_some() {
            self.report_path = other.report_path;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Resolve into full settings, filling gaps from defaults
    pub fn into_settings(self) -> Settings {
        let defaults = Settings::default();

        Settings {
            report_path: self.report_path.unwrap_or(defaults.report_path),
            exclude_patterns: self.exclude_patterns.unwrap_or(defaults.exclude_patterns),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            output_file: self.output_file.or(defaults.output_file),
            log_file: self.log_file.or(defaults.log_file),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
        }
    }
}
