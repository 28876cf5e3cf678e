//! Error types and definitions for bannersync
//!
//! This module provides the error handling system for the bannersync
//! application, including error types, severity levels, and a result alias.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for bannersync operations
#[derive(Debug, Error)]
pub enum BannerError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Failure to read or write a target source file
    #[error("Cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target file is empty so no banner line can be extracted
    #[error("File {path} is empty, no banner line to inspect")]
    EmptyFile { path: PathBuf },

    /// First line carries the banner marker but is not valid UTF-8
    #[error("Banner line in {path} is not valid UTF-8")]
    InvalidBannerLine { path: PathBuf },

    /// Coverage report file not found
    #[error("Coverage report not found at {path}")]
    ReportNotFound { path: PathBuf },

    /// Coverage report read errors
    #[error("Error reading coverage report {path}: {source}")]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Coverage report parse errors
    #[error("Error parsing coverage report {path}: {source}")]
    ReportParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Coverage report violates its own invariants
    #[error("Invalid coverage report {path}: {message}")]
    InvalidReport { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Diagnostic log write errors
    #[error("Error writing diagnostic log {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV serialization error
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },
}

impl BannerError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level - the batch already produced a result
            BannerError::LogWrite { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            BannerError::Config { .. } => ErrorSeverity::Critical,
            BannerError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            BannerError::ConfigRead { .. } => ErrorSeverity::Critical,
            BannerError::ConfigParse { .. } => ErrorSeverity::Critical,
            BannerError::ReportNotFound { .. } => ErrorSeverity::Critical,
            BannerError::ReportRead { .. } => ErrorSeverity::Critical,
            BannerError::ReportParse { .. } => ErrorSeverity::Critical,
            BannerError::InvalidReport { .. } => ErrorSeverity::Critical,
            BannerError::StdoutWrite { .. } => ErrorSeverity::Critical,
            BannerError::GlobPattern { .. } => ErrorSeverity::Critical,
            BannerError::InvalidPath { .. } => ErrorSeverity::Critical,

            // Regular errors - current file fails but the batch can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            BannerError::FileAccess { path, source } => {
                format!("Cannot access '{}': {}. Check that the file exists and is writable.", path.display(), source)
            }
            BannerError::ReportNotFound { path } => {
                format!("Coverage report '{}' does not exist. Run the coverage tool first or pass a different report path.", path.display())
            }
            BannerError::ReportParse { path, source } => {
                format!("Invalid JSON in coverage report '{}': {}. Please check the report format.", path.display(), source)
            }
            BannerError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create one with --init or use command line options.", path.display())
            }
            BannerError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            BannerError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid path.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        BannerError::Io { source }
    }

    /// Create a file access error with path context
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BannerError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create an empty file error
    pub fn empty_file(path: impl Into<PathBuf>) -> Self {
        BannerError::EmptyFile { path: path.into() }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        BannerError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid report error
    pub fn invalid_report(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        BannerError::InvalidReport {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for BannerError {
    fn from(err: std::io::Error) -> Self {
        BannerError::io_error(err)
    }
}

impl From<csv::Error> for BannerError {
    fn from(err: csv::Error) -> Self {
        BannerError::Csv { source: err }
    }
}

impl From<glob::PatternError> for BannerError {
    fn from(err: glob::PatternError) -> Self {
        BannerError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for BannerError {
    fn from(err: serde_json::Error) -> Self {
        BannerError::JsonSerialize { source: err }
    }
}

/// Result type alias for bannersync operations
pub type Result<T> = std::result::Result<T, BannerError>;
