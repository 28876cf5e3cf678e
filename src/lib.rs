//! bannersync - coverage banner synchronization
//!
//! This library rewrites the first line of source files with a coverage
//! "banner" computed from a hierarchical coverage report, preserving
//! human-authored trailing annotations and containing per-file failures so a
//! batch always runs to completion.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::core::{banner, CoverageWalker, DiagnosticLog, FileAnnotator};
pub use error::{BannerError, ErrorSeverity, Result, ResultExt};
pub use models::{
    config::Settings,
    report::{CoverageReport, FileNode, ModuleNode},
    summary::{RunSummary, SyncResults, VisitOutcome},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
