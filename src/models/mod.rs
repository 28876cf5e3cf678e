//! Data models and structures for bannersync

pub mod config;
pub mod report;
pub mod summary;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use report::{CoverageReport, FileNode, ModuleNode};
pub use summary::{ErrorDetail, FileRecord, RunSummary, SyncResults, VisitOutcome};
