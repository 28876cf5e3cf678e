//! Per-file outcomes and batch summary structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of processing exactly one file; produced once, never retried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The banner line was rewritten
    Updated,
    /// The file was left untouched (already current, or foreign)
    Skipped,
    /// Processing failed; the file was left untouched and details logged
    Error(ErrorDetail),
}

impl VisitOutcome {
    /// Stable lower-case label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            VisitOutcome::Updated => "updated",
            VisitOutcome::Skipped => "skipped",
            VisitOutcome::Error(_) => "error",
        }
    }
}

/// Diagnostic detail carried by an `Error` outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub path: PathBuf,
    pub covered: u64,
    pub total: u64,
    /// Description of the failure
    pub message: String,
    /// Last successfully read content fragment, or a sentinel
    pub fragment: String,
}

/// One row of the batch result, retained for json/csv reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub covered_line_count: u64,
    pub total_line_count: u64,
    pub outcome: String,
    /// Failure description for `error` rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Aggregate counts for one batch invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub updated: u64,
    pub skipped: u64,
    pub errors: u64,
    pub total: u64,
    /// Path of the diagnostic log, set when `errors > 0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl RunSummary {
    /// Fold one outcome into the counters
    pub fn record(&mut self, outcome: &VisitOutcome) {
        match outcome {
            VisitOutcome::Updated => self.updated += 1,
            VisitOutcome::Skipped => self.skipped += 1,
            VisitOutcome::Error(_) => self.errors += 1,
        }
        self.total += 1;
    }

    /// Whether the batch finished without per-file failures
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

/// Complete result of one banner synchronization batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResults {
    pub files: Vec<FileRecord>,
    pub summary: RunSummary,
    pub finished_at: chrono::DateTime<chrono::Utc>,
}

impl SyncResults {
    /// Create a new empty result set
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            summary: RunSummary::default(),
            finished_at: chrono::Utc::now(),
        }
    }

    /// Record the outcome of one file visit
    pub fn record(&mut self, path: PathBuf, covered: u64, total: u64, outcome: VisitOutcome) {
        self.summary.record(&outcome);

        let detail = match &outcome {
            VisitOutcome::Error(detail) => Some(detail.message.clone()),
            _ => None,
        };

        self.files.push(FileRecord {
            path,
            covered_line_count: covered,
            total_line_count: total,
            outcome: outcome.label().to_string(),
            detail,
        });
    }

    /// Mark the batch as finished
    pub fn finish(&mut self, log_file: Option<PathBuf>) {
        self.finished_at = chrono::Utc::now();
        if self.summary.errors > 0 {
            self.summary.log_file = log_file;
        }
    }
}

impl Default for SyncResults {
    fn default() -> Self {
        Self::new()
    }
}
