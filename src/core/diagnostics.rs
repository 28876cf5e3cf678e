//! Append-only diagnostic log for per-file failures
//!
//! One human-readable record per `Error` outcome. The log is only ever
//! appended to by the annotator; the batch being single-threaded, no locking
//! is needed.

use crate::error::{BannerError, Result};
use crate::models::summary::ErrorDetail;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only log collecting per-file error records
#[derive(Debug)]
pub struct DiagnosticLog {
    path: PathBuf,
    records: u64,
}

impl DiagnosticLog {
    /// Create a log that will write to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: 0,
        }
    }

    /// Default log location under the system temp directory, unique per
    /// process so concurrent invocations do not interleave
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join(format!("bannersync-{}.log", std::process::id()))
    }

    /// Append one error record
    pub fn append(&mut self, detail: &ErrorDetail) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BannerError::LogWrite {
                path: self.path.clone(),
                source: e,
            })?;

        writeln!(
            file,
            "[{}] {} while processing {} {}/{}, last read: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            detail.message,
            detail.path.display(),
            detail.covered,
            detail.total,
            detail.fragment
        )
        .map_err(|e| BannerError::LogWrite {
            path: self.path.clone(),
            source: e,
        })?;

        self.records += 1;
        Ok(())
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether any record was written during this batch
    pub fn has_records(&self) -> bool {
        self.records > 0
    }
}
