//! Per-file banner application
//!
//! The annotator owns the read-decide-rewrite cycle for a single file. All
//! failures are contained here: every `process` call returns a
//! `VisitOutcome`, never an error, so the walker's loop needs no failure
//! handling of its own.

use crate::core::banner::{self, Classification, BANNER_MARKER};
use crate::core::diagnostics::DiagnosticLog;
use crate::error::{BannerError, Result};
use crate::models::summary::{ErrorDetail, VisitOutcome};
use std::fs;
use std::path::Path;

/// Sentinel fragment recorded when a failure happens before the first line
/// could be read
const NOT_READ_YET: &str = "<not read yet>";

/// Applies the banner decision to one file on disk
#[derive(Debug)]
pub struct FileAnnotator {
    log: DiagnosticLog,
}

impl FileAnnotator {
    /// Create an annotator writing error records to the given log
    pub fn new(log: DiagnosticLog) -> Self {
        Self { log }
    }

    /// Process one file: read its first line, classify it against the
    /// freshly rendered banner, and rewrite when stale.
    ///
    /// A successful `Updated` outcome mutates the file in place; `Skipped`
    /// and `Error` leave it untouched. The rewrite is not transactional.
    pub fn process(&mut self, path: &Path, covered: u64, total: u64) -> VisitOutcome {
        let mut fragment = String::from(NOT_READ_YET);

        match self.annotate(path, covered, total, &mut fragment) {
            Ok(outcome) => outcome,
            Err(err) => {
                let detail = ErrorDetail {
                    path: path.to_path_buf(),
                    covered,
                    total,
                    message: err.to_string(),
                    fragment,
                };
                if let Err(log_err) = self.log.append(&detail) {
                    eprintln!("Warning: {}", log_err);
                }
                VisitOutcome::Error(detail)
            }
        }
    }

    /// Path of the diagnostic log backing this annotator
    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    fn annotate(
        &self,
        path: &Path,
        covered: u64,
        total: u64,
        fragment: &mut String,
    ) -> Result<VisitOutcome> {
        let bytes = fs::read(path).map_err(|e| BannerError::file_access(path, e))?;
        if bytes.is_empty() {
            return Err(BannerError::empty_file(path));
        }

        let (first_line, terminator, remainder) = split_first_line(&bytes);

        // The marker check runs on raw bytes so non-UTF-8 sources classify
        // as foreign and stay untouched.
        if !first_line.starts_with(BANNER_MARKER.as_bytes()) {
            return Ok(VisitOutcome::Skipped);
        }

        let existing = std::str::from_utf8(first_line).map_err(|_| {
            BannerError::InvalidBannerLine {
                path: path.to_path_buf(),
            }
        })?;
        *fragment = existing.to_string();

        let rendered = banner::render(path, covered, total);
        match banner::classify(existing, &rendered) {
            Classification::Match | Classification::Foreign => Ok(VisitOutcome::Skipped),
            Classification::Stale => {
                let line = banner::merge(existing, &rendered);

                let mut content =
                    Vec::with_capacity(line.len() + terminator.len() + remainder.len());
                content.extend_from_slice(line.as_bytes());
                content.extend_from_slice(terminator);
                content.extend_from_slice(remainder);

                fs::write(path, content).map_err(|e| BannerError::file_access(path, e))?;
                Ok(VisitOutcome::Updated)
            }
        }
    }
}

/// Split file content into first line, its terminator, and the untouched
/// remainder. The terminator of the original first line is reused on rewrite
/// so line endings stay consistent; a file with no newline gets `\n`.
fn split_first_line(bytes: &[u8]) -> (&[u8], &'static [u8], &[u8]) {
    match bytes.iter().position(|&b| b == b'\n') {
        Some(pos) => {
            if pos > 0 && bytes[pos - 1] == b'\r' {
                (&bytes[..pos - 1], b"\r\n", &bytes[pos + 1..])
            } else {
                (&bytes[..pos], b"\n", &bytes[pos + 1..])
            }
        }
        None => (bytes, b"\n", &[]),
    }
}
