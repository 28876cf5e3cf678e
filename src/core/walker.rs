//! Coverage report traversal
//!
//! The walker enumerates eligible file rows from a coverage report and
//! drives the annotator over each, in a single linear pass: module order,
//! then file order within a module. Nodes failing the eligibility predicate
//! are never visited and contribute to none of the counters.

use crate::core::annotator::FileAnnotator;
use crate::core::diagnostics::DiagnosticLog;
use crate::error::Result;
use crate::models::config::Settings;
use crate::models::report::{CoverageReport, FileNode};
use crate::models::summary::SyncResults;
use glob::Pattern;

/// Drives one banner synchronization batch over a coverage report
pub struct CoverageWalker {
    settings: Settings,
    exclude_patterns: Vec<Pattern>,
}

impl CoverageWalker {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Result<Self> {
        let mut exclude_patterns = Vec::new();
        for pattern_str in &settings.exclude_patterns {
            exclude_patterns.push(Pattern::new(pattern_str)?);
        }

        Ok(Self {
            settings,
            exclude_patterns,
        })
    }

    /// Synchronize banners for every eligible file in the report
    pub fn sync(&self, report: &CoverageReport) -> Result<SyncResults> {
        self.sync_with_progress(report, |_, _, _| {})
    }

    /// Synchronize banners with progress reporting
    pub fn sync_with_progress<F>(&self, report: &CoverageReport, progress_fn: F) -> Result<SyncResults>
    where
        F: Fn(usize, usize, &str),
    {
        let log = match &self.settings.log_file {
            Some(path) => DiagnosticLog::new(path),
            None => DiagnosticLog::new(DiagnosticLog::default_path()),
        };
        let mut annotator = FileAnnotator::new(log);
        let mut results = SyncResults::new();

        let eligible: Vec<&FileNode> = report
            .modules
            .iter()
            .flat_map(|module| module.files.iter())
            .filter(|file| self.is_eligible(file))
            .collect();

        progress_fn(0, eligible.len(), "Updating coverage banners");

        for (i, file) in eligible.iter().enumerate() {
            progress_fn(
                i,
                eligible.len(),
                &format!("Processing {}", file.path.display()),
            );

            let outcome =
                annotator.process(&file.path, file.covered_line_count, file.total_line_count);
            results.record(
                file.path.clone(),
                file.covered_line_count,
                file.total_line_count,
                outcome,
            );
        }

        // finish() only exposes the log path when errors were recorded.
        results.finish(Some(annotator.log_path().to_path_buf()));

        progress_fn(eligible.len(), eligible.len(), "Banner update complete");

        Ok(results)
    }

    /// Eligibility predicate for a file row.
    ///
    /// A row is visited only when it is visible under the active filter, is
    /// a leaf (aggregate rows are never annotated), is not a binary
    /// artifact, carries a non-zero line total, matches no exclude pattern,
    /// and exists on disk.
    fn is_eligible(&self, file: &FileNode) -> bool {
        if !file.is_visible || file.has_children {
            return false;
        }

        // Zero-total rows would divide by zero in the banner renderer.
        if file.total_line_count == 0 {
            return false;
        }

        let path_str = file.path.to_string_lossy();
        let lower = path_str.to_lowercase();
        if lower.ends_with(".dll") || lower.ends_with(".exe") {
            return false;
        }

        if self
            .exclude_patterns
            .iter()
            .any(|pattern| pattern.matches(&path_str))
        {
            return false;
        }

        file.path.exists()
    }

    /// Get the current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
