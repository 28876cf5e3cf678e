//! Coverage report data structures
//!
//! The report is produced by an external coverage run and consumed read-only.
//! It is a two-level tree: modules containing file entries, each file carrying
//! covered/total line counts plus the visibility flags computed by the
//! reporting side.

use crate::error::{BannerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A complete coverage report: a flat list of modules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverageReport {
    #[serde(default)]
    pub modules: Vec<ModuleNode>,
}

/// A module row grouping the files it was built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleNode {
    pub name: String,
    #[serde(default)]
    pub files: Vec<FileNode>,
}

/// A file row of the coverage report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileNode {
    /// On-disk path of the source file
    pub path: PathBuf,

    /// Number of lines covered by the run
    pub covered_line_count: u64,

    /// Number of coverable lines; 0 marks entries excluded from the walk
    pub total_line_count: u64,

    /// Whether the row is visible under the currently active filter
    #[serde(default = "default_true")]
    pub is_visible: bool,

    /// Whether the row is an aggregate with children rather than a leaf file
    #[serde(default)]
    pub has_children: bool,
}

fn default_true() -> bool {
    true
}

impl CoverageReport {
    /// Load a coverage report from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BannerError::ReportNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| BannerError::ReportRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let report: CoverageReport =
            serde_json::from_str(&content).map_err(|e| BannerError::ReportParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        report.validate(path)?;

        Ok(report)
    }

    /// Check the report's own invariants
    fn validate(&self, path: &Path) -> Result<()> {
        for module in &self.modules {
            for file in &module.files {
                if file.covered_line_count > file.total_line_count {
                    return Err(BannerError::invalid_report(
                        path,
                        format!(
                            "{}: covered lines ({}) exceed total lines ({})",
                            file.path.display(),
                            file.covered_line_count,
                            file.total_line_count
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Total number of file rows across all modules
    pub fn file_count(&self) -> usize {
        self.modules.iter().map(|m| m.files.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_with_defaults() {
        let json = r#"{
            "modules": [
                { "name": "core",
                  "files": [
                    { "path": "src/engine.cpp",
                      "covered_line_count": 10,
                      "total_line_count": 20 } ] } ]
        }"#;

        let report: CoverageReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.file_count(), 1);

        let file = &report.modules[0].files[0];
        assert!(file.is_visible);
        assert!(!file.has_children);
        assert_eq!(file.covered_line_count, 10);
        assert_eq!(file.total_line_count, 20);
    }

    #[test]
    fn test_parse_empty_report() {
        let report: CoverageReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.file_count(), 0);
    }

    #[test]
    fn test_validate_rejects_covered_above_total() {
        let report = CoverageReport {
            modules: vec![ModuleNode {
                name: "core".to_string(),
                files: vec![FileNode {
                    path: PathBuf::from("src/engine.cpp"),
                    covered_line_count: 21,
                    total_line_count: 20,
                    is_visible: true,
                    has_children: false,
                }],
            }],
        };

        let err = report.validate(Path::new("coverage.json")).unwrap_err();
        assert!(matches!(err, BannerError::InvalidReport { .. }));
    }
}
