//! Tests for coverage report loading

use bannersync::{BannerError, CoverageReport};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_report_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coverage.json");
    fs::write(
        &path,
        r#"{
            "modules": [
                { "name": "core",
                  "files": [
                    { "path": "src/engine.cpp",
                      "covered_line_count": 10,
                      "total_line_count": 20,
                      "is_visible": true,
                      "has_children": false },
                    { "path": "src/engine_test.cpp",
                      "covered_line_count": 5,
                      "total_line_count": 5 } ] },
                { "name": "util", "files": [] } ]
        }"#,
    )
    .unwrap();

    let report = CoverageReport::from_file(&path).unwrap();
    assert_eq!(report.modules.len(), 2);
    assert_eq!(report.file_count(), 2);

    // Missing flags fall back to visible leaf defaults
    let test_file = &report.modules[0].files[1];
    assert!(test_file.is_visible);
    assert!(!test_file.has_children);
}

#[test]
fn test_missing_report_is_reported() {
    let dir = tempdir().unwrap();
    let err = CoverageReport::from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, BannerError::ReportNotFound { .. }));
    assert!(err.is_critical());
}

#[test]
fn test_malformed_report_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coverage.json");
    fs::write(&path, "{ not json").unwrap();

    let err = CoverageReport::from_file(&path).unwrap_err();
    assert!(matches!(err, BannerError::ReportParse { .. }));
}

#[test]
fn test_report_invariant_covered_within_total() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coverage.json");
    fs::write(
        &path,
        r#"{
            "modules": [
                { "name": "core",
                  "files": [
                    { "path": "src/engine.cpp",
                      "covered_line_count": 30,
                      "total_line_count": 20 } ] } ]
        }"#,
    )
    .unwrap();

    let err = CoverageReport::from_file(&path).unwrap_err();
    assert!(matches!(err, BannerError::InvalidReport { .. }));
}
