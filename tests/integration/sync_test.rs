//! End-to-end tests for the banner synchronization batch
//!
//! These tests drive `CoverageWalker` over real files in a temp directory
//! and verify the testable properties of the engine: idempotence, foreign
//! file protection, annotation preservation, error isolation, and the
//! eligibility filter.

use bannersync::{
    models::report::{CoverageReport, FileNode, ModuleNode},
    CoverageWalker, Settings,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn settings_with_log(dir: &Path) -> Settings {
    Settings {
        log_file: Some(dir.join("diag.log")),
        ..Settings::default()
    }
}

fn file_node(path: PathBuf, covered: u64, total: u64) -> FileNode {
    FileNode {
        path,
        covered_line_count: covered,
        total_line_count: total,
        is_visible: true,
        has_children: false,
    }
}

fn report_with(files: Vec<FileNode>) -> CoverageReport {
    CoverageReport {
        modules: vec![ModuleNode {
            name: "core".to_string(),
            files,
        }],
    }
}

#[test]
fn test_updates_stale_banner_and_preserves_body() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.cpp");
    fs::write(
        &path,
        "//UT Coverage: 10%, 1/10, NEED_MORE\nint run() { return 0; }\n",
    )
    .unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![file_node(path.clone(), 2, 3)]))
        .unwrap();

    assert_eq!(results.summary.updated, 1);
    assert_eq!(results.summary.skipped, 0);
    assert_eq!(results.summary.errors, 0);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "//UT Coverage: 67%, 2/3, NEED_MORE\nint run() { return 0; }\n"
    );
}

#[test]
fn test_second_run_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.cpp");
    fs::write(&path, "//UT Coverage: 10%, 1/10, NEED_MORE\nbody\n").unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let report = report_with(vec![file_node(path.clone(), 2, 3)]);

    let first = walker.sync(&report).unwrap();
    assert_eq!(first.summary.updated, 1);

    let second = walker.sync(&report).unwrap();
    assert_eq!(second.summary.updated, 0);
    assert_eq!(second.summary.skipped, 1);
}

#[test]
fn test_foreign_file_is_never_touched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("generated.cpp");
    let original = "// generated, do not edit\nint table[] = {1, 2, 3};\n";
    fs::write(&path, original).unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![file_node(path.clone(), 0, 3)]))
        .unwrap();

    assert_eq!(results.summary.skipped, 1);
    assert_eq!(results.summary.updated, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_trailing_annotation_is_preserved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine_test.cpp");
    fs::write(
        &path,
        "//UT Coverage: 50%, 1/2, NEED_MORE (see TICKET-42)\nbody\n",
    )
    .unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![file_node(path.clone(), 2, 2)]))
        .unwrap();

    assert_eq!(results.summary.updated, 1);
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "//UT Coverage: 100%, 2/2, ENOUGH (see TICKET-42)\nbody\n"
    );
}

#[test]
fn test_crlf_line_endings_are_preserved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.cpp");
    fs::write(&path, "//UT Coverage: 0%, 0/4, NEED_MORE\r\nbody\r\n").unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    walker
        .sync(&report_with(vec![file_node(path.clone(), 3, 4)]))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "//UT Coverage: 75%, 3/4, NEED_MORE\r\nbody\r\n");
}

#[test]
fn test_error_isolation_keeps_batch_running() {
    let dir = tempdir().unwrap();

    let a = dir.path().join("a.cpp");
    fs::write(&a, "//UT Coverage: 0%, 0/2, NEED_MORE\nbody\n").unwrap();

    // Empty file: readable but no banner line can be extracted.
    let b = dir.path().join("b.cpp");
    fs::write(&b, "").unwrap();

    let c = dir.path().join("c.cpp");
    fs::write(&c, "//UT Coverage: 0%, 0/2, NEED_MORE\nbody\n").unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![
            file_node(a.clone(), 1, 2),
            file_node(b.clone(), 1, 2),
            file_node(c.clone(), 1, 2),
        ]))
        .unwrap();

    assert_eq!(results.summary.updated, 2);
    assert_eq!(results.summary.skipped, 0);
    assert_eq!(results.summary.errors, 1);
    assert_eq!(results.summary.total, 3);

    // A and C were still processed
    assert!(fs::read_to_string(&a)
        .unwrap()
        .starts_with("//UT Coverage: 50%, 1/2, NEED_MORE"));
    assert!(fs::read_to_string(&c)
        .unwrap()
        .starts_with("//UT Coverage: 50%, 1/2, NEED_MORE"));

    // The diagnostic log names the failed file and is surfaced in the summary
    let log_path = dir.path().join("diag.log");
    assert_eq!(results.summary.log_file, Some(log_path.clone()));
    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("b.cpp"));
    assert!(log.contains("1/2"));
}

#[test]
fn test_non_utf8_file_without_marker_is_skipped_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.cpp");
    let original: &[u8] = b"\xFF\xFE binary\nmore bytes\xC0\n";
    fs::write(&path, original).unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![file_node(path.clone(), 1, 2)]))
        .unwrap();

    assert_eq!(results.summary.skipped, 1);
    assert_eq!(results.summary.updated, 0);
    assert_eq!(results.summary.errors, 0);
    assert_eq!(fs::read(&path).unwrap(), original);
}

#[test]
fn test_non_utf8_banner_line_is_a_content_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mangled.cpp");
    let original: &[u8] = b"//UT Coverage\xFF\nbody\n";
    fs::write(&path, original).unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![file_node(path.clone(), 1, 2)]))
        .unwrap();

    assert_eq!(results.summary.errors, 1);
    assert_eq!(results.summary.updated, 0);
    assert_eq!(results.summary.skipped, 0);

    // The file is left untouched and the failure is logged
    assert_eq!(fs::read(&path).unwrap(), original);
    let log = fs::read_to_string(dir.path().join("diag.log")).unwrap();
    assert!(log.contains("mangled.cpp"));
    assert!(log.contains("not valid UTF-8"));
}

#[test]
fn test_eligibility_filter_excludes_nodes_before_processing() {
    let dir = tempdir().unwrap();

    let visible = dir.path().join("visible.cpp");
    fs::write(&visible, "//UT Coverage: 0%, 0/2, NEED_MORE\nbody\n").unwrap();

    let hidden = dir.path().join("hidden.cpp");
    fs::write(&hidden, "//UT Coverage: 0%, 0/2, NEED_MORE\nbody\n").unwrap();

    let aggregate = dir.path().join("aggregate.cpp");
    fs::write(&aggregate, "//UT Coverage: 0%, 0/2, NEED_MORE\nbody\n").unwrap();

    let binary = dir.path().join("module.dll");
    fs::write(&binary, "//UT Coverage: 0%, 0/2, NEED_MORE\n").unwrap();

    let zero_total = dir.path().join("header.h");
    fs::write(&zero_total, "//UT Coverage: 0%, 0/2, NEED_MORE\n").unwrap();

    let missing = dir.path().join("missing.cpp");

    let mut hidden_node = file_node(hidden.clone(), 1, 2);
    hidden_node.is_visible = false;

    let mut aggregate_node = file_node(aggregate.clone(), 1, 2);
    aggregate_node.has_children = true;

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![
            file_node(visible.clone(), 1, 2),
            hidden_node,
            aggregate_node,
            file_node(binary, 1, 2),
            file_node(zero_total, 0, 0),
            file_node(missing, 1, 2),
        ]))
        .unwrap();

    // Only the visible leaf was visited; excluded nodes count nowhere.
    assert_eq!(results.summary.updated, 1);
    assert_eq!(results.summary.skipped, 0);
    assert_eq!(results.summary.errors, 0);
    assert_eq!(results.summary.total, 1);

    // Excluded files were left untouched
    assert!(fs::read_to_string(&hidden)
        .unwrap()
        .starts_with("//UT Coverage: 0%, 0/2"));
}

#[test]
fn test_exclude_patterns_filter_paths() {
    let dir = tempdir().unwrap();
    let kept = dir.path().join("kept.cpp");
    fs::write(&kept, "//UT Coverage: 0%, 0/2, NEED_MORE\nbody\n").unwrap();
    let dropped = dir.path().join("dropped.cpp");
    fs::write(&dropped, "//UT Coverage: 0%, 0/2, NEED_MORE\nbody\n").unwrap();

    let settings = Settings {
        exclude_patterns: vec!["**/dropped.cpp".to_string()],
        log_file: Some(dir.path().join("diag.log")),
        ..Settings::default()
    };

    let walker = CoverageWalker::new(settings).unwrap();
    let results = walker
        .sync(&report_with(vec![
            file_node(kept, 1, 2),
            file_node(dropped.clone(), 1, 2),
        ]))
        .unwrap();

    assert_eq!(results.summary.total, 1);
    assert!(fs::read_to_string(&dropped)
        .unwrap()
        .starts_with("//UT Coverage: 0%, 0/2"));
}

#[test]
fn test_matching_banner_is_skipped_without_rewrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.cpp");
    fs::write(&path, "//UT Coverage: 50%, 1/2, NEED_MORE\nbody\n").unwrap();

    let before = fs::metadata(&path).unwrap().modified().unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![file_node(path.clone(), 1, 2)]))
        .unwrap();

    assert_eq!(results.summary.skipped, 1);
    assert_eq!(results.summary.updated, 0);
    let after = fs::metadata(&path).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_file_without_trailing_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.cpp");
    fs::write(&path, "//UT Coverage: 0%, 0/3, NEED_MORE").unwrap();

    let walker = CoverageWalker::new(settings_with_log(dir.path())).unwrap();
    let results = walker
        .sync(&report_with(vec![file_node(path.clone(), 1, 3)]))
        .unwrap();

    assert_eq!(results.summary.updated, 1);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "//UT Coverage: 33%, 1/3, NEED_MORE\n"
    );
}
