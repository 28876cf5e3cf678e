//! Banner text rendering and classification
//!
//! A banner is the managed first line of a source file encoding its coverage
//! status, e.g. `//UT Coverage: 67%, 2/3, NEED_MORE`. Everything here is
//! pure text transformation; file I/O lives in the annotator.

use std::path::Path;

/// Prefix identifying a first line as a banner under our convention
pub const BANNER_MARKER: &str = "//UT Coverage";

/// File name suffix marking a file as a test source
const TEST_FILE_SUFFIX: &str = "_test.cpp";

/// Classification of a file's current first line relative to the freshly
/// rendered banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Already current, no rewrite needed
    Match,
    /// Not a banner this tool manages, must be left untouched
    Foreign,
    /// A managed banner that needs replacing
    Stale,
}

/// Render the canonical banner for a coverage result.
///
/// `total` must be greater than zero; zero-total files are excluded from the
/// walk before rendering. The percentage rounds half up. When
/// `covered != total`, any literal `100%` in the text is downgraded to `99%`
/// so a not-fully-covered file can never present full coverage. The coverage
/// verdict suffix depends on the file naming convention: test sources
/// (`_test.cpp`) get `ENOUGH`, everything else `NEED_MORE`.
pub fn render(path: &Path, covered: u64, total: u64) -> String {
    debug_assert!(total > 0, "zero-total files must be filtered upstream");

    let percent = (100.0 * covered as f64 / total as f64 + 0.5) as u64;
    let mut banner = format!("{}: {}%, {}/{}", BANNER_MARKER, percent, covered, total);

    if covered != total {
        // Note this replaces any literal "100%" in the text, not just the
        // computed percentage field, mirroring the established banner format.
        banner = banner.replace("100%", "99%");
    }

    if path.to_string_lossy().ends_with(TEST_FILE_SUFFIX) {
        banner.push_str(", ENOUGH");
    } else {
        banner.push_str(", NEED_MORE");
    }

    banner
}

/// Classify an existing first line against a freshly rendered banner
pub fn classify(existing: &str, rendered: &str) -> Classification {
    if !existing.starts_with(BANNER_MARKER) {
        Classification::Foreign
    } else if existing.starts_with(rendered) {
        Classification::Match
    } else {
        Classification::Stale
    }
}

/// Combine a rendered banner with the human-authored trailing annotation of
/// the line it replaces.
///
/// The annotation is the substring starting at the first ` (` of the
/// existing line, typically a ticket reference, and is carried over verbatim.
pub fn merge(existing: &str, rendered: &str) -> String {
    match existing.find(" (") {
        Some(pos) => format!("{}{}", rendered, &existing[pos..]),
        None => rendered.to_string(),
    }
}
