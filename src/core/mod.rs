//! Core functionality for banner synchronization

pub mod annotator;
pub mod banner;
pub mod diagnostics;
pub mod walker;

pub use annotator::FileAnnotator;
pub use diagnostics::DiagnosticLog;
pub use walker::CoverageWalker;
