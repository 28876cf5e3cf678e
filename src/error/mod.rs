//! Error handling for the bannersync application
//!
//! This module provides the error handling system for bannersync,
//! including error types, result aliases, and error context utilities.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{BannerError, ErrorSeverity, Result};
