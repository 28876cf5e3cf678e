//! Error context utilities
//!
//! Helpers for attaching file and message context to errors raised by
//! lower-level crates before they enter the bannersync error type.

use crate::error::{BannerError, Result};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| BannerError::Config {
            message: format!("{}: {}", context(), err),
        })
    }
}
