//! Configuration settings validation

use crate::error::{BannerError, Result, ResultExt};
use crate::models::config::Settings;
use std::path::Path;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        // Validate exclude patterns
        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)
                .with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
        }

        // Validate output file path is writable if specified
        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        // Validate log file parent directory if specified
        if let Some(path) = &settings.log_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that an output path's parent directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(BannerError::InvalidPath {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}
