//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::file::DEFAULT_CONFIG_FILE;
use crate::error::{BannerError, Result};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BannerError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| BannerError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| BannerError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    // Validate report path if specified
    if let Some(report_path) = &settings.report_path {
        if report_path.as_os_str().is_empty() {
            return Err(BannerError::Config {
                message: format!("Invalid empty report_path in config file: {}", path.display()),
            });
        }
    }

    // Validate exclude patterns if specified
    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(BannerError::Config {
                    message: format!("Empty exclude pattern in config file: {}", path.display()),
                });
            }

            // Try to compile the pattern to check validity
            glob::Pattern::new(pattern).map_err(|e| BannerError::Config {
                message: format!(
                    "Invalid exclude pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ),
            })?;
        }
    }

    // Validate output file if specified
    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(BannerError::Config {
                message: format!("Invalid empty output_file in config file: {}", path.display()),
            });
        }
    }

    // Validate log file if specified
    if let Some(log_file) = &settings.log_file {
        if log_file.as_os_str().is_empty() {
            return Err(BannerError::Config {
                message: format!("Invalid empty log_file in config file: {}", path.display()),
            });
        }
    }

    Ok(())
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    // Check current directory first
    let current_dir_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if current_dir_config.exists() {
        return Ok(Some(parse_config_file(current_dir_config)?));
    }

    // Check user home directory next
    if let Some(home_dir) = dirs::home_dir() {
        let home_config = home_dir.join(DEFAULT_CONFIG_FILE);
        if home_config.exists() {
            return Ok(Some(parse_config_file(home_config)?));
        }
    }

    // Check XDG config directory if available
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("bannersync").join("config.toml");
        if xdg_config.exists() {
            return Ok(Some(parse_config_file(xdg_config)?));
        }
    }

    // No config file found
    Ok(None)
}

/// Create a default configuration file at the given path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let content = r#"# bannersync configuration file

# Path of the coverage report to consume
# report_path = "coverage.json"

# Glob patterns for file paths to exclude from the walk
# exclude_patterns = ["**/generated/**"]

# Output format: "Text", "Json" or "Csv"
# output_format = "Text"

# File to write output to (stdout if not set)
# output_file = "summary.json"

# Diagnostic log path (a temp file is used if not set)
# log_file = "bannersync.log"

# Suppress non-essential output
# quiet = false

# Show detailed progress information
# verbose = false

# Use colors in text output
# use_colors = true

# Show progress bars
# show_progress = true
"#;

    fs::write(path, content).map_err(|e| BannerError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
