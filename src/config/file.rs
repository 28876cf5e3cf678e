//! Configuration file handling

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::Result;
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".bannersync.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location, refusing to
    /// overwrite an existing one. Returns whether the file was written.
    pub fn create_default(&self) -> Result<bool> {
        if self.is_available() {
            return Ok(false);
        }

        parser::create_default_config(&self.path)?;
        Ok(true)
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(crate::error::BannerError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.exists() && self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
