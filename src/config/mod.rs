//! Configuration management

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::CliConfig;
pub use file::FileConfig;
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            match source.load() {
                Ok(partial) => Ok(self.merge(partial)),
                Err(e) => Err(e),
            }
        } else {
            Ok(self)
        }
    }

    /// Merge settings from an explicit configuration file
    pub fn add_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let source = FileConfig::with_path(path);
        let partial = source.load()?;
        Ok(self.merge(partial))
    }

    /// Merge settings from a default-location configuration file, if one
    /// exists; silently continues without one
    pub fn try_add_default_config_file(self) -> Self {
        match find_default_config() {
            Ok(Some(partial)) => self.merge(partial),
            _ => self,
        }
    }

    /// Resolve the merged configuration into validated settings
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.into_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
