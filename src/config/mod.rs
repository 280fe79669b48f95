//! Configuration management
//!
//! Settings are layered: built-in defaults, then a config file, then
//! `SYMGRAPH_*` environment variables, then command-line flags.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;
#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig};
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SYMGRAPH";

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Whether an unavailable source is an error rather than skipped
    fn is_required(&self) -> bool {
        false
    }

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
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
    pub fn load_from(self, source: &dyn ConfigSource) -> Result<Self> {
        if source.is_available() || source.is_required() {
            tracing::debug!(source = source.name(), "loading configuration");
            Ok(self.merge(source.load()?))
        } else {
            Ok(self)
        }
    }

    /// Merge every source, lowest priority first
    pub fn load_all(mut self, mut sources: Vec<Box<dyn ConfigSource>>) -> Result<Self> {
        sources.sort_by_key(|source| source.priority());
        for source in &sources {
            self = self.load_from(source.as_ref())?;
        }
        Ok(self)
    }

    /// Add configuration from a file that must exist
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        self.load_from(&file_config)
    }

    /// Add configuration from the first default config file found, if any
    pub fn try_add_default_config_file(self) -> Result<Self> {
        match parser::find_default_config()? {
            Some(default_config) => Ok(self.merge(default_config)),
            None => Ok(self),
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let mut builder = ConfigBuilder::new();

    builder = match &cli_args.config {
        Some(path) => builder.add_config_file(path)?,
        None => builder.try_add_default_config_file()?,
    };

    builder
        .load_all(vec![
            Box::new(EnvConfig::new(env_prefix)),
            Box::new(CliConfig::new(cli_args)),
        ])?
        .build()
}
