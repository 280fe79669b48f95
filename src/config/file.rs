//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, SymgraphError};
use crate::models::config::{OracleStyle, PartialSettings};
use crate::models::StdlibPolicy;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".symgraph.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
    required: bool,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 5,
            required: false,
        }
    }

    /// Create a source for an explicitly requested file; it must exist
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 5,
            required: true,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(SymgraphError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Variable suffixes read by [`EnvConfig`]
const ENV_KEYS: &[&str] = &[
    "STDLIB",
    "MATCH",
    "EXCLUDE",
    "WORKERS",
    "GO",
    "ORACLE",
    "ORACLE_STYLE",
];

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(stdlib) = self.var("STDLIB") {
            settings.stdlib = Some(stdlib.parse::<StdlibPolicy>()?);
        }

        if let Some(pattern) = self.var("MATCH") {
            settings.match_pattern = Some(pattern);
        }

        if let Some(pattern) = self.var("EXCLUDE") {
            settings.exclude_pattern = Some(pattern);
        }

        if let Some(workers) = self.var("WORKERS") {
            let workers = workers.trim().parse().map_err(|_| {
                SymgraphError::config_error(format!(
                    "{}_WORKERS must be a positive number, got '{}'",
                    self.prefix, workers
                ))
            })?;
            settings.workers = Some(workers);
        }

        if let Some(go) = self.var("GO") {
            settings.go_command = Some(go);
        }

        if let Some(oracle) = self.var("ORACLE") {
            settings.oracle_command = Some(oracle);
        }

        if let Some(style) = self.var("ORACLE_STYLE") {
            settings.oracle_style = Some(
                style
                    .parse::<OracleStyle>()
                    .map_err(SymgraphError::config_error)?,
            );
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
