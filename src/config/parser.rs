//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{Result, SymgraphError};
use crate::models::config::PartialSettings;
use crate::models::StdlibPolicy;

/// Embedded template written by `--init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SymgraphError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| SymgraphError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();
    let parse_error = |source| SymgraphError::ConfigParse {
        path: path.to_path_buf(),
        source,
    };

    // An unknown stdlib value is reported as such rather than as a TOML error.
    let table: toml::Table = toml::from_str(content).map_err(parse_error)?;
    if let Some(value) = table.get("stdlib") {
        match value.as_str() {
            Some(text) => {
                text.parse::<StdlibPolicy>()?;
            }
            None => {
                return Err(SymgraphError::InvalidStdlibPolicy {
                    value: value.to_string(),
                })
            }
        }
    }

    let settings: PartialSettings = toml::from_str(content).map_err(parse_error)?;
    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if settings.workers == Some(0) {
        return Err(SymgraphError::config_error(format!(
            "Invalid workers 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    let commands = [
        ("go_command", &settings.go_command),
        ("oracle_command", &settings.oracle_command),
        ("layout_program", &settings.layout_program),
        ("layout_format", &settings.layout_format),
    ];
    for (key, value) in commands {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(SymgraphError::config_error(format!(
                "Invalid empty {} in config file: {}",
                key,
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(SymgraphError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Locations searched for a configuration file, in order
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("symgraph").join("config.toml"));
    }
    paths
}

/// Load the first existing file among `candidates`
pub fn find_config_in(candidates: &[PathBuf]) -> Result<Option<PartialSettings>> {
    for candidate in candidates {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using configuration file");
            return parse_config_file(candidate).map(Some);
        }
    }
    Ok(None)
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(&default_config_paths())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(SymgraphError::io_error)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| SymgraphError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
