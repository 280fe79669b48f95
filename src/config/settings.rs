//! Settings validation

use regex::Regex;
use std::path::Path;

use crate::error::{Result, SymgraphError};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.root.trim().is_empty() {
            return Err(SymgraphError::config_error(
                "No root package given; usage: symgraph [OPTIONS] <PACKAGE>, or set `root` in the config file",
            ));
        }

        for pattern in [&settings.match_pattern, &settings.exclude_pattern]
            .into_iter()
            .flatten()
        {
            Regex::new(pattern).map_err(|source| SymgraphError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        if settings.workers == 0 {
            return Err(SymgraphError::config_error("Workers must be at least 1"));
        }

        if settings.view && settings.layout_format.trim().is_empty() {
            return Err(SymgraphError::config_error("Layout format must not be empty"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the output file's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(SymgraphError::config_error(format!(
                    "Output directory {} does not exist",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}
