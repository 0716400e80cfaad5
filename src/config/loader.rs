use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::date_field::PropsError;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Date field #{index} ('{name}') is invalid: {source}")]
    InvalidField {
        index: usize,
        name: String,
        #[source]
        source: PropsError,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/buffet-tui/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("buffet-tui").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one date field is configured
    /// - Every field builds into valid props
    /// - Field names are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.date_fields.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one date field must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (index, field) in self.date_fields.iter().enumerate() {
            field
                .to_props()
                .map_err(|source| ConfigError::InvalidField {
                    index,
                    name: field.name.clone(),
                    source,
                })?;

            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Date field name '{}' is used more than once", field.name),
                });
            }
        }

        Ok(())
    }
}
