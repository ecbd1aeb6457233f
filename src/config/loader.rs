use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/stepmodal/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stepmodal").join("config.toml")
    }

    /// Loads and validates configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses `path` without validating, for callers that layer overrides
    /// on top before calling [`validate`](Self::validate).
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
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

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one panel is configured
    /// - The initial panel is one of the configured panels
    /// - The modal has a usable size
    /// - Panels slide by a non-negative distance
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demo.panels == 0 {
            return Err(ConfigError::ValidationError {
                message: "At least one panel must be configured".to_string(),
            });
        }

        if !(1..=self.demo.panels).contains(&self.demo.initial_panel) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Initial panel {} not found in panels 1..={}",
                    self.demo.initial_panel, self.demo.panels
                ),
            });
        }

        if self.modal.width == 0 || self.modal.height == 0 {
            return Err(ConfigError::ValidationError {
                message: "Modal width and height must be non-zero".to_string(),
            });
        }

        if self.animation.slide_cells < 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "slide_cells must be non-negative, got {}",
                    self.animation.slide_cells
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
