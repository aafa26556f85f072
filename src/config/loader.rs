//! Configuration loading for the taskbar restorer.
//!
//! [`ConfigLoader`] locates `config.toml` in the application configuration
//! directory, deserializes it, and validates the result. A missing file is
//! not an error; the defaults are used instead, matching the helper's
//! best-effort character.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::RestoreConfig;
use crate::error::{ConfigError, RestoreError};
use crate::utils::fs as restore_fs;
use crate::utils::paths::{get_app_config_dir, get_app_state_dir};

/// Namespace struct for configuration loading logic.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the `RestoreConfig` for the application.
    ///
    /// Reads `config.toml` from the application configuration directory.
    /// A missing file yields the default configuration; read and parse
    /// failures are reported as [`ConfigError`] variants.
    pub fn load() -> Result<RestoreConfig, RestoreError> {
        let config_dir = get_app_config_dir()?;
        Self::load_from_path(&config_dir.join("config.toml"))
    }

    /// Loads and validates a `RestoreConfig` from an explicit file path.
    pub fn load_from_path(path: &Path) -> Result<RestoreConfig, RestoreError> {
        let mut config = match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| RestoreError::Config(ConfigError::ParseError(e)))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => RestoreConfig::default(),
            Err(e) => {
                return Err(RestoreError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }));
            }
        };

        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Validates the loaded `RestoreConfig` and performs necessary adjustments.
    ///
    /// Normalizes the logging level and format, requires non-empty panel
    /// executable, display, and authorization-file values, and resolves a
    /// relative log file path against the application state directory
    /// (creating parent directories as needed).
    fn validate_config(config: &mut RestoreConfig) -> Result<(), RestoreError> {
        // Logging level
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {
                config.logging.level = level_lower; // Normalize
            }
            _ => {
                return Err(RestoreError::Config(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))));
            }
        }

        // Logging format
        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => {
                config.logging.format = format_lower; // Normalize
            }
            _ => {
                return Err(RestoreError::Config(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))));
            }
        }

        // Panel settings
        if config.panel.executable.as_os_str().is_empty() {
            return Err(RestoreError::Config(ConfigError::ValidationError(
                "Panel executable path must not be empty.".to_string(),
            )));
        }
        if config.panel.display.trim().is_empty() {
            return Err(RestoreError::Config(ConfigError::ValidationError(
                "Display identifier must not be empty.".to_string(),
            )));
        }
        if config.panel.xauthority.as_os_str().is_empty() {
            return Err(RestoreError::Config(ConfigError::ValidationError(
                "Authorization file path must not be empty.".to_string(),
            )));
        }

        // Log file path
        if let Some(log_path) = &config.logging.file_path {
            if log_path.is_absolute() {
                if let Some(parent_dir) = log_path.parent() {
                    if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                        restore_fs::ensure_dir_exists(parent_dir)?;
                    }
                }
            } else {
                let state_dir = get_app_state_dir()?;
                let absolute_path = state_dir.join(log_path);
                if let Some(parent_dir) = absolute_path.parent() {
                    if !parent_dir.exists() {
                        restore_fs::ensure_dir_exists(parent_dir)?;
                    }
                }
                config.logging.file_path = Some(absolute_path);
            }
        }

        Ok(())
    }
}
