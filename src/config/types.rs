//! Configuration data structures for the taskbar restorer.
//!
//! These structs are populated by deserializing a TOML configuration file.
//! Missing fields fall back to defaults from the [`super::defaults`] module,
//! and unknown fields are rejected via `#[serde(deny_unknown_fields)]`.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults;

/// Configuration for one panel launch attempt.
///
/// All values default to the constants the restorer was originally written
/// with: the `wf-panel-pi` binary, display `:0`, the invoking user's
/// `~/.Xauthority`, and a two second settling delay.
///
/// # Examples
///
/// ```
/// use taskbar_restore::config::PanelConfig;
///
/// let config = PanelConfig::default();
/// assert_eq!(config.display, ":0");
/// assert_eq!(config.settle_delay_ms, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    /// Path of the panel executable to spawn.
    #[serde(default = "defaults::default_panel_executable")]
    pub executable: PathBuf,
    /// Display identifier exported to the child as `DISPLAY`.
    #[serde(default = "defaults::default_display")]
    pub display: String,
    /// Path of the X authorization file exported to the child as `XAUTHORITY`.
    #[serde(default = "defaults::default_xauthority")]
    pub xauthority: PathBuf,
    /// Settling delay before the launch is attempted, in milliseconds.
    /// Zero disables the delay.
    #[serde(default = "defaults::default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl PanelConfig {
    /// The settling delay as a [`Duration`].
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        defaults::default_panel_config()
    }
}

/// Configuration settings for the logging subsystem.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled. Relative paths are resolved
    /// against the application's state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// The log message format, "text" or "json" (case-insensitive).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Root configuration structure for the taskbar restorer.
///
/// # Examples
///
/// ```
/// use taskbar_restore::config::RestoreConfig;
///
/// let toml_str = r#"
/// [panel]
/// display = ":1"
///
/// [logging]
/// level = "debug"
/// "#;
/// let config: RestoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(config.panel.display, ":1");
/// assert_eq!(config.logging.level, "debug");
/// assert_eq!(config.panel.settle_delay_ms, 2000); // default
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestoreConfig {
    /// Panel launch settings.
    #[serde(default = "defaults::default_panel_config")]
    pub panel: PanelConfig,
    /// Logging settings.
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            panel: defaults::default_panel_config(),
            logging: defaults::default_logging_config(),
        }
    }
}
