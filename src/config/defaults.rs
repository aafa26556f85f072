//! Default configuration values for the taskbar restorer.
//!
//! These functions back `serde`'s `default` attributes in the configuration
//! structures, providing values when fields are absent from the
//! configuration file.

use crate::config::{LoggingConfig, PanelConfig};
use directories_next::BaseDirs;
use std::path::PathBuf;

/// Returns the default `PanelConfig`.
///
/// Used by `RestoreConfig` if the `panel` section is missing.
pub(super) fn default_panel_config() -> PanelConfig {
    PanelConfig {
        executable: default_panel_executable(),
        display: default_display(),
        xauthority: default_xauthority(),
        settle_delay_ms: default_settle_delay_ms(),
    }
}

/// Returns the default panel executable path (`/usr/bin/wf-panel-pi`).
pub(super) fn default_panel_executable() -> PathBuf {
    PathBuf::from("/usr/bin/wf-panel-pi")
}

/// Returns the default display identifier (`":0"`).
pub(super) fn default_display() -> String {
    ":0".to_string()
}

/// Returns the default X authorization file path.
///
/// Resolves to `~/.Xauthority` for the invoking user. When no home directory
/// can be determined, falls back to the stock Raspberry Pi OS account
/// location.
pub(super) fn default_xauthority() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".Xauthority"))
        .unwrap_or_else(|| PathBuf::from("/home/pi/.Xauthority"))
}

/// Returns the default settling delay in milliseconds (2000).
pub(super) fn default_settle_delay_ms() -> u64 {
    2000
}

/// Returns the default `LoggingConfig`.
///
/// Used by `RestoreConfig` if the `logging` section is missing.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None // No log file by default
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}
