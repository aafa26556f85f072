//! Error types for the taskbar restorer.
//!
//! All fallible operations in this crate report through [`RestoreError`],
//! which wraps the more specific [`ConfigError`] and [`LoggingError`] types.
//! Error definitions use the `thiserror` crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the taskbar restorer.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// Errors related to configuration loading, parsing, or validation.
    /// Wraps a [`ConfigError`].
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur while setting up the logging system.
    /// Wraps a [`LoggingError`].
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// The panel executable could not be started.
    ///
    /// Every spawn failure (missing executable, permission denied, resource
    /// exhaustion) collapses into this one variant; the underlying
    /// `std::io::Error` carries the specific cause.
    #[error("Error launching {}: {source}", .executable.display())]
    Launch {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Filesystem errors from the directory helpers, such as creating a
    /// log directory. Includes the path involved and the source I/O error.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`RestoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An error occurred while parsing a configuration file (e.g., invalid TOML).
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A configuration value failed validation after successful parsing.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g., XDG config/state home) could not be
    /// determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging-related operations.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to initialize the logging system.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_restore_error_launch_display_contains_phrase() {
        let err = RestoreError::Launch {
            executable: PathBuf::from("/usr/bin/wf-panel-pi"),
            source: IoError::new(ErrorKind::NotFound, "No such file or directory"),
        };

        let rendered = format!("{}", err);
        assert!(rendered.contains("Error launching /usr/bin/wf-panel-pi"));
        assert!(rendered.contains("No such file or directory"));
        assert_eq!(
            err.source().unwrap().downcast_ref::<IoError>().unwrap().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_restore_error_config_variant() {
        let err = RestoreError::Config(ConfigError::ValidationError("Test validation".to_string()));

        assert_eq!(
            format!("{}", err),
            "Configuration Error: Configuration validation failed: Test validation"
        );
        match err.source().unwrap().downcast_ref::<ConfigError>() {
            Some(ConfigError::ValidationError(msg)) => assert_eq!(msg, "Test validation"),
            _ => panic!("Incorrect source for RestoreError::Config"),
        }
    }

    #[test]
    fn test_restore_error_filesystem_variant() {
        let path = PathBuf::from("/tmp/test.txt");
        let err = RestoreError::Filesystem {
            message: "File operation failed".to_string(),
            path: path.clone(),
            source: IoError::new(ErrorKind::PermissionDenied, "Permission denied"),
        };

        assert_eq!(
            format!("{}", err),
            format!("Filesystem Error: File operation failed (Path: {:?})", path)
        );
        assert_eq!(
            err.source().unwrap().downcast_ref::<IoError>().unwrap().kind(),
            ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_config_error_read_error_variant() {
        let path = PathBuf::from("/config/read_test.toml");
        let err = ConfigError::ReadError {
            path: path.clone(),
            source: IoError::new(ErrorKind::NotFound, "Config file not found"),
        };

        assert_eq!(
            format!("{}", err),
            format!("Failed to read configuration file from {:?}", path)
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_parse_error_variant() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("this is not valid toml").unwrap_err();
        let toml_err_display = format!("{}", toml_err);

        let err = ConfigError::ParseError(toml_err);
        assert_eq!(
            format!("{}", err),
            format!("Failed to parse configuration file: {}", toml_err_display)
        );
    }

    #[test]
    fn test_config_error_directory_unavailable_variant() {
        let err = ConfigError::DirectoryUnavailable {
            dir_type: "App Config".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Could not determine base directory for App Config"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_logging_error_initialization_failure_variant() {
        let err = LoggingError::InitializationFailure("subscriber already set".to_string());
        assert_eq!(
            format!("{}", err),
            "Failed to initialize logging: subscriber already set"
        );
        assert!(err.source().is_none());
    }
}
