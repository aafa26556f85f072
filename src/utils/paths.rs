//! XDG base directory and application-specific path resolution.
//!
//! Relies on the `directories-next` crate. All functions return
//! `Result<PathBuf, RestoreError>`, yielding
//! [`ConfigError::DirectoryUnavailable`](crate::error::ConfigError::DirectoryUnavailable)
//! when a required directory cannot be determined (e.g., no HOME directory).

use crate::error::{ConfigError, RestoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "TaskbarRestore";
const APPLICATION: &str = "taskbar-restore";

/// Returns the application-specific configuration directory.
///
/// On Linux this typically resolves to `~/.config/taskbar-restore`.
pub fn get_app_config_dir() -> Result<PathBuf, RestoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            RestoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "App Config".to_string(),
            })
        })
}

/// Returns the base directory for user-specific state files.
///
/// On Linux this is `$XDG_STATE_HOME`, falling back to `~/.local/state` when
/// the variable is unset. On other platforms the local data directory is used
/// since `directories-next` has no generic state directory.
pub fn get_state_base_dir() -> Result<PathBuf, RestoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match std::env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| {
            RestoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "State Base".to_string(),
            })
        })
}

/// Returns the application-specific state directory, used for resolving
/// relative log file paths.
pub fn get_app_state_dir() -> Result<PathBuf, RestoreError> {
    get_state_base_dir().map(|base_state| base_state.join(ORGANIZATION).join(APPLICATION))
}
