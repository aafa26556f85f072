//! Filesystem utilities.

use crate::error::RestoreError;
use std::fs;
use std::path::Path;

/// Ensures that a directory exists at the given path.
///
/// If the path does not exist it is created, including any necessary parent
/// directories. If the path exists but is not a directory, an error is
/// returned.
pub fn ensure_dir_exists(path: &Path) -> Result<(), RestoreError> {
    if path.exists() {
        if !path.is_dir() {
            Err(RestoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        } else {
            Ok(())
        }
    } else {
        fs::create_dir_all(path).map_err(|e| RestoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}
