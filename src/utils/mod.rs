//! General utilities for the taskbar restorer.
//!
//! # Submodules
//!
//! - [`fs`]: Filesystem helpers such as ensuring a directory exists.
//! - [`paths`]: Resolution of XDG-style application directories.

pub mod fs;
pub mod paths;

pub use fs::ensure_dir_exists;
