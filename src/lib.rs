//! # taskbar-restore
//!
//! A best-effort helper that relaunches the `wf-panel-pi` taskbar against a
//! specific X display. It waits for a short settling delay, builds an
//! explicit environment overlay (`DISPLAY` plus `XAUTHORITY`) on top of the
//! ambient process environment, spawns the panel executable with that
//! environment, and reports the outcome. Failures are logged, never
//! propagated: the helper is meant to run unattended from a startup hook,
//! with no consumer depending on its result.
//!
//! The core operation lives in [`restore`]; [`config`] provides TOML-based
//! configuration with defaults matching the original constants, and
//! [`logging`] sets up `tracing` output on stdout.
//!
//! ```rust,ignore
//! use taskbar_restore::config::ConfigLoader;
//! use taskbar_restore::restore::restore_taskbar;
//!
//! let config = ConfigLoader::load()?;
//! match restore_taskbar(&config.panel) {
//!     Ok(panel) => tracing::info!("Panel launched with PID: {}", panel.pid),
//!     Err(e) => tracing::error!("{}", e),
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod restore;
pub mod utils;

// Re-export key types for convenience
pub use config::{ConfigLoader, LoggingConfig, PanelConfig, RestoreConfig};
pub use error::{ConfigError, LoggingError, RestoreError};
pub use logging::{init_logging, init_minimal_logging};
pub use restore::{panel_environment, restore_taskbar, LaunchedPanel};
