//! Configuration management for the taskbar restorer.
//!
//! - [`types`]: the configuration structs, [`RestoreConfig`], [`PanelConfig`],
//!   and [`LoggingConfig`].
//! - [`defaults`]: default values used when the configuration file is missing
//!   or incomplete.
//! - [`loader`]: [`ConfigLoader`], which reads `config.toml` from the
//!   application configuration directory, applies defaults, and validates.
//!
//! A missing configuration file is not an error: the restorer is a
//! best-effort helper usually run from an unattended startup hook, so it
//! falls back to its built-in defaults.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, PanelConfig, RestoreConfig};
