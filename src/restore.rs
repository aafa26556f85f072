//! The taskbar restore operation.
//!
//! A single linear sequence: announce, wait out the settling delay, build an
//! explicit environment overlay, and spawn the panel executable exactly once.
//! The child is fire-and-forget: it is neither awaited nor monitored, and the
//! restorer may exit while the panel keeps running.

use crate::config::PanelConfig;
use crate::error::RestoreError;
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::process::Command;
use std::thread;
use tracing::info;

/// A successfully launched panel process.
///
/// Only the OS process id is retained; the child handle is dropped without
/// being waited on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchedPanel {
    /// Process id of the spawned panel.
    pub pid: u32,
}

/// Builds the environment for the panel process.
///
/// Snapshots the ambient process environment and overrides exactly two
/// entries, `DISPLAY` and `XAUTHORITY`, with the configured values. The
/// overlay is an explicit, call-scoped value handed to the spawn call; no
/// process-global environment state is mutated.
pub fn panel_environment(config: &PanelConfig) -> HashMap<OsString, OsString> {
    let mut environment: HashMap<OsString, OsString> = env::vars_os().collect();
    environment.insert(
        OsString::from("DISPLAY"),
        OsString::from(config.display.as_str()),
    );
    environment.insert(
        OsString::from("XAUTHORITY"),
        config.xauthority.clone().into_os_string(),
    );
    environment
}

/// Performs one best-effort launch of the panel executable.
///
/// Sleeps for the configured settling delay (unconditional and
/// non-cancellable; zero skips straight through), builds the environment
/// overlay, and spawns the executable with inherited standard streams and no
/// arguments. Exactly one spawn attempt is made per call; there is no retry
/// and the child is not waited on.
///
/// Returns a [`LaunchedPanel`] carrying the child's pid, or
/// [`RestoreError::Launch`] when the spawn fails for any reason. The caller
/// decides how to report the outcome.
pub fn restore_taskbar(config: &PanelConfig) -> Result<LaunchedPanel, RestoreError> {
    info!("Attempting to restore taskbar...");

    // Let transient session state (e.g., a compositor still coming up)
    // stabilize before the launch is attempted.
    thread::sleep(config.settle_delay());

    let environment = panel_environment(config);

    info!("Environment for taskbar restoration:");
    info!("DISPLAY = {}", config.display);
    info!("XAUTHORITY = {}", config.xauthority.display());

    let child = Command::new(&config.executable)
        .env_clear()
        .envs(&environment)
        .spawn()
        .map_err(|source| RestoreError::Launch {
            executable: config.executable.clone(),
            source,
        })?;

    Ok(LaunchedPanel { pid: child.id() })
}
