// taskbar-restore entry point: load config, set up logging, make one
// best-effort launch attempt, and exit normally whatever happened.

use taskbar_restore::config::{ConfigLoader, RestoreConfig};
use taskbar_restore::logging::{init_logging, init_minimal_logging};
use taskbar_restore::restore::restore_taskbar;
use tracing::{error, info};

fn main() {
    let config = load_config();

    match restore_taskbar(&config.panel) {
        Ok(panel) => {
            info!(
                "{} launched with PID: {}",
                config.panel.executable.display(),
                panel.pid
            );
        }
        Err(e) => {
            // Best effort: report and exit normally so an unattended
            // startup hook never sees a failure.
            error!("{}", e);
        }
    }
}

/// Loads the configuration and initializes logging.
///
/// Both steps follow the helper's best-effort policy: a configuration error
/// falls back to the built-in defaults, and a logging setup error falls back
/// to the minimal stderr logger. Neither aborts the launch attempt.
fn load_config() -> RestoreConfig {
    match ConfigLoader::load() {
        Ok(config) => {
            if let Err(e) = init_logging(&config.logging) {
                init_minimal_logging();
                error!("{}", e);
            }
            config
        }
        Err(e) => {
            init_minimal_logging();
            error!("Failed to load configuration, using defaults: {}", e);
            RestoreConfig::default()
        }
    }
}
