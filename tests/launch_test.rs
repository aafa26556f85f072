use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use taskbar_restore::config::{ConfigLoader, PanelConfig};
use taskbar_restore::error::RestoreError;
use taskbar_restore::restore::{restore_taskbar, LaunchedPanel};

fn test_panel_config(executable: &str) -> PanelConfig {
    PanelConfig {
        executable: PathBuf::from(executable),
        display: ":9".to_string(),
        xauthority: PathBuf::from("/tmp/.Xauthority"),
        settle_delay_ms: 0,
    }
}

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .try_init();
}

/// Shared buffer used as a `tracing` writer so tests can assert on the
/// emitted diagnostic lines.
#[derive(Clone)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs one launch attempt under a capturing subscriber, reporting the
/// outcome the way the binary does, and returns the captured output
/// alongside the result.
fn capture_launch_output(config: &PanelConfig) -> (String, Result<LaunchedPanel, RestoreError>) {
    let output = CapturedOutput::new();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        let result = restore_taskbar(config);
        match &result {
            Ok(panel) => tracing::info!(
                "{} launched with PID: {}",
                config.executable.display(),
                panel.pid
            ),
            Err(e) => tracing::error!("{}", e),
        }
        result
    });

    (output.contents(), result)
}

/// Asserts that `haystack` contains each needle, in the given order.
fn assert_lines_in_order(haystack: &str, needles: &[&str]) {
    let mut last_pos = 0;
    for needle in needles {
        match haystack[last_pos..].find(needle) {
            Some(offset) => last_pos += offset + needle.len(),
            None => panic!(
                "Expected {:?} (in order) in captured output:\n{}",
                needle, haystack
            ),
        }
    }
}

#[test]
fn launches_stub_panel_and_reports_pid() {
    init_test_tracing();

    let config = test_panel_config("/bin/true");
    let launched = restore_taskbar(&config).expect("Spawning the stub panel should succeed");

    tracing::info!("Stub panel launched with PID: {}", launched.pid);
    assert!(launched.pid > 0);
}

#[test]
fn missing_executable_reports_launch_error_without_panicking() {
    init_test_tracing();

    let config = test_panel_config("/nonexistent/taskbar-restore-integration-stub");
    let err = restore_taskbar(&config).expect_err("Spawning a missing binary should fail");

    assert!(matches!(err, RestoreError::Launch { .. }));
    assert!(format!("{}", err).contains("Error launching"));
}

#[test]
fn successful_launch_emits_banner_env_and_pid_lines_in_order() {
    let (output, result) = capture_launch_output(&test_panel_config("/bin/true"));

    let launched = result.expect("Spawning the stub panel should succeed");
    assert_lines_in_order(
        &output,
        &[
            "Attempting to restore taskbar...",
            "DISPLAY = :9",
            "XAUTHORITY = /tmp/.Xauthority",
            "launched with PID:",
        ],
    );
    assert!(output.contains(&format!("launched with PID: {}", launched.pid)));
    assert!(!output.contains("Error launching"));
}

#[test]
fn failed_launch_emits_banner_env_and_error_lines_in_order() {
    let (output, result) =
        capture_launch_output(&test_panel_config("/nonexistent/taskbar-restore-integration-stub"));

    assert!(result.is_err());
    assert_lines_in_order(
        &output,
        &[
            "Attempting to restore taskbar...",
            "DISPLAY = :9",
            "XAUTHORITY = /tmp/.Xauthority",
            "Error launching /nonexistent/taskbar-restore-integration-stub",
        ],
    );
    assert!(!output.contains("launched with PID:"));
}

#[test]
fn config_file_drives_the_launch_attempt() {
    init_test_tracing();

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[panel]
executable = "/bin/true"
display = ":9"
xauthority = "/tmp/.Xauthority"
settle_delay_ms = 0
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&config_path).expect("Config should load");
    assert_eq!(config.panel.executable, PathBuf::from("/bin/true"));

    let launched =
        restore_taskbar(&config.panel).expect("Spawning the configured stub should succeed");
    assert!(launched.pid > 0);
}
