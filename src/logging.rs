//! Logging setup for the taskbar restorer.
//!
//! Built on the `tracing` ecosystem: a console layer on stdout with a
//! configurable format, plus an optional daily-rolling file layer via
//! `tracing-appender`.

use crate::config::LoggingConfig;
use crate::error::{LoggingError, RestoreError};
use crate::utils;

use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for early startup before the configuration is loaded, or as a
/// fallback when full logging initialization fails. Filters via `RUST_LOG`,
/// defaulting to "info". Errors (e.g., a global logger already set) are
/// ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Holds the `WorkerGuard` for the file logger so buffered log lines are
/// flushed when the process exits.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Creates a file logging layer with a daily-rolling appender.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), RestoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            utils::fs::ensure_dir_exists(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("taskbar-restore.log")),
    );

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    match format.to_lowercase().as_str() {
        "json" => {
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
        _ => {
            let layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
    }
}

/// Initializes the global logging system from the provided [`LoggingConfig`].
///
/// Sets a console layer writing to stdout and, when `file_path` is
/// configured, a file layer. Diagnostic output from the restore operation
/// therefore lands on standard output by default.
///
/// # Errors
///
/// Returns [`RestoreError::Logging`] if the configured level is invalid or
/// if a global subscriber has already been set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), RestoreError> {
    let level_filter_str = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE.to_string(),
        "debug" => Level::DEBUG.to_string(),
        "info" => Level::INFO.to_string(),
        "warn" => Level::WARN.to_string(),
        "error" => Level::ERROR.to_string(),
        invalid_level => {
            return Err(RestoreError::Logging(LoggingError::InitializationFailure(
                format!("Invalid log level in config: {}", invalid_level),
            )));
        }
    };

    let stdout_filter = EnvFilter::new(level_filter_str.clone());
    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    let mut new_file_guard: Option<WorkerGuard> = None;
    let file_layer_opt: Option<Box<dyn Layer<Registry> + Send + Sync + 'static>> =
        if let Some(log_path) = &config.file_path {
            let file_filter = EnvFilter::new(level_filter_str);
            let (base_file_layer, guard) = create_file_layer(log_path, &config.format)?;
            new_file_guard = Some(guard);
            Some(base_file_layer.with_filter(file_filter).boxed())
        } else {
            None
        };

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = Vec::new();
    layers.push(stdout_layer);
    if let Some(file_layer) = file_layer_opt {
        layers.push(file_layer);
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut guard_slot) => {
            *guard_slot = new_file_guard;
        }
        Err(e) => {
            // Fallback to eprintln since tracing may not be functional here.
            eprintln!(
                "[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.",
                e
            );
        }
    }

    result.map_err(|e| {
        RestoreError::Logging(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        )))
    })
}
