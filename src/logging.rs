//! Tracing configuration and log routing.
//!
//! The pipeline logs to stdout using a compact formatter and appends
//! per-file errors to a log file. A non-blocking writer keeps logging off
//! the worker threads' critical path.

use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Configure tracing subscribers for stdout plus the append-only error log.
///
/// - Respects `RUST_LOG` for filtering (defaults to `info`).
/// - The file layer appends timestamped lines to `log_file`; the file is
///   created on first use and never rotated.
/// - A global guard keeps the non-blocking writer alive for the process
///   lifetime.
pub fn init(log_file: &Path) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(false).compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    if let Some(writer) = configure_file_writer(log_file) {
        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_target(false)
            .with_ansi(false)
            .compact();

        registry.with(file_layer).init();
    } else {
        registry.init();
    }
}

/// Build a non-blocking writer appending to the error log.
///
/// Returns `None` when the file cannot be opened; the pipeline then runs
/// with stdout logging only.
fn configure_file_writer(log_file: &Path) -> Option<NonBlocking> {
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let _ = LOG_GUARD.set(guard);
            Some(non_blocking)
        }
        Err(err) => {
            eprintln!("Failed to open log file {}: {err}", log_file.display());
            None
        }
    }
}
