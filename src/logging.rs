//! Logging configuration using tracing with file appender.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize tracing with file output.
///
/// Returns a guard that must be held for the duration of the program so
/// buffered log lines are flushed on exit. The filter honors the given
/// level for this crate only; dependencies stay quiet.
pub fn init_logging(log_path: &Path, level: &str) -> WorkerGuard {
    let parent = log_path.parent().unwrap_or(Path::new("."));
    let filename = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("huedial.log"));

    let file_appender = tracing_appender::rolling::never(parent, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_new(format!("huedial={level}")).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    guard
}
