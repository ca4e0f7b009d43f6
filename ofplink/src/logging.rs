//! Subscriber setup for hosts that let `ofplink` own the `tracing` output.
//!
//! - Writes to a log file that is cleared at session start
//! - Optionally mirrors to stderr, keeping stdout free for departure lines
//! - Level from `RUST_LOG`, `info` by default, `debug` when asked for
//!
//! Plugins embedded in a simulator usually install their own subscriber and
//! only use [`crate::log::TracingLogger`].

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping it flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging.
///
/// Creates `log_dir` if needed, truncates `log_dir/log_file`, and installs a
/// global subscriber writing to it (and to stderr when `stderr_enabled`).
/// With `debug` set the filter is `debug` regardless of `RUST_LOG`, which
/// makes the per-field dumps of every snapshot visible.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// cleared.
pub fn init_logging(
    log_dir: &Path,
    log_file: &str,
    stderr_enabled: bool,
    debug: bool,
) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(log_dir.join(log_file), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(false);

    let stderr_layer = stderr_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
    });

    let env_filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Split a log file path into the directory and file name `init_logging` takes.
///
/// A bare file name logs into the current directory; a path without a file
/// name falls back to [`crate::config::DEFAULT_LOG_FILE`].
pub fn split_log_path(path: &Path) -> (&Path, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| crate::config::DEFAULT_LOG_FILE.to_string());
    (dir, file)
}
