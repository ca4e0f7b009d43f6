//! `tracing` backend for the [`Logger`] trait.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger that forwards to the `tracing` macros.
///
/// Simulator plugins share one log file with every other plugin, so hosts
/// usually tag their lines. [`TracingLogger::with_prefix`] prepends a fixed
/// tag to each message; the subscriber (see [`crate::logging`]) decides the
/// rest of the formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    prefix: &'static str,
}

impl TracingLogger {
    /// Create a tracing logger without a message prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracing logger that prepends `prefix` to every message.
    pub fn with_prefix(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// The prefix prepended to each message (empty if none).
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        let prefix = self.prefix;
        match level {
            LogLevel::Trace => tracing::trace!("{}{}", prefix, args),
            LogLevel::Debug => tracing::debug!("{}{}", prefix, args),
            LogLevel::Info => tracing::info!("{}{}", prefix, args),
            LogLevel::Warn => tracing::warn!("{}{}", prefix, args),
            LogLevel::Error => tracing::error!("{}{}", prefix, args),
        }
    }
}
