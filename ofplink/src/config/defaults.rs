//! Default values for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::{ConfigFile, LoggingSettings, PollSettings, RegistrySettings};

/// Registry name prefix used by the flight-plan producer.
pub const DEFAULT_PREFIX: &str = "sbh/";

/// Poll interval of `ofplink watch`, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Lower bound for the poll interval; the sync is cheap but the CLI shouldn't spin.
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

/// Log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "ofplink.log";

/// Default log file path (`~/.ofplink/ofplink.log`).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            registry: RegistrySettings {
                root: None,
                prefix: DEFAULT_PREFIX.to_string(),
            },
            poll: PollSettings {
                interval_ms: DEFAULT_POLL_INTERVAL_MS,
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
