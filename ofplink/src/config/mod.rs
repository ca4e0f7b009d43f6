//! Configuration for the flight-plan sync and the `ofplink` CLI.
//!
//! - [`SyncConfig`] - what the sync itself needs (the registry name prefix)
//! - [`ConfigFile`] - the user's `~/.ofplink/config.ini`, covering the
//!   registry location, poll interval and log file
//!
//! ```
//! use ofplink::config::{ConfigFile, SyncConfig};
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.sync_config(), SyncConfig::default());
//! assert_eq!(config.poll.interval_ms, 1000);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod sync;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, PollSettings, RegistrySettings};
pub use sync::SyncConfig;
