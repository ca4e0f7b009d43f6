//! Settings structs, one per `[section]` of the INI file.

use std::path::PathBuf;

use super::sync::SyncConfig;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub registry: RegistrySettings,
    pub poll: PollSettings,
    pub logging: LoggingSettings,
}

/// `[registry]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    /// Directory holding one file per registry entry. `None` until configured.
    pub root: Option<PathBuf>,
    /// Prefix prepended to every entry name, e.g. `sbh/`.
    pub prefix: String,
}

/// `[poll]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    pub interval_ms: u64,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub file: PathBuf,
}

impl ConfigFile {
    /// The part of the configuration the sync consumes.
    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig::new().with_prefix(self.registry.prefix.clone())
    }
}
