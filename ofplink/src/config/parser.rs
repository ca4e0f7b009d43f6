//! INI parsing: `Ini` -> `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::MIN_POLL_INTERVAL_MS;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`, overlaying the defaults.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [registry] section
    if let Some(section) = ini.section(Some("registry")) {
        if let Some(v) = section.get("root") {
            let v = v.trim();
            if !v.is_empty() {
                config.registry.root = Some(expand_tilde(v));
            }
        }
        if let Some(v) = section.get("prefix") {
            let v = v.trim();
            if v.chars().any(char::is_whitespace) {
                return Err(ConfigFileError::InvalidValue {
                    section: "registry".to_string(),
                    key: "prefix".to_string(),
                    value: v.to_string(),
                    reason: "must not contain whitespace".to_string(),
                });
            }
            config.registry.prefix = v.to_string();
        }
    }

    // [poll] section
    if let Some(section) = ini.section(Some("poll")) {
        if let Some(v) = section.get("interval_ms") {
            let interval: u64 = v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "poll".to_string(),
                key: "interval_ms".to_string(),
                value: v.to_string(),
                reason: "must be a positive integer".to_string(),
            })?;
            if interval < MIN_POLL_INTERVAL_MS {
                return Err(ConfigFileError::InvalidValue {
                    section: "poll".to_string(),
                    key: "interval_ms".to_string(),
                    value: v.to_string(),
                    reason: format!("must be at least {}", MIN_POLL_INTERVAL_MS),
                });
            }
            config.poll.interval_ms = interval;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
