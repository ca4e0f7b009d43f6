//! INI serialization: `ConfigFile` -> commented INI text.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to the commented INI string written to config.ini.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let root = config
        .registry
        .root
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[registry]
; Directory holding one file per registry entry (e.g. <root>/sbh/seqno)
; Required by 'ofplink show' and 'ofplink watch' unless --registry is given
root = {}
; Prefix of every entry name published by the flight plan producer
prefix = {}

[poll]
; Interval between polls in 'ofplink watch', in milliseconds (minimum: 50)
interval_ms = {}

[logging]
; Log file, cleared at the start of every session
file = {}
"#,
        root,
        config.registry.prefix,
        config.poll.interval_ms,
        path_to_string(&config.logging.file),
    )
}

/// Render a path, abbreviating the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
