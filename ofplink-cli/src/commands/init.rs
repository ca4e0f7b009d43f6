//! `ofplink init` - write a default config file.

use std::path::{Path, PathBuf};

use clap::Args;

use ofplink::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Arguments for `ofplink init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Registry directory to record in the new config
    #[arg(long, value_name = "DIR")]
    pub registry: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Create the config file at `path` (or the default location).
///
/// Runs without a `CliRunner`: there is no config to load yet.
pub fn run(path: Option<&Path>, args: InitArgs) -> Result<(), CliError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
    let config = write_default_config(&path, args.registry, args.force)?;

    println!("Wrote {}", path.display());
    match &config.registry.root {
        Some(root) => println!("  Registry: {}", root.display()),
        None => println!("  Registry: (not set, edit [registry] root)"),
    }
    Ok(())
}

fn write_default_config(
    path: &Path,
    registry: Option<PathBuf>,
    force: bool,
) -> Result<ConfigFile, CliError> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut config = ConfigFile::default();
    config.registry.root = registry;
    config.save_to(path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");

        write_default_config(&path, Some(PathBuf::from("/srv/sbh")), false).unwrap();
        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded.registry.root, Some(PathBuf::from("/srv/sbh")));
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[poll]\ninterval_ms = 500\n").unwrap();

        assert!(matches!(
            write_default_config(&path, None, false),
            Err(CliError::Config(_))
        ));
        assert_eq!(ConfigFile::load_from(&path).unwrap().poll.interval_ms, 500);

        write_default_config(&path, None, true).unwrap();
        assert_eq!(ConfigFile::load_from(&path).unwrap().poll.interval_ms, 1000);
    }
}
