//! CLI runner for common setup.
//!
//! Loads the config file, initializes logging and builds the sync so each
//! command only deals with its own output.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use ofplink::config::{config_file_path, ConfigFile, SyncConfig};
use ofplink::flight_plan::FlightPlanSync;
use ofplink::log::TracingLogger;
use ofplink::logging::{init_logging, split_log_path, LoggingGuard};
use ofplink::registry::DirectoryRegistry;

use crate::commands::RegistryArgs;
use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Keeps the log writer alive while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load the config (defaults if the file is missing) and start logging.
    ///
    /// Log lines go to the configured file, and also to stderr in debug mode.
    pub fn new(config_path: Option<&Path>, debug: bool) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load()?,
        };

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(log_dir, &log_file, debug, debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("ofplink v{}", ofplink::VERSION);
        info!("ofplink CLI: {} command", command);
    }

    /// Build a sync over the registry selected by `args` and the config.
    pub fn create_sync(
        &self,
        args: &RegistryArgs,
    ) -> Result<(FlightPlanSync<DirectoryRegistry>, RegistryTarget), CliError> {
        let target = RegistryTarget::resolve(args, &self.config)?;
        let registry = DirectoryRegistry::open(&target.root)?;
        info!(root = %target.root.display(), prefix = %target.prefix, "Opened registry");

        let config = SyncConfig::new().with_prefix(target.prefix.clone());
        let sync = FlightPlanSync::with_config(registry, &config, Arc::new(TracingLogger::new()));
        Ok((sync, target))
    }
}

/// Registry location after merging command-line arguments over the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryTarget {
    pub root: PathBuf,
    pub prefix: String,
}

impl RegistryTarget {
    /// Command-line values win; the config fills in the rest.
    pub fn resolve(args: &RegistryArgs, config: &ConfigFile) -> Result<Self, CliError> {
        let root = args
            .registry
            .clone()
            .or_else(|| config.registry.root.clone())
            .ok_or_else(|| {
                CliError::Config(format!(
                    "no registry directory configured in {}",
                    config_file_path().display()
                ))
            })?;
        let prefix = args
            .prefix
            .clone()
            .unwrap_or_else(|| config.registry.prefix.clone());

        Ok(Self { root, prefix })
    }

    /// Error reported when the producer's entries are missing.
    pub fn unavailable(&self) -> CliError {
        CliError::ProducerUnavailable {
            root: self.root.clone(),
            prefix: self.prefix.clone(),
        }
    }
}
