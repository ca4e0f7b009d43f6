//! CLI error handling with user-friendly messages.
//!
//! Centralizes error formatting and exit codes for all commands.

use std::fmt;
use std::path::PathBuf;
use std::process;

use ofplink::config::ConfigFileError;
use ofplink::registry::RegistryError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Invalid or incomplete configuration
    Config(String),
    /// Failed to load or save the config file
    ConfigFile(ConfigFileError),
    /// Failed to open the registry directory
    Registry(RegistryError),
    /// The registry has no producer entries
    ProducerUnavailable { root: PathBuf, prefix: String },
}

impl CliError {
    /// Exit the process with an error message and code 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Set the registry directory with --registry <DIR>, or add it to");
                eprintln!("the [registry] section of the config file ('ofplink init').");
            }
            CliError::ProducerUnavailable { root, prefix } => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. The flight plan producer is not running or not exporting");
                eprintln!(
                    "  2. Wrong prefix: expected {} to exist",
                    root.join(format!("{}stale", prefix)).display()
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Registry(e) => write!(f, "{}", e),
            CliError::ProducerUnavailable { root, prefix } => write!(
                f,
                "No flight plan producer found in {} (prefix '{}')",
                root.display(),
                prefix
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Registry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<RegistryError> for CliError {
    fn from(e: RegistryError) -> Self {
        CliError::Registry(e)
    }
}
