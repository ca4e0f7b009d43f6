//! Error types for registry construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a registry.
///
/// Reading from a registry never fails; only opening one can.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry root does not exist or is not a directory.
    #[error("Registry root {0} is not a directory")]
    NotADirectory(PathBuf),

    /// The registry root could not be inspected.
    #[error("Failed to access registry root {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
