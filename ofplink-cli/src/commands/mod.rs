//! CLI command implementations.
//!
//! - [`init`] - write a default config file
//! - [`show`] - print the current departure line once
//! - [`watch`] - poll and print every new departure line

pub mod init;
pub mod show;
pub mod watch;

use std::path::PathBuf;

use clap::Args;

/// Registry selection shared by `show` and `watch`.
#[derive(Debug, Clone, Default, Args)]
pub struct RegistryArgs {
    /// Registry directory (overrides [registry] root)
    #[arg(long, value_name = "DIR")]
    pub registry: Option<PathBuf>,

    /// Entry name prefix (overrides [registry] prefix)
    #[arg(long)]
    pub prefix: Option<String>,
}
