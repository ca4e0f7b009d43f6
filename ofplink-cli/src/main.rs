//! ofplink CLI - command-line interface
//!
//! Polls a directory-backed flight-plan registry and prints the departure
//! line the flight-plan producer's data renders to.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::init::InitArgs;
use commands::show::ShowArgs;
use commands::watch::WatchArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "ofplink")]
#[command(version, about = "Show the departure status of the published flight plan", long_about = None)]
struct Cli {
    /// Config file (default: ~/.ofplink/config.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging to stderr, including every fetched field
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init(InitArgs),
    /// Print the departure line of the current flight plan
    Show(ShowArgs),
    /// Print a departure line every time the flight plan changes
    Watch(WatchArgs),
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Init(args) => commands::init::run(config_path, args),
        Commands::Show(args) => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            commands::show::run(&runner, args)
        }
        Commands::Watch(args) => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            commands::watch::run(&runner, args)
        }
    }
}
