//! `ofplink show` - one poll, one line.

use clap::Args;

use crate::error::CliError;
use crate::runner::CliRunner;

use super::RegistryArgs;

/// Arguments for `ofplink show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Also list every flight plan field
    #[arg(long)]
    pub fields: bool,
}

/// Print the departure line of the currently published flight plan.
pub fn run(runner: &CliRunner, args: ShowArgs) -> Result<(), CliError> {
    runner.log_startup("show");
    let (mut sync, target) = runner.create_sync(&args.registry)?;

    let Some(snapshot) = sync.load_if_newer() else {
        if sync.is_unavailable() {
            return Err(target.unavailable());
        }
        println!("No flight plan published yet");
        return Ok(());
    };

    println!("{}", snapshot.render_departure_line());
    if args.fields {
        println!();
        for (entry, value) in snapshot.fields() {
            println!("  {:<16} {}", entry, value);
        }
    }

    Ok(())
}
