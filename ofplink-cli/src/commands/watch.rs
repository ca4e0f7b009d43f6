//! `ofplink watch` - poll on a fixed interval and print changes.

use std::thread;
use std::time::Duration;

use clap::Args;
use tracing::info;

use ofplink::config::MIN_POLL_INTERVAL_MS;

use crate::error::CliError;
use crate::runner::CliRunner;

use super::RegistryArgs;

/// Arguments for `ofplink watch`.
#[derive(Debug, Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Poll interval in milliseconds (overrides [poll] interval_ms)
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Stop after this many departure lines (at least 1)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,
}

/// Poll the registry and print a departure line for every new snapshot.
///
/// Runs until `--count` lines were printed, or forever. Fails right away if
/// the producer is not present on the first poll.
pub fn run(runner: &CliRunner, args: WatchArgs) -> Result<(), CliError> {
    runner.log_startup("watch");
    let interval = poll_interval(args.interval_ms, runner.config().poll.interval_ms)?;
    let (mut sync, target) = runner.create_sync(&args.registry)?;
    info!("Polling every {:?}", interval);

    let mut printed = 0u64;
    loop {
        match sync.load_if_newer() {
            Some(snapshot) => {
                println!("{}", snapshot.render_departure_line());
                printed += 1;
                if args.count.is_some_and(|max| printed >= max) {
                    return Ok(());
                }
            }
            None if sync.is_unavailable() => return Err(target.unavailable()),
            None => {}
        }
        thread::sleep(interval);
    }
}

/// Pick the command-line interval over the configured one and validate it.
fn poll_interval(arg: Option<u64>, configured: u64) -> Result<Duration, CliError> {
    let ms = arg.unwrap_or(configured);
    if ms < MIN_POLL_INTERVAL_MS {
        return Err(CliError::Config(format!(
            "poll interval {}ms is below the minimum of {}ms",
            ms, MIN_POLL_INTERVAL_MS
        )));
    }
    Ok(Duration::from_millis(ms))
}
