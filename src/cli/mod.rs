use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Environment variable holding the log filter (e.g. `TSCAT_LOG=tscat=trace`).
pub const LOG_ENV: &str = "TSCAT_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result))
}

/// Install the stderr log subscriber.
///
/// `TSCAT_LOG` wins; otherwise `-v` enables debug logs and the default is `warn`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let ansi = std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .without_time()
        .with_target(false)
        .try_init();
}
