use std::process::ExitCode;

use clap::Parser;
use tscat::cli::{Arguments, ExitStatus, init_tracing};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match tscat::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
