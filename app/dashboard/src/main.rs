//! FILENAME: app/dashboard/src/main.rs
// PURPOSE: Command-line entry point with unified logging.
// FORMAT: seq|level|category|message

use clap::Parser;
use dashboard_lib::cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match dashboard_lib::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            dashboard_lib::log_error!("MAIN", "{}", e);
            ExitCode::FAILURE
        }
    }
}
