//! machinekey
//!
//! Derives the license key bound to this machine's SMBIOS identifiers and
//! verifies configured keys against it.
//!
//! Usage:
//!   machinekey key                 # key to issue for this machine
//!   machinekey check               # exit 1 unless the configured key matches

use std::process::ExitCode;

use clap::Parser;
use machinekey_cli::{run, Args, Command};
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match run(&args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if matches!(args.command, Command::Check { .. }) {
                debug!("{e:#}");
                error!("invalid license key");
            } else {
                error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
