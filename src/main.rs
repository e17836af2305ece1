//! Entry point for aws-env.
use std::{io, process::ExitCode};

use aws_env::{cli::CliArgs, runtime};
use clap::Parser;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match runtime::execute(args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}
