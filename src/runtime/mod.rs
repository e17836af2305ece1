//! Command dispatch: resolve, extract, render.
mod exit;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    cli::{log_base_dir_source, CliArgs, Invocation},
    credentials,
    lib::telemetry::Diagnostics,
    output,
};

pub use exit::CommandExit;

/// Run one invocation from parsed arguments, writing results to `out`.
pub fn execute<W: Write>(args: CliArgs, out: &mut W) -> Result<(), CommandExit> {
    let diagnostics = Diagnostics::new(args.verbose);
    diagnostics.scope(|| {
        debug!(
            target: "aws_env::runtime",
            command = ?args.command,
            "Starting aws-env"
        )
    });

    let invocation = args.into_invocation().map_err(CommandExit::from_error)?;
    run_invocation(&invocation, out, &diagnostics).map_err(CommandExit::from_error)?;

    diagnostics.scope(|| debug!(target: "aws_env::runtime", "Finished aws-env"));
    Ok(())
}

/// Extract the profile and render it. Nothing is written to `out` unless extraction succeeds.
pub fn run_invocation<W: Write>(
    invocation: &Invocation,
    out: &mut W,
    diagnostics: &Diagnostics,
) -> Result<()> {
    log_base_dir_source(diagnostics, &invocation.base_dir, invocation.base_dir_source);

    let record = credentials::extract(
        &invocation.credentials_path,
        &invocation.profile,
        diagnostics,
    )?;

    output::render(&record, invocation.mode, out, diagnostics).with_context(|| {
        format!(
            "failed to print profile [{}] from {}",
            invocation.profile,
            invocation.credentials_path.display()
        )
    })
}
