//! CLI argument definitions and `Invocation` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::{
    normalize_profile, resolve, resolve_base_dir, CredentialKey, EnvironmentPolicy, Invocation,
    OutputMode, DEFAULT_FILE_NAME, DEFAULT_PROFILE,
};

/// Optional sub-actions. Without one, every key is printed as an `export` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Print only the access key id of the profile.
    #[command(name = "access-key")]
    AccessKey,
    /// Print only the secret access key of the profile.
    #[command(name = "secret-key")]
    SecretKey,
}

impl CliCommand {
    pub const fn key(&self) -> CredentialKey {
        match self {
            CliCommand::AccessKey => CredentialKey::AccessKeyId,
            CliCommand::SecretKey => CredentialKey::SecretAccessKey,
        }
    }
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aws-env",
    author,
    version,
    about = "Extract AWS access and secret keys from a credentials profile",
    long_about = None,
    after_help = "Hint: run `eval \"$(aws-env --profile <NAME>)\"` to load a profile into the current shell."
)]
pub struct CliArgs {
    /// Display diagnostic output on stderr.
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,
    /// Credentials file name, relative to the base directory.
    #[arg(short = 'f', long = "file", global = true, default_value = DEFAULT_FILE_NAME)]
    pub file: String,
    /// Profile to extract from the credentials file.
    #[arg(short = 'p', long = "profile", global = true, default_value = DEFAULT_PROFILE)]
    pub profile: String,
    /// Base directory holding the credentials file (overrides AWS_HOME).
    #[arg(long = "aws-home", global = true)]
    pub aws_home: Option<PathBuf>,
    /// Also set the exported variables in this process's environment.
    #[arg(long = "set-env", global = true, default_value_t = false)]
    pub set_env: bool,
    /// Optional single-value sub-action.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl CliArgs {
    /// Build an `Invocation` from CLI args and environment variables.
    pub fn into_invocation(self) -> Result<Invocation> {
        let (base_dir, base_dir_source) = resolve_base_dir(self.aws_home)?;
        let credentials_path = resolve(&base_dir, &self.file)?;
        let profile = normalize_profile(&self.profile)?;

        Ok(Invocation {
            base_dir,
            credentials_path,
            base_dir_source,
            profile,
            mode: select_mode(self.command, self.set_env),
        })
    }
}

fn select_mode(command: Option<CliCommand>, set_env: bool) -> OutputMode {
    match command {
        Some(command) => OutputMode::SingleValue(command.key()),
        None if set_env => OutputMode::Export(EnvironmentPolicy::PrintAndSet),
        None => OutputMode::Export(EnvironmentPolicy::PrintOnly),
    }
}
