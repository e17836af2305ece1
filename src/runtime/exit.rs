use std::process::ExitCode;

use anyhow::Error;

/// Bundles a fatal error message with the exit code reported for it.
#[derive(Debug)]
pub struct CommandExit {
    message: String,
    exit_code: ExitCode,
}

impl CommandExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("aws-env: {err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Print the message to stderr and hand back the exit code.
    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}
