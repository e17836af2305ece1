use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while resolving where the credentials file lives.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Neither `--aws-home` nor the environment variable supplied a base directory.
    #[error(
        "Base directory is not configured: set the {env} environment variable or pass --aws-home <DIR>"
    )]
    MissingBaseDirectory { env: &'static str },
    /// Profile name was blank.
    #[error("Profile name must not be empty: pass --profile <NAME>")]
    EmptyProfile,
}

/// Failures while loading a credentials file and selecting a profile.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file is missing, unreadable or not valid INI.
    #[error("Failed to load credentials file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },
    /// The file loaded but has no section with the requested name.
    #[error("Profile [{profile}] was not found in {path}")]
    ProfileNotFound { profile: String, path: PathBuf },
}

impl ExtractError {
    /// Helper to wrap a parser failure as a load error.
    pub fn from_load_error(path: PathBuf, source: ini::Error) -> Self {
        Self::Load { path, source }
    }
}

/// Failures while rendering a credential record.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Single-value mode asked for a key the profile does not define.
    #[error("Profile [{profile}] has no `{key}` entry")]
    KeyNotFound { key: &'static str, profile: String },
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}
