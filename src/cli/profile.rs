//! Invocation options and base-directory resolution.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::lib::{
    errors::ConfigurationError,
    paths::{is_blank, join_credentials_path},
    telemetry::Diagnostics,
};

pub const DEFAULT_FILE_NAME: &str = "credentials";
pub const DEFAULT_PROFILE: &str = "default";
pub const AWS_HOME_ENV: &str = "AWS_HOME";

/// Where the base directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDirSource {
    Flag,
    Env,
}

impl BaseDirSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BaseDirSource::Flag => "flag",
            BaseDirSource::Env => "env",
        }
    }
}

/// Whether export mode also writes into this process's environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvironmentPolicy {
    /// Print `export` lines only.
    #[default]
    PrintOnly,
    /// Print `export` lines and call `env::set_var` for each pair.
    PrintAndSet,
}

/// Well-known keys that single-value mode can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKey {
    AccessKeyId,
    SecretAccessKey,
}

impl CredentialKey {
    /// Key name as it appears in the credentials file.
    pub const fn file_key(&self) -> &'static str {
        match self {
            CredentialKey::AccessKeyId => "aws_access_key_id",
            CredentialKey::SecretAccessKey => "aws_secret_access_key",
        }
    }
}

/// What to render once the record is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Export(EnvironmentPolicy),
    SingleValue(CredentialKey),
}

/// Fully resolved options for one run.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub base_dir: PathBuf,
    pub credentials_path: PathBuf,
    pub base_dir_source: BaseDirSource,
    pub profile: String,
    pub mode: OutputMode,
}

/// Resolve the base directory in the order: CLI override → `AWS_HOME`.
pub fn resolve_base_dir(
    override_dir: Option<PathBuf>,
) -> Result<(PathBuf, BaseDirSource), ConfigurationError> {
    resolve_base_dir_from(override_dir.map(OsString::from), env::var_os(AWS_HOME_ENV))
}

/// Resolve the base directory from explicit values (testable helper).
///
/// A blank value counts as unset, so an empty `--aws-home ""` falls through
/// to the environment and an empty `AWS_HOME` is a configuration error.
pub fn resolve_base_dir_from(
    flag: Option<OsString>,
    env_value: Option<OsString>,
) -> Result<(PathBuf, BaseDirSource), ConfigurationError> {
    if let Some(dir) = flag.filter(|v| !is_blank(v)) {
        return Ok((PathBuf::from(dir), BaseDirSource::Flag));
    }

    if let Some(dir) = env_value.filter(|v| !is_blank(v)) {
        return Ok((PathBuf::from(dir), BaseDirSource::Env));
    }

    Err(ConfigurationError::MissingBaseDirectory { env: AWS_HOME_ENV })
}

/// Join the base directory and file name into the credentials path.
///
/// Fails before any file I/O when `base_dir` is empty.
pub fn resolve(base_dir: &Path, file_name: &str) -> Result<PathBuf, ConfigurationError> {
    if is_blank(base_dir.as_os_str()) {
        return Err(ConfigurationError::MissingBaseDirectory { env: AWS_HOME_ENV });
    }
    Ok(join_credentials_path(base_dir, file_name))
}

/// Trim and validate the profile name.
pub fn normalize_profile(raw: &str) -> Result<String, ConfigurationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigurationError::EmptyProfile);
    }
    Ok(trimmed.to_string())
}

pub fn log_base_dir_source(diagnostics: &Diagnostics, base_dir: &Path, source: BaseDirSource) {
    diagnostics.scope(|| match source {
        BaseDirSource::Flag => info!(
            target: "aws_env::config",
            base_dir = %base_dir.display(),
            source = source.as_str(),
            "Using base directory from --aws-home"
        ),
        BaseDirSource::Env => debug!(
            target: "aws_env::config",
            base_dir = %base_dir.display(),
            source = source.as_str(),
            env = AWS_HOME_ENV,
            "--aws-home not set; using environment variable"
        ),
    });
}
