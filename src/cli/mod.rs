//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::{CliArgs, CliCommand};
pub use profile::{
    log_base_dir_source, normalize_profile, resolve, resolve_base_dir, resolve_base_dir_from,
    BaseDirSource, CredentialKey, EnvironmentPolicy, Invocation, OutputMode, AWS_HOME_ENV,
    DEFAULT_FILE_NAME, DEFAULT_PROFILE,
};
