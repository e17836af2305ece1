//! Load an INI credentials file and pull out one profile.
use std::path::Path;

use ini::{Ini, ParseOption};
use tracing::{debug, error, info};

use crate::lib::{errors::ExtractError, telemetry::Diagnostics};

pub mod record;

pub use record::CredentialRecord;

/// Values are taken as written: no backslash unescaping, no inline comments.
fn parse_options() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Read the file at `path` and return every pair under section `[profile]`.
///
/// A missing, unreadable or malformed file is [`ExtractError::Load`]; a file
/// without the section is [`ExtractError::ProfileNotFound`].
pub fn extract(
    path: &Path,
    profile: &str,
    diagnostics: &Diagnostics,
) -> Result<CredentialRecord, ExtractError> {
    diagnostics.scope(|| {
        info!(
            target: "aws_env::credentials",
            path = %path.display(),
            "Inspecting credentials file"
        );
        info!(
            target: "aws_env::credentials",
            profile = profile,
            "Extracting profile"
        );
    });

    let document = Ini::load_from_file_opt(path, parse_options()).map_err(|err| {
        let error = ExtractError::from_load_error(path.to_path_buf(), err);
        diagnostics.scope(|| {
            error!(
                target: "aws_env::credentials",
                path = %path.display(),
                reason = %error,
                "Failed to load credentials file"
            )
        });
        error
    })?;

    let record = select_profile(&document, profile).ok_or_else(|| {
        diagnostics.scope(|| {
            error!(
                target: "aws_env::credentials",
                path = %path.display(),
                profile = profile,
                "Profile not found"
            )
        });
        ExtractError::ProfileNotFound {
            profile: profile.to_string(),
            path: path.to_path_buf(),
        }
    })?;

    diagnostics.scope(|| {
        debug!(
            target: "aws_env::credentials",
            profile = profile,
            keys = record.len(),
            "Profile extracted"
        )
    });
    Ok(record)
}

/// Copy section `[profile]` out of a parsed document, if present.
pub fn select_profile(document: &Ini, profile: &str) -> Option<CredentialRecord> {
    let section = document.section(Some(profile))?;
    let mut record = CredentialRecord::new(profile);
    for (key, value) in section.iter() {
        record.insert(key, value);
    }
    Some(record)
}
