//! Render a credential record as shell exports or a single raw value.
use std::{env, io::Write};

use tracing::{debug, info};

use crate::{
    cli::{CredentialKey, EnvironmentPolicy, OutputMode},
    credentials::CredentialRecord,
    lib::{errors::OutputError, telemetry::Diagnostics},
};

/// Write `record` to `out` in the requested mode.
pub fn render<W: Write>(
    record: &CredentialRecord,
    mode: OutputMode,
    out: &mut W,
    diagnostics: &Diagnostics,
) -> Result<(), OutputError> {
    match mode {
        OutputMode::Export(policy) => write_exports(record, policy, out, diagnostics),
        OutputMode::SingleValue(key) => write_single_value(record, key, out, diagnostics),
    }
}

/// Print one `export KEY="value"` line per pair, uppercasing the key.
pub fn write_exports<W: Write>(
    record: &CredentialRecord,
    policy: EnvironmentPolicy,
    out: &mut W,
    diagnostics: &Diagnostics,
) -> Result<(), OutputError> {
    for (key, value) in record.iter() {
        let name = export_name(key);
        writeln!(out, "export {name}=\"{}\"", escape_double_quoted(value))?;
        if policy == EnvironmentPolicy::PrintAndSet {
            env::set_var(&name, value);
        }
    }
    out.flush()?;

    let set_env = policy == EnvironmentPolicy::PrintAndSet;
    diagnostics.scope(|| {
        info!(
            target: "aws_env::output",
            profile = record.profile(),
            keys = record.len(),
            set_env,
            "Exported profile"
        )
    });
    Ok(())
}

/// Print the raw value of one well-known key.
pub fn write_single_value<W: Write>(
    record: &CredentialRecord,
    key: CredentialKey,
    out: &mut W,
    diagnostics: &Diagnostics,
) -> Result<(), OutputError> {
    let value = record
        .get_ignore_case(key.file_key())
        .ok_or_else(|| OutputError::KeyNotFound {
            key: key.file_key(),
            profile: record.profile().to_string(),
        })?;
    writeln!(out, "{value}")?;
    out.flush()?;

    diagnostics.scope(|| {
        debug!(
            target: "aws_env::output",
            profile = record.profile(),
            key = key.file_key(),
            "Printed single value"
        )
    });
    Ok(())
}

/// Environment variable name for a file key.
pub fn export_name(key: &str) -> String {
    key.to_uppercase()
}

/// Escape characters that keep their meaning inside `"..."` in a POSIX shell.
pub fn escape_double_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
