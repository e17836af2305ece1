//! Shared path helpers.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Returns true if the value is empty or only whitespace.
pub fn is_blank(value: &OsStr) -> bool {
    value.to_string_lossy().trim().is_empty()
}

/// Join `file_name` onto `base_dir` using the platform separator.
pub fn join_credentials_path(base_dir: &Path, file_name: &str) -> PathBuf {
    base_dir.join(file_name)
}
