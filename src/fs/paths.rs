//! Path and directory management.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::UserDirs;

use crate::error::{Error, Result};
use crate::fs::naming::validate_basename;

/// Get the current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(Error::NoHomeDirectory)
}

/// Get the current working directory, falling back to `.`.
pub fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Ensure a path exists and is a directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Split a file path into its base directory and basename.
pub fn split_file_path(path: &Path) -> Result<(PathBuf, OsString)> {
    let name = path
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| Error::InvalidFilename(format!("No file name in {}", path.display())))?;

    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((base, name))
}

/// Join a generated basename onto its base directory.
pub fn destination_path(base: &Path, name: &str) -> Result<PathBuf> {
    validate_basename(name)?;
    Ok(base.join(name))
}
