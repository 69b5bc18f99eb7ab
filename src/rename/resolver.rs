//! Timestamp resolution for a single file.
//!
//! A file's new name comes from the first source that yields a time:
//!
//! 1. the EXIF capture timestamp (reported as a success),
//! 2. a filesystem timestamp in the configured fallback order (a warning),
//! 3. nothing, in which case the original name is kept (an error).

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::{RenameConfig, TimestampSource};
use crate::error::Error;
use crate::fs::naming::{lowercase_extension, with_extension};
use crate::metadata::{read_capture_timestamp, to_local, FileTimes};

/// Outcome category of a resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// Capture timestamp found.
    Success,
    /// Filesystem timestamp used instead.
    Warning,
    /// No timestamp at all, original name kept.
    Error,
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionStatus::Success => write!(f, "success"),
            ResolutionStatus::Warning => write!(f, "warning"),
            ResolutionStatus::Error => write!(f, "error"),
        }
    }
}

/// Where the resolved timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampOrigin {
    Capture,
    Filesystem(TimestampSource),
    Unresolved,
}

impl TimestampOrigin {
    pub fn status(self) -> ResolutionStatus {
        match self {
            TimestampOrigin::Capture => ResolutionStatus::Success,
            TimestampOrigin::Filesystem(_) => ResolutionStatus::Warning,
            TimestampOrigin::Unresolved => ResolutionStatus::Error,
        }
    }
}

/// Destination basename computed for one file.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// File that was inspected.
    pub path: PathBuf,
    /// Basename the file had when inspected.
    pub original: String,
    /// Basename the file should get.
    pub name: String,
    pub origin: TimestampOrigin,
    /// Why the capture timestamp (and possibly the fallback) failed.
    pub detail: Option<String>,
}

impl Resolution {
    pub fn status(&self) -> ResolutionStatus {
        self.origin.status()
    }

    /// Whether applying this resolution would leave the name as it is.
    ///
    /// An unresolved file always keeps its name, even when `original` is
    /// only a lossy rendering of it.
    pub fn is_unchanged(&self) -> bool {
        self.origin == TimestampOrigin::Unresolved || self.name == self.original
    }
}

/// Format a timestamp as `YYYYMMDD<sep>HHMMSS`.
pub fn format_timestamp(timestamp: &NaiveDateTime, separator: char) -> String {
    format!(
        "{}{}{}",
        timestamp.format("%Y%m%d"),
        separator,
        timestamp.format("%H%M%S")
    )
}

/// Build the canonical basename for a timestamp and extension.
pub fn canonical_name(timestamp: &NaiveDateTime, separator: char, extension: Option<&str>) -> String {
    with_extension(&format_timestamp(timestamp, separator), extension)
}

/// Compute the destination basename of `path`.
///
/// Never fails: every problem is folded into the returned status.
pub fn resolve(path: &Path, config: &RenameConfig) -> Resolution {
    let original = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let extension = lowercase_extension(path);

    let capture_error = match read_capture_timestamp(path, config.timestamp_tag_id) {
        Ok(taken) => {
            tracing::debug!("{}: capture timestamp {}", path.display(), taken);
            return Resolution {
                path: path.to_path_buf(),
                original,
                name: canonical_name(&taken, config.separator, extension.as_deref()),
                origin: TimestampOrigin::Capture,
                detail: None,
            };
        }
        Err(e) => e,
    };

    let fallback = FileTimes::read(path)
        .map_err(|e| tracing::debug!("{}: cannot stat: {}", path.display(), e))
        .ok()
        .and_then(|times| times.first_available(&config.fallback_order));

    match fallback {
        Some((source, time)) => {
            let local = to_local(time);
            tracing::debug!("{}: {} time {}", path.display(), source, local);
            Resolution {
                path: path.to_path_buf(),
                original,
                name: canonical_name(&local, config.separator, extension.as_deref()),
                origin: TimestampOrigin::Filesystem(source),
                detail: Some(capture_error.to_string()),
            }
        }
        None => Resolution {
            path: path.to_path_buf(),
            detail: Some(format!(
                "{}; {}",
                capture_error,
                Error::TimestampUnavailable(path.to_path_buf())
            )),
            name: original.clone(),
            original,
            origin: TimestampOrigin::Unresolved,
        },
    }
}
