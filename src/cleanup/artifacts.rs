//! Finding and deleting operating-system artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::fs::paths::ensure_dir;

/// Counters for one removal pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupStats {
    pub removed: u64,
    pub failed: u64,
}

/// Collect every path under `root` whose basename is in `names`.
///
/// Matching directories (e.g. `__MACOSX`) are collected whole and not
/// descended into. Unreadable subdirectories are logged and skipped.
pub fn find_artifacts(root: &Path, names: &[String]) -> Result<Vec<PathBuf>> {
    ensure_dir(root)?;

    let mut found = Vec::new();
    let mut walker = WalkDir::new(root).min_depth(1).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy();
        if !names.iter().any(|artifact| *artifact == name) {
            continue;
        }

        tracing::debug!("Found artifact: {}", entry.path().display());
        if entry.file_type().is_dir() {
            walker.skip_current_dir();
        }
        found.push(entry.into_path());
    }

    Ok(found)
}

/// Delete every collected artifact, directories recursively.
pub fn remove_artifacts(paths: &[PathBuf]) -> CleanupStats {
    let mut stats = CleanupStats::default();

    for path in paths {
        match remove_path(path) {
            Ok(()) => {
                tracing::debug!("Deleted: {}", path.display());
                stats.removed += 1;
            }
            Err(e) => {
                tracing::warn!("Could not delete {}: {}", path.display(), e);
                stats.failed += 1;
            }
        }
    }

    stats
}

fn remove_path(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}
