//! Hidden-artifact removal.
//!
//! Provides:
//! - Recursive search for OS artifacts (`.DS_Store`, `__MACOSX`, ...)
//! - Confirmation-gated deletion with an injectable prompt

pub mod artifacts;
pub mod prompt;

use std::path::{Path, PathBuf};

use crate::config::CleanupConfig;
use crate::error::{Error, Result};
use crate::fs::paths::home_dir;
use crate::output::with_spinner;

pub use artifacts::{find_artifacts, remove_artifacts, CleanupStats};
pub use prompt::{AssumeYes, Confirmation, ConsolePrompt, Prompt, RootChoice};

/// How a cleanup run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// No artifact under the root; nothing was asked.
    NothingFound,
    /// Confirmed and deleted.
    Removed { found: usize, stats: CleanupStats },
    /// Explicitly declined; artifacts left in place.
    Declined(usize),
    /// Unrecognized answer; artifacts left in place.
    Aborted(usize),
}

impl CleanupOutcome {
    /// Map an aborted run or failed deletions to an error for the exit code.
    pub fn into_result(self) -> Result<Self> {
        match self {
            CleanupOutcome::Aborted(count) => Err(Error::Aborted(format!(
                "incorrect answer, {} file(s) left in place",
                count
            ))),
            CleanupOutcome::Removed { stats, .. } if stats.failed > 0 => {
                Err(Error::PartialFailure(stats.failed as usize))
            }
            outcome => Ok(outcome),
        }
    }
}

/// Turn a menu choice into a search root. `None` means the user aborted.
pub fn resolve_root(choice: RootChoice, current: &Path) -> Result<Option<PathBuf>> {
    Ok(match choice {
        RootChoice::Current => Some(current.to_path_buf()),
        RootChoice::Home => Some(home_dir()?),
        RootChoice::Custom(path) => Some(path),
        RootChoice::Abort => None,
    })
}

/// Find artifacts under `root`, ask for confirmation, then delete or leave them.
pub fn run_cleanup(
    root: &Path,
    config: &CleanupConfig,
    prompt: &mut dyn Prompt,
) -> Result<CleanupOutcome> {
    let found = with_spinner(&format!("Searching {}", root.display()), || {
        find_artifacts(root, &config.artifact_names)
    })?;

    tracing::info!("{} artifact(s) under {}", found.len(), root.display());
    if found.is_empty() {
        return Ok(CleanupOutcome::NothingFound);
    }

    Ok(match prompt.confirm_removal(found.len())? {
        Confirmation::Yes => CleanupOutcome::Removed {
            found: found.len(),
            stats: remove_artifacts(&found),
        },
        Confirmation::No => CleanupOutcome::Declined(found.len()),
        Confirmation::Abort => CleanupOutcome::Aborted(found.len()),
    })
}
