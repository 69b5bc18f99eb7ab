//! Rename statistics tracking.

use crate::rename::resolver::TimestampOrigin;

/// Counters for one rename run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameStats {
    // Outcomes
    pub renamed: u64,
    pub unchanged: u64,
    pub skipped: u64,
    pub failed: u64,

    // Timestamp origins
    pub from_capture: u64,
    pub from_filesystem: u64,
    pub unresolved: u64,

    // Edited duplicate pass
    pub originals_removed: u64,
}

impl RenameStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a resolved timestamp came from.
    pub fn record_origin(&mut self, origin: TimestampOrigin) {
        match origin {
            TimestampOrigin::Capture => self.from_capture += 1,
            TimestampOrigin::Filesystem(_) => self.from_filesystem += 1,
            TimestampOrigin::Unresolved => self.unresolved += 1,
        }
    }

    /// Increment renamed count.
    pub fn increment_renamed(&mut self) {
        self.renamed += 1;
    }

    /// Increment unchanged count.
    pub fn increment_unchanged(&mut self) {
        self.unchanged += 1;
    }

    /// Increment skipped count.
    pub fn increment_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Increment failed count.
    pub fn increment_failed(&mut self) {
        self.failed += 1;
    }
}
