//! Filesystem timestamp snapshot.

use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime};

use crate::config::TimestampSource;
use crate::error::Result;

/// Creation, modification and access times of a file.
///
/// Each time is optional because not every platform or filesystem
/// records all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTimes {
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub accessed: Option<SystemTime>,
}

impl FileTimes {
    /// Snapshot the times of `path`, following symlinks.
    pub fn read(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        Ok(Self::from(&metadata))
    }

    /// Get the time recorded for a given source.
    pub fn get(&self, source: TimestampSource) -> Option<SystemTime> {
        match source {
            TimestampSource::Created => self.created,
            TimestampSource::Modified => self.modified,
            TimestampSource::Accessed => self.accessed,
        }
    }

    /// First time available in `order`, with the source it came from.
    pub fn first_available(&self, order: &[TimestampSource]) -> Option<(TimestampSource, SystemTime)> {
        order
            .iter()
            .find_map(|&source| self.get(source).map(|time| (source, time)))
    }
}

impl From<&Metadata> for FileTimes {
    fn from(metadata: &Metadata) -> Self {
        Self {
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
            accessed: metadata.accessed().ok(),
        }
    }
}

/// Convert a system time to local calendar time.
pub fn to_local(time: SystemTime) -> NaiveDateTime {
    let datetime: DateTime<Local> = time.into();
    datetime.naive_local()
}
