//! Metadata module.
//!
//! Provides:
//! - Capture timestamp extraction from EXIF
//! - Filesystem timestamp snapshots

pub mod capture;
pub mod times;

#[cfg(test)]
pub(crate) mod fixtures;

pub use capture::{parse_exif_datetime, read_capture_timestamp};
pub use times::{to_local, FileTimes};
