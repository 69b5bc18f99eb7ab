//! Timestamp source and collision policy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filesystem timestamp that can stand in for a missing capture timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampSource {
    /// File creation (birth) time.
    Created,
    /// Last modification time.
    Modified,
    /// Last access time.
    Accessed,
}

impl TimestampSource {
    /// Default fallback precedence: creation, then modification, then access.
    pub const DEFAULT_ORDER: [TimestampSource; 3] = [
        TimestampSource::Created,
        TimestampSource::Modified,
        TimestampSource::Accessed,
    ];
}

impl fmt::Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampSource::Created => write!(f, "created"),
            TimestampSource::Modified => write!(f, "modified"),
            TimestampSource::Accessed => write!(f, "accessed"),
        }
    }
}

impl FromStr for TimestampSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "created" | "creation" | "ctime" | "birth" => Ok(TimestampSource::Created),
            "modified" | "modification" | "mtime" => Ok(TimestampSource::Modified),
            "accessed" | "access" | "atime" => Ok(TimestampSource::Accessed),
            _ => Err(format!("Unknown timestamp source: {}", s)),
        }
    }
}

/// What to do when the destination name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Leave the source untouched and report the collision (default).
    #[default]
    Fail,
    /// Append `_1`, `_2`, ... to the destination stem until it is free.
    Suffix,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Fail => write!(f, "fail"),
            CollisionPolicy::Suffix => write!(f, "suffix"),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" | "skip" => Ok(CollisionPolicy::Fail),
            "suffix" | "unique" => Ok(CollisionPolicy::Suffix),
            _ => Err(format!("Unknown collision policy: {}", s)),
        }
    }
}
