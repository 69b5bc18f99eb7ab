//! Configuration structures and loading logic.

use crate::config::modes::{CollisionPolicy, TimestampSource};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// EXIF `DateTimeOriginal` tag number.
pub const DATE_TIME_ORIGINAL: u16 = 36867;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rename: RenameConfig,

    #[serde(default)]
    pub cleanup: CleanupConfig,
}

/// Options for the photo renamer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Numeric id of the EXIF tag holding the capture timestamp.
    #[serde(default = "default_tag_id")]
    pub timestamp_tag_id: u16,

    /// Character placed between the date and the time in new names.
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Order in which filesystem timestamps are tried when EXIF is missing.
    #[serde(default = "default_fallback_order")]
    pub fallback_order: Vec<TimestampSource>,

    /// Extensions (without dot) that are never renamed.
    #[serde(default = "default_denied_extensions")]
    pub denied_extensions: Vec<String>,

    /// Whether dotfiles are left out of directory runs.
    #[serde(default = "default_true")]
    pub skip_hidden: bool,

    /// Whether to delete originals that have an edited variant next to them.
    #[serde(default)]
    pub reduce_edited_duplicates: bool,

    /// Marker appended to the stem of edited variants.
    #[serde(default = "default_edited_marker")]
    pub edited_marker: String,

    /// Behaviour when the destination name is taken.
    #[serde(default)]
    pub on_collision: CollisionPolicy,

    /// Print a line for each capture timestamp found.
    #[serde(default = "default_true")]
    pub report_successes: bool,

    /// Print a line for each filesystem fallback used.
    #[serde(default = "default_true")]
    pub report_warnings: bool,

    /// Print a line for each file left with its original name.
    #[serde(default = "default_true")]
    pub report_errors: bool,

    /// Print the underlying reason next to warnings and failures.
    #[serde(default = "default_true")]
    pub report_exception_details: bool,

    /// Print each `source -> destination` pair.
    #[serde(default = "default_true")]
    pub report_renames: bool,

    /// Plan and report without touching the filesystem.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            timestamp_tag_id: default_tag_id(),
            separator: default_separator(),
            fallback_order: default_fallback_order(),
            denied_extensions: default_denied_extensions(),
            skip_hidden: true,
            reduce_edited_duplicates: false,
            edited_marker: default_edited_marker(),
            on_collision: CollisionPolicy::default(),
            report_successes: true,
            report_warnings: true,
            report_errors: true,
            report_exception_details: true,
            report_renames: true,
            dry_run: false,
        }
    }
}

impl RenameConfig {
    /// Check an extension (with or without leading dot) against the denylist.
    pub fn is_denied_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.denied_extensions
            .iter()
            .any(|denied| denied.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    /// Silence every per-file report line.
    pub fn silence(&mut self) {
        self.report_successes = false;
        self.report_warnings = false;
        self.report_errors = false;
        self.report_exception_details = false;
        self.report_renames = false;
    }
}

/// Options for the hidden-artifact remover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Basenames treated as operating-system artifacts.
    #[serde(default = "default_artifact_names")]
    pub artifact_names: Vec<String>,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            artifact_names: default_artifact_names(),
        }
    }
}

fn default_tag_id() -> u16 {
    DATE_TIME_ORIGINAL
}

fn default_separator() -> char {
    '_'
}

fn default_fallback_order() -> Vec<TimestampSource> {
    TimestampSource::DEFAULT_ORDER.to_vec()
}

fn default_denied_extensions() -> Vec<String> {
    ["ini", "sys", "conf"].iter().map(|s| s.to_string()).collect()
}

fn default_edited_marker() -> String {
    "(Edited)".to_string()
}

fn default_artifact_names() -> Vec<String> {
    [".DS_Store", "._.DS_Store", ".localized", "__MACOSX"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
