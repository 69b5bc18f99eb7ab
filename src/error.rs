//! Error types for the photo-tidy application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Timestamp resolution errors
    #[error("No capture timestamp in {path}: {reason}")]
    MetadataUnavailable { path: PathBuf, reason: String },

    #[error("No filesystem timestamp available for {0}")]
    TimestampUnavailable(PathBuf),

    // Rename errors
    #[error("Destination already exists: {0}")]
    RenameCollision(PathBuf),

    #[error("Not eligible for renaming: {path} ({reason})")]
    Ineligible { path: PathBuf, reason: String },

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Home directory could not be determined")]
    NoHomeDirectory,

    // Interactive errors
    #[error("Operation cancelled: {0}")]
    Aborted(String),

    #[error("{0} file(s) could not be processed")]
    PartialFailure(usize),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const SOME_FILES_FAILED: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 4;
}
