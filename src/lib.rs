//! photo-tidy - photo renaming and hidden-artifact cleanup
//!
//! This library renames photos to their capture time and removes OS artifacts.
//!
//! # Features
//!
//! - Rename to `YYYYMMDD_HHMMSS.ext` from the EXIF capture timestamp
//! - Filesystem timestamp fallback with configurable precedence
//! - Denied extensions and hidden-file filtering
//! - Optional removal of originals that have an "(Edited)" variant
//! - Collision detection, with an optional numeric suffix
//! - Recursive `.DS_Store` / `__MACOSX` cleanup behind a confirmation prompt
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use photo_tidy::{rename_directory, Config, Reporter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("photo-tidy.toml"))?;
//!     let reporter = Reporter::from_config(&config.rename);
//!     let stats = rename_directory(Path::new("photos"), &config.rename, &reporter)?;
//!     println!("{} renamed", stats.renamed);
//!     Ok(())
//! }
//! ```

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod metadata;
pub mod output;
pub mod rename;

// Re-exports for convenience
pub use cleanup::{run_cleanup, CleanupOutcome, Prompt};
pub use config::{Config, RenameConfig, TimestampSource};
pub use error::{Error, Result};
pub use output::Reporter;
pub use rename::{rename_directory, rename_file, resolve, RenameStats, Resolution};
