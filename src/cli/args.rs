//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CollisionPolicy, Config, TimestampSource};

/// Photo renamer and hidden-artifact cleaner.
#[derive(Parser, Debug)]
#[command(
    name = "photo-tidy",
    version,
    about = "Rename photos by capture time and clean up OS artifacts",
    long_about = "A CLI tool that renames photos to YYYYMMDD_HHMMSS.ext using the embedded \
                  capture timestamp, falling back to filesystem times.\n\n\
                  Also removes hidden artifacts such as .DS_Store and __MACOSX."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, default_value = "photo-tidy.toml", env = "PHOTO_TIDY_CONFIG", global = true)]
    pub config: PathBuf,

    /// Character placed between date and time.
    #[arg(short, long, global = true)]
    pub separator: Option<char>,

    /// EXIF tag id holding the capture timestamp.
    #[arg(long, global = true)]
    pub tag: Option<u16>,

    /// Extensions that are never renamed (replaces the configured list).
    #[arg(long, value_delimiter = ',', num_args = 1.., global = true)]
    pub deny: Option<Vec<String>>,

    /// Filesystem timestamp precedence (created, modified, accessed), e.g. `modified,created`.
    #[arg(long, value_delimiter = ',', num_args = 1.., global = true)]
    pub fallback: Option<Vec<TimestampSource>>,

    /// What to do when the new name is already taken (fail, suffix).
    #[arg(long, global = true)]
    pub on_collision: Option<CollisionPolicy>,

    /// Delete originals that have an "(Edited)" variant next to them.
    #[arg(long, global = true)]
    pub drop_originals: bool,

    /// Also rename hidden dotfiles.
    #[arg(long, global = true)]
    pub include_hidden: bool,

    /// Show what would change without touching any file.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Suppress per-file reports; print only the final statistics.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// What to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rename a single file.
    File {
        /// File to rename.
        path: PathBuf,
    },
    /// Rename every eligible file in a directory.
    #[command(visible_aliases = ["folder", "dir"])]
    Directory {
        /// Directory whose files are renamed.
        path: PathBuf,
    },
    /// Find and delete hidden OS artifacts recursively.
    Clean {
        /// Directory to search instead of asking.
        #[arg(long, conflicts_with = "home")]
        root: Option<PathBuf>,

        /// Search the home directory instead of asking.
        #[arg(long)]
        home: bool,

        /// Delete without asking for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        let rename = &mut config.rename;

        if let Some(separator) = self.separator {
            rename.separator = separator;
        }

        if let Some(tag) = self.tag {
            rename.timestamp_tag_id = tag;
        }

        if let Some(deny) = &self.deny {
            rename.denied_extensions = deny.clone();
        }

        if let Some(order) = &self.fallback {
            rename.fallback_order = order.clone();
        }

        if let Some(policy) = self.on_collision {
            rename.on_collision = policy;
        }

        // Boolean flags only override when set
        if self.drop_originals {
            rename.reduce_edited_duplicates = true;
        }

        if self.include_hidden {
            rename.skip_hidden = false;
        }

        if self.dry_run {
            rename.dry_run = true;
        }

        if self.quiet {
            rename.silence();
        }
    }
}
