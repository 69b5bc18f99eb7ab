//! Per-file status reporting for the renamer.

use std::path::Path;

use console::style;

use crate::config::RenameConfig;
use crate::error::Error;
use crate::output::console::{print_detail, print_error, print_info, print_success, print_warning};
use crate::rename::resolver::{Resolution, TimestampOrigin};

/// Prints per-file status lines, gated by the `report_*` options.
///
/// Reporting is informational only; nothing here changes what gets renamed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    pub successes: bool,
    pub warnings: bool,
    pub errors: bool,
    pub details: bool,
    pub renames: bool,
}

impl Reporter {
    /// Build a reporter from the renamer options.
    pub fn from_config(config: &RenameConfig) -> Self {
        Self {
            successes: config.report_successes,
            warnings: config.report_warnings,
            errors: config.report_errors,
            details: config.report_exception_details,
            renames: config.report_renames,
        }
    }

    /// A reporter that prints nothing.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Report how a file's timestamp was resolved.
    pub fn resolution(&self, resolution: &Resolution) {
        let path = resolution.path.display();

        match resolution.origin {
            TimestampOrigin::Capture => {
                if self.successes {
                    print_success(&format!("Success: {}", path));
                }
            }
            TimestampOrigin::Filesystem(source) => {
                if self.warnings {
                    print_warning(&format!("Warning: {} (using {} time)", path, source));
                    self.detail(resolution.detail.as_deref());
                }
            }
            TimestampOrigin::Unresolved => {
                if self.errors {
                    print_error(&format!("Error: {} keeps its name", path));
                    self.detail(resolution.detail.as_deref());
                }
            }
        }
    }

    /// Report a completed (or planned) rename.
    pub fn renamed(&self, from: &Path, to: &Path, dry_run: bool) {
        tracing::debug!("renamed {} -> {}", from.display(), to.display());
        if !self.renames {
            return;
        }

        let prefix = if dry_run { "[dry run] " } else { "" };
        println!(
            "  {}{}\n  {} {}\n",
            prefix,
            from.display(),
            style("→").dim(),
            style(to.display()).green()
        );
    }

    /// Report an entry left out of the run.
    pub fn skipped(&self, error: &Error) {
        tracing::debug!("skipped: {}", error);
        if self.details {
            print_info(&format!("Skipped: {}", error));
        }
    }

    /// Report a per-file failure.
    pub fn failure(&self, path: &Path, error: &Error) {
        tracing::warn!("{}: {}", path.display(), error);
        if self.errors {
            print_error(&format!("Failed: {}", path.display()));
            self.detail(Some(&error.to_string()));
        }
    }

    /// Report an original deleted in favour of its edited variant.
    pub fn removed_original(&self, path: &Path, dry_run: bool) {
        tracing::debug!("removed original {}", path.display());
        if self.renames {
            let verb = if dry_run { "Would remove" } else { "Removed" };
            print_info(&format!("{} original {} (edited variant kept)", verb, path.display()));
        }
    }

    fn detail(&self, detail: Option<&str>) {
        if let (true, Some(detail)) = (self.details, detail) {
            print_detail(detail);
        }
    }
}
