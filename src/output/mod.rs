//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Per-file rename reporting
//! - Spinners
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod report;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_detail, print_error, print_info, print_success,
    print_warning,
};
pub use progress::{create_spinner, with_spinner};
pub use report::Reporter;
pub use stats::{print_cleanup_outcome, print_rename_stats};
