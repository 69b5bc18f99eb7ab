//! Photo renaming module.
//!
//! Provides:
//! - Timestamp resolution (capture time, filesystem fallback)
//! - Eligibility filtering and edited-duplicate reduction
//! - Batch renaming with collision handling

pub mod batch;
pub mod eligibility;
pub mod resolver;
pub mod state;

pub use batch::{
    apply_plan, plan_rename, rename_all, rename_directory, rename_file, BatchRenamer,
    RenameOutcome, RenamePlan,
};
pub use eligibility::{
    check_eligibility, collect_eligible, find_edited_originals, reduce_edited_duplicates,
    DuplicateReduction,
};
pub use resolver::{
    canonical_name, format_timestamp, resolve, Resolution, ResolutionStatus, TimestampOrigin,
};
pub use state::RenameStats;
