//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename inspection and manipulation

pub mod naming;
pub mod paths;

pub use naming::{
    is_hidden, lowercase_extension, make_unique_filename_by, split_name,
    validate_basename, with_extension, EditedMarker,
};
pub use paths::{current_dir, destination_path, ensure_dir, home_dir, split_file_path};
