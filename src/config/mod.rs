//! Configuration module for photo-tidy.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Timestamp source and collision policy definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{CleanupConfig, Config, RenameConfig, DATE_TIME_ORIGINAL};
pub use modes::{CollisionPolicy, TimestampSource};
pub use validation::validate_config;
