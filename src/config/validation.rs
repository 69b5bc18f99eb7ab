//! Configuration validation logic.

use std::collections::HashSet;

use crate::config::loader::{CleanupConfig, Config, RenameConfig};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_rename(&config.rename)?;
    validate_cleanup(&config.cleanup)?;

    Ok(())
}

/// Validate renamer options.
pub fn validate_rename(config: &RenameConfig) -> Result<()> {
    validate_separator(config.separator)?;

    if config.timestamp_tag_id == 0 {
        return Err(Error::ConfigValidation {
            field: "timestamp_tag_id".to_string(),
            message: "Tag id must be a non-zero EXIF tag number".to_string(),
        });
    }

    if config.fallback_order.is_empty() {
        return Err(Error::ConfigValidation {
            field: "fallback_order".to_string(),
            message: "At least one filesystem timestamp source is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for source in &config.fallback_order {
        if !seen.insert(source) {
            return Err(Error::ConfigValidation {
                field: "fallback_order".to_string(),
                message: format!("'{}' is listed more than once", source),
            });
        }
    }

    for ext in &config.denied_extensions {
        let ext = ext.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\', '.']) {
            return Err(Error::ConfigValidation {
                field: "denied_extensions".to_string(),
                message: format!("'{}' is not a plain file extension", ext),
            });
        }
    }

    if config.edited_marker.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "edited_marker".to_string(),
            message: "Marker cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate the date/time separator.
///
/// Digits would make names ambiguous and path separators would move files.
pub fn validate_separator(separator: char) -> Result<()> {
    if separator == '/' || separator == '\\' || separator == std::path::MAIN_SEPARATOR {
        return Err(Error::ConfigValidation {
            field: "separator".to_string(),
            message: "Path separators are not allowed".to_string(),
        });
    }

    if separator.is_ascii_digit() || separator.is_control() || separator == ':' {
        return Err(Error::ConfigValidation {
            field: "separator".to_string(),
            message: format!("'{}' cannot separate date and time", separator.escape_default()),
        });
    }

    Ok(())
}

/// Validate artifact remover options.
pub fn validate_cleanup(config: &CleanupConfig) -> Result<()> {
    if config.artifact_names.is_empty() {
        return Err(Error::ConfigValidation {
            field: "artifact_names".to_string(),
            message: "At least one artifact name is required".to_string(),
        });
    }

    for name in &config.artifact_names {
        if name.trim().is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(Error::ConfigValidation {
                field: "artifact_names".to_string(),
                message: format!("'{}' is not a plain file name", name),
            });
        }
    }

    Ok(())
}
