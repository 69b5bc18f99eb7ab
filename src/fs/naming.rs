//! Filename inspection and manipulation.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};

/// Maximum suffix tried by [`make_unique_filename_by`].
const MAX_UNIQUE_SUFFIX: u32 = 1000;

/// Return the extension of `path`, lower-cased and without the dot.
///
/// Dotfiles such as `.DS_Store` have no extension.
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Split a basename into stem and extension (extension without the dot).
pub fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(0) | None => (name, None),
        Some(dot_pos) if dot_pos + 1 == name.len() => (name, None),
        Some(dot_pos) => (&name[..dot_pos], Some(&name[dot_pos + 1..])),
    }
}

/// Whether a basename is a hidden dotfile.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Append a lower-cased extension to a stem.
pub fn with_extension(stem: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{}.{}", stem, ext.to_lowercase()),
        None => stem.to_string(),
    }
}

/// Validate that a generated basename can be joined to a directory safely.
///
/// Returns an error if the name is empty, a traversal component or
/// contains path separators or null bytes.
pub fn validate_basename(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    Ok(())
}

/// Matches edited variants such as `IMG_0001(Edited).jpg` or `IMG_0001 (Edited).jpg`.
#[derive(Debug, Clone)]
pub struct EditedMarker {
    pattern: Regex,
}

impl EditedMarker {
    /// Build a matcher for the given marker text, e.g. `(Edited)`.
    pub fn new(marker: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"^(?P<stem>.+?) ?{}$", regex::escape(marker)))
            .map_err(|e| Error::Config(format!("Invalid edited marker '{}': {}", marker, e)))?;
        Ok(Self { pattern })
    }

    /// Return the stem of the original shot if `stem` carries the marker.
    ///
    /// `IMG_0001 (Edited)` yields `IMG_0001`.
    pub fn original_stem<'a>(&self, stem: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(stem)
            .and_then(|captures| captures.name("stem"))
            .map(|m| m.as_str())
    }
}

/// Generate a unique path by appending `_1`, `_2`, ... while `is_taken` holds.
///
/// Returns `None` when every candidate up to the limit is taken.
pub fn make_unique_filename_by(path: &Path, is_taken: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    if !is_taken(path) {
        return Some(path.to_path_buf());
    }

    let name = path.file_name()?.to_string_lossy();
    let (stem, ext) = split_name(&name);
    let parent = path.parent().unwrap_or(Path::new("."));

    (1..=MAX_UNIQUE_SUFFIX)
        .map(|counter| match ext {
            Some(ext) => parent.join(format!("{}_{}.{}", stem, counter, ext)),
            None => parent.join(format!("{}_{}", stem, counter)),
        })
        .find(|candidate| !is_taken(candidate.as_path()))
}
