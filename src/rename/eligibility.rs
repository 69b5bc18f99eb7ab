//! Eligibility filtering and edited-duplicate reduction for directory runs.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::config::RenameConfig;
use crate::error::{Error, Result};
use crate::fs::naming::{is_hidden, lowercase_extension, split_name, EditedMarker};
use crate::fs::paths::ensure_dir;
use crate::output::Reporter;

/// Check whether a single path may be renamed.
///
/// Hidden files pass here; skipping them is a directory-listing concern.
/// Returns [`Error::Ineligible`] naming the reason otherwise.
pub fn check_eligibility(path: &Path, config: &RenameConfig) -> Result<()> {
    let ineligible = |reason: &str| Error::Ineligible {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if path.is_dir() {
        return Err(ineligible("directory"));
    }

    if !path.is_file() {
        return Err(ineligible("not a regular file"));
    }

    if let Some(ext) = lowercase_extension(path) {
        if config.is_denied_extension(&ext) {
            return Err(ineligible(&format!("denied extension .{}", ext)));
        }
    }

    Ok(())
}

/// List the basenames of `dir` that may be renamed, in listing order.
///
/// Names are kept as the OS returned them, so non-UTF-8 names survive.
pub fn collect_eligible(dir: &Path, config: &RenameConfig) -> Result<Vec<OsString>> {
    ensure_dir(dir)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();

        if config.skip_hidden && is_hidden(&name.to_string_lossy()) {
            tracing::debug!("Skipping hidden file: {}", entry.path().display());
            continue;
        }

        match check_eligibility(&entry.path(), config) {
            Ok(()) => names.push(name),
            Err(e) => tracing::debug!("Skipping: {}", e),
        }
    }

    Ok(names)
}

/// Result of the edited-duplicate pass.
#[derive(Debug, Default)]
pub struct DuplicateReduction {
    /// Names left for renaming, in their original order.
    pub kept: Vec<OsString>,
    /// Originals dropped because an edited variant exists.
    pub removed: Vec<OsString>,
    /// Originals that were dropped but could not be deleted.
    pub failed: Vec<OsString>,
}

/// Find originals shadowed by an edited variant, e.g. `IMG_0001.jpg`
/// next to `IMG_0001(Edited).jpg` or `IMG_0001 (Edited).jpg`.
///
/// Extensions are compared case-insensitively. Names that are not valid
/// UTF-8 never take part in matching.
pub fn find_edited_originals(names: &[OsString], marker: &EditedMarker) -> HashSet<OsString> {
    let mut originals = HashSet::new();

    for name in names.iter().filter_map(|name| name.to_str()) {
        let (stem, ext) = split_name(name);
        let Some(original_stem) = marker.original_stem(stem) else {
            continue;
        };

        let shadowed = names.iter().map(OsString::as_os_str).find(|candidate| {
            let Some(candidate) = candidate.to_str() else {
                return false;
            };
            let (candidate_stem, candidate_ext) = split_name(candidate);
            candidate_stem == original_stem
                && match (candidate_ext, ext) {
                    (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                    (None, None) => true,
                    _ => false,
                }
        });

        if let Some(original) = shadowed {
            originals.insert(original.to_os_string());
        }
    }

    originals
}

/// Drop and delete originals that have an edited variant in `names`.
///
/// Must run to completion before any file in `dir` is renamed. With
/// `dry_run` set nothing is deleted, but the originals are still dropped.
pub fn reduce_edited_duplicates(
    dir: &Path,
    names: Vec<OsString>,
    config: &RenameConfig,
    reporter: &Reporter,
) -> Result<DuplicateReduction> {
    let marker = EditedMarker::new(&config.edited_marker)?;
    let originals = find_edited_originals(&names, &marker);

    let mut reduction = DuplicateReduction::default();

    for name in names {
        if !originals.contains(&name) {
            reduction.kept.push(name);
            continue;
        }

        let path = dir.join(&name);
        if config.dry_run {
            reporter.removed_original(&path, true);
            reduction.removed.push(name);
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                reporter.removed_original(&path, false);
                reduction.removed.push(name);
            }
            Err(e) => {
                reporter.failure(&path, &Error::Io(e));
                reduction.failed.push(name);
            }
        }
    }

    Ok(reduction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::tempdir;

    fn names(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_collect_skips_denied_hidden_and_directories() {
        let dir = tempdir().unwrap();
        for name in ["IMG_0001.jpg", "config.ini", "DRIVER.SYS", ".DS_Store", "clip.mov"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let mut eligible = collect_eligible(dir.path(), &RenameConfig::default()).unwrap();
        eligible.sort();
        assert_eq!(eligible, names(&["IMG_0001.jpg", "clip.mov"]));
    }

    #[test]
    fn test_hidden_files_kept_when_configured() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.jpg"), b"x").unwrap();

        let config = RenameConfig {
            skip_hidden: false,
            ..RenameConfig::default()
        };
        assert_eq!(
            collect_eligible(dir.path(), &config).unwrap(),
            names(&[".hidden.jpg"])
        );
    }

    #[test]
    fn test_collect_rejects_file_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.jpg");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            collect_eligible(&file, &RenameConfig::default()),
            Err(Error::NotADirectory(_))
        ));
    }

    #[test]
    fn test_check_eligibility_reasons() {
        let dir = tempdir().unwrap();
        let config = RenameConfig::default();

        let ini = dir.path().join("config.ini");
        fs::write(&ini, b"x").unwrap();
        assert!(matches!(
            check_eligibility(&ini, &config),
            Err(Error::Ineligible { .. })
        ));

        assert!(check_eligibility(dir.path(), &config).is_err());
        assert!(check_eligibility(&dir.path().join("missing.jpg"), &config).is_err());

        let hidden = dir.path().join(".photo.jpg");
        fs::write(&hidden, b"x").unwrap();
        assert!(check_eligibility(&hidden, &config).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_keeps_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let name = OsStr::from_bytes(b"IMG_\xff.jpg");
        fs::write(dir.path().join(name), b"x").unwrap();

        let eligible = collect_eligible(dir.path(), &RenameConfig::default()).unwrap();
        assert_eq!(eligible, vec![name.to_os_string()]);
        assert!(dir.path().join(&eligible[0]).is_file());
    }

    #[test]
    fn test_find_edited_originals() {
        let marker = EditedMarker::new("(Edited)").unwrap();
        let listing = names(&[
            "IMG_0001.jpg",
            "IMG_0001(Edited).jpg",
            "IMG_0002.JPG",
            "IMG_0002 (Edited).jpg",
            "IMG_0003(Edited).jpg",
            "IMG_0004.png",
            "IMG_0004(Edited).jpg",
        ]);

        let originals = find_edited_originals(&listing, &marker);
        let mut originals: Vec<_> = originals.into_iter().collect();
        originals.sort();
        assert_eq!(originals, names(&["IMG_0001.jpg", "IMG_0002.JPG"]));
    }

    #[test]
    fn test_reduce_deletes_original() {
        let dir = tempdir().unwrap();
        for name in ["IMG_0001.jpg", "IMG_0001(Edited).jpg", "IMG_0005.jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let listing = names(&["IMG_0001.jpg", "IMG_0001(Edited).jpg", "IMG_0005.jpg"]);
        let reduction = reduce_edited_duplicates(
            dir.path(),
            listing,
            &RenameConfig::default(),
            &Reporter::silent(),
        )
        .unwrap();

        assert_eq!(reduction.kept, names(&["IMG_0001(Edited).jpg", "IMG_0005.jpg"]));
        assert_eq!(reduction.removed, names(&["IMG_0001.jpg"]));
        assert!(reduction.failed.is_empty());
        assert!(!dir.path().join("IMG_0001.jpg").exists());
        assert!(dir.path().join("IMG_0001(Edited).jpg").exists());
    }

    #[test]
    fn test_reduce_dry_run_keeps_files() {
        let dir = tempdir().unwrap();
        for name in ["IMG_0001.jpg", "IMG_0001 (Edited).jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let config = RenameConfig {
            dry_run: true,
            ..RenameConfig::default()
        };
        let reduction = reduce_edited_duplicates(
            dir.path(),
            names(&["IMG_0001.jpg", "IMG_0001 (Edited).jpg"]),
            &config,
            &Reporter::silent(),
        )
        .unwrap();

        assert_eq!(reduction.kept, names(&["IMG_0001 (Edited).jpg"]));
        assert!(dir.path().join("IMG_0001.jpg").exists());
    }
}
