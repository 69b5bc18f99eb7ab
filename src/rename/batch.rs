//! Applying resolved names to files.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CollisionPolicy, RenameConfig};
use crate::error::{Error, Result};
use crate::fs::naming::make_unique_filename_by;
use crate::fs::paths::{destination_path, ensure_dir, split_file_path};
use crate::output::Reporter;
use crate::rename::eligibility::{check_eligibility, collect_eligible, reduce_edited_duplicates};
use crate::rename::resolver::{resolve, Resolution};
use crate::rename::state::RenameStats;

/// Source and destination of one rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// What happened to one file.
#[derive(Debug)]
pub enum RenameOutcome {
    /// Moved to the contained path (or would be, in a dry run).
    Renamed(PathBuf),
    /// Already carries its resolved name.
    Unchanged,
    /// Not eligible for renaming.
    Skipped(Error),
    /// Rename attempted and failed.
    Failed(Error),
}

/// Resolve `name` inside `base` and build its rename plan.
pub fn plan_rename(base: &Path, name: &OsStr, config: &RenameConfig) -> Result<(Resolution, RenamePlan)> {
    let source = base.join(name);
    let resolution = resolve(&source, config);
    let destination = destination_path(base, &resolution.name)?;

    Ok((
        resolution,
        RenamePlan {
            source,
            destination,
        },
    ))
}

/// Perform a rename plan, honouring the collision policy.
///
/// `claimed` holds destinations already taken during this run; it keeps
/// dry runs from planning two files onto the same name. The source path
/// itself never counts as taken, so a file already carrying a suffixed
/// name keeps it. Returns `plan.source` when nothing had to move.
pub fn apply_plan(
    plan: &RenamePlan,
    config: &RenameConfig,
    claimed: &mut HashSet<PathBuf>,
) -> Result<PathBuf> {
    let taken = |path: &Path| {
        path != plan.source
            && (claimed.contains(path) || (path.exists() && !is_same_file(&plan.source, path)))
    };

    let destination = if taken(&plan.destination) {
        match config.on_collision {
            CollisionPolicy::Fail => {
                return Err(Error::RenameCollision(plan.destination.clone()));
            }
            CollisionPolicy::Suffix => make_unique_filename_by(&plan.destination, taken)
                .ok_or_else(|| Error::RenameCollision(plan.destination.clone()))?,
        }
    } else {
        plan.destination.clone()
    };

    if destination != plan.source && !config.dry_run {
        fs::rename(&plan.source, &destination)?;
    }

    claimed.insert(destination.clone());
    Ok(destination)
}

/// Renames entries one at a time, tracking statistics and claimed names.
pub struct BatchRenamer<'a> {
    config: &'a RenameConfig,
    reporter: &'a Reporter,
    claimed: HashSet<PathBuf>,
    stats: RenameStats,
}

impl<'a> BatchRenamer<'a> {
    pub fn new(config: &'a RenameConfig, reporter: &'a Reporter) -> Self {
        Self {
            config,
            reporter,
            claimed: HashSet::new(),
            stats: RenameStats::new(),
        }
    }

    /// Resolve and rename one entry of `base`, never failing past this point.
    pub fn process(&mut self, base: &Path, name: &OsStr) -> RenameOutcome {
        let outcome = self.process_entry(base, name);
        match &outcome {
            RenameOutcome::Renamed(_) => self.stats.increment_renamed(),
            RenameOutcome::Unchanged => self.stats.increment_unchanged(),
            RenameOutcome::Skipped(_) => self.stats.increment_skipped(),
            RenameOutcome::Failed(_) => self.stats.increment_failed(),
        }
        outcome
    }

    /// Statistics gathered so far.
    pub fn finish(self) -> RenameStats {
        self.stats
    }

    fn process_entry(&mut self, base: &Path, name: &OsStr) -> RenameOutcome {
        let source = base.join(name);

        if let Err(e) = check_eligibility(&source, self.config) {
            self.reporter.skipped(&e);
            return RenameOutcome::Skipped(e);
        }

        let (resolution, plan) = match plan_rename(base, name, self.config) {
            Ok(planned) => planned,
            Err(e) => {
                self.reporter.failure(&source, &e);
                return RenameOutcome::Failed(e);
            }
        };
        self.reporter.resolution(&resolution);
        self.stats.record_origin(resolution.origin);

        if resolution.is_unchanged() {
            tracing::debug!("{} already has its resolved name", source.display());
            self.claimed.insert(plan.destination);
            return RenameOutcome::Unchanged;
        }

        match apply_plan(&plan, self.config, &mut self.claimed) {
            Ok(destination) if destination == plan.source => {
                tracing::debug!("{} keeps its suffixed name", source.display());
                RenameOutcome::Unchanged
            }
            Ok(destination) => {
                self.reporter
                    .renamed(&plan.source, &destination, self.config.dry_run);
                RenameOutcome::Renamed(destination)
            }
            Err(e) => {
                self.reporter.failure(&plan.source, &e);
                RenameOutcome::Failed(e)
            }
        }
    }
}

/// Rename every name of `names` inside `base`, independently of each other.
pub fn rename_all(
    base: &Path,
    names: &[OsString],
    config: &RenameConfig,
    reporter: &Reporter,
) -> RenameStats {
    let mut renamer = BatchRenamer::new(config, reporter);
    for name in names {
        renamer.process(base, name);
    }
    renamer.finish()
}

/// Rename a single file in place.
///
/// Hidden files are renamed too; only directory listings skip them.
pub fn rename_file(path: &Path, config: &RenameConfig, reporter: &Reporter) -> Result<RenameStats> {
    if path.is_dir() {
        return Err(Error::Ineligible {
            path: path.to_path_buf(),
            reason: "directory (use directory mode)".to_string(),
        });
    }

    let (base, name) = split_file_path(path)?;
    Ok(rename_all(&base, &[name], config, reporter))
}

/// Rename every eligible file of a directory.
///
/// Edited-duplicate reduction, when enabled, finishes before the first rename.
pub fn rename_directory(dir: &Path, config: &RenameConfig, reporter: &Reporter) -> Result<RenameStats> {
    ensure_dir(dir)?;

    let mut names = collect_eligible(dir, config)?;
    tracing::info!("{} eligible file(s) in {}", names.len(), dir.display());

    let mut originals_removed = 0;
    let mut removal_failures = 0;
    if config.reduce_edited_duplicates {
        let reduction = reduce_edited_duplicates(dir, names, config, reporter)?;
        originals_removed = reduction.removed.len() as u64;
        removal_failures = reduction.failed.len() as u64;
        names = reduction.kept;
    }

    let mut stats = rename_all(dir, &names, config, reporter);
    stats.originals_removed = originals_removed;
    stats.failed += removal_failures;

    Ok(stats)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimestampSource;
    use crate::metadata::fixtures::jpeg_with_capture_time;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn set_modified(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn os_names(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    fn same_mtime_pair(dir: &Path) {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        for name in ["a.jpg", "b.jpg"] {
            let path = dir.join(name);
            fs::write(&path, name.as_bytes()).unwrap();
            set_modified(&path, time);
        }
    }

    fn sorted_listing(dir: &Path) -> Vec<String> {
        let mut listing: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        listing.sort();
        listing
    }

    fn modified_only() -> RenameConfig {
        RenameConfig {
            fallback_order: vec![TimestampSource::Modified],
            ..RenameConfig::default()
        }
    }

    #[test]
    fn test_rename_file_with_capture_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("IMG_0001.JPG");
        fs::write(&path, jpeg_with_capture_time("2018:06:14 22:00:00")).unwrap();

        let stats = rename_file(&path, &RenameConfig::default(), &Reporter::silent()).unwrap();

        assert_eq!(stats.renamed, 1);
        assert_eq!(stats.from_capture, 1);
        assert!(!path.exists());
        assert!(dir.path().join("20180614_220000.jpg").exists());
    }

    #[test]
    fn test_rename_file_rejects_directory() {
        let dir = tempdir().unwrap();
        assert!(rename_file(dir.path(), &RenameConfig::default(), &Reporter::silent()).is_err());
    }

    #[test]
    fn test_collision_fails_second_file_only() {
        let dir = tempdir().unwrap();
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        for name in ["a.jpg", "b.jpg"] {
            let path = dir.path().join(name);
            fs::write(&path, name.as_bytes()).unwrap();
            set_modified(&path, time);
        }

        let stats = rename_all(
            dir.path(),
            &os_names(&["a.jpg", "b.jpg"]),
            &modified_only(),
            &Reporter::silent(),
        );

        assert_eq!(stats.renamed, 1);
        assert_eq!(stats.failed, 1);

        let listing = sorted_listing(dir.path());
        assert_eq!(listing.len(), 2);
        assert!(listing.contains(&"b.jpg".to_string()));
        assert!(!listing.contains(&"a.jpg".to_string()));
    }

    #[test]
    fn test_collision_suffix_policy() {
        let dir = tempdir().unwrap();
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        for name in ["a.jpg", "b.jpg"] {
            let path = dir.path().join(name);
            fs::write(&path, name.as_bytes()).unwrap();
            set_modified(&path, time);
        }

        let config = RenameConfig {
            on_collision: CollisionPolicy::Suffix,
            ..modified_only()
        };
        let stats = rename_all(dir.path(), &os_names(&["a.jpg", "b.jpg"]), &config, &Reporter::silent());

        assert_eq!(stats.renamed, 2);
        let listing = sorted_listing(dir.path());
        assert_eq!(listing.len(), 2);
        assert!(listing.iter().all(|name| !name.starts_with(['a', 'b'])));
        assert!(listing.iter().any(|name| name.ends_with("_1.jpg")));
    }

    #[test]
    fn test_directory_run_is_idempotent() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("IMG_0001.jpg"),
            jpeg_with_capture_time("2018:06:14 22:00:00"),
        )
        .unwrap();
        fs::write(
            dir.path().join("IMG_0002.jpg"),
            jpeg_with_capture_time("2019:01:02 03:04:05"),
        )
        .unwrap();
        let note = dir.path().join("note.txt");
        fs::write(&note, b"plain").unwrap();
        set_modified(&note, SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000));
        fs::write(dir.path().join("desktop.ini"), b"[x]").unwrap();

        let config = modified_only();
        let first = rename_directory(dir.path(), &config, &Reporter::silent()).unwrap();
        assert_eq!(first.renamed, 3);
        let after_first = sorted_listing(dir.path());
        assert!(after_first.contains(&"20180614_220000.jpg".to_string()));
        assert!(after_first.contains(&"20190102_030405.jpg".to_string()));
        assert!(after_first.contains(&"desktop.ini".to_string()));

        let second = rename_directory(dir.path(), &config, &Reporter::silent()).unwrap();
        assert_eq!(second.renamed, 0);
        assert_eq!(second.unchanged, 3);
        assert_eq!(sorted_listing(dir.path()), after_first);
    }

    #[test]
    fn test_directory_run_drops_edited_originals_first() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("IMG_0001.jpg"),
            jpeg_with_capture_time("2018:06:14 22:00:00"),
        )
        .unwrap();
        fs::write(
            dir.path().join("IMG_0001(Edited).jpg"),
            jpeg_with_capture_time("2018:06:14 22:00:00"),
        )
        .unwrap();

        let config = RenameConfig {
            reduce_edited_duplicates: true,
            ..RenameConfig::default()
        };
        let stats = rename_directory(dir.path(), &config, &Reporter::silent()).unwrap();

        assert_eq!(stats.originals_removed, 1);
        assert_eq!(stats.renamed, 1);
        assert_eq!(stats.failed, 0);
        assert_eq!(sorted_listing(dir.path()), names(&["20180614_220000.jpg"]));
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = tempdir().unwrap();
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        for name in ["a.jpg", "b.jpg"] {
            let path = dir.path().join(name);
            fs::write(&path, name.as_bytes()).unwrap();
            set_modified(&path, time);
        }

        let config = RenameConfig {
            dry_run: true,
            ..modified_only()
        };
        let stats = rename_all(dir.path(), &os_names(&["a.jpg", "b.jpg"]), &config, &Reporter::silent());

        assert_eq!(stats.renamed, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(sorted_listing(dir.path()), names(&["a.jpg", "b.jpg"]));
    }

    #[test]
    fn test_denied_entry_is_skipped_defensively() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("boot.ini"), b"x").unwrap();
        fs::create_dir(dir.path().join("album")).unwrap();

        let stats = rename_all(
            dir.path(),
            &os_names(&["boot.ini", "album"]),
            &RenameConfig::default(),
            &Reporter::silent(),
        );

        assert_eq!(stats.skipped, 2);
        assert!(dir.path().join("boot.ini").exists());
        assert!(dir.path().join("album").is_dir());
    }

    #[test]
    fn test_suffix_policy_is_idempotent() {
        let dir = tempdir().unwrap();
        same_mtime_pair(dir.path());

        let config = RenameConfig {
            on_collision: CollisionPolicy::Suffix,
            ..modified_only()
        };
        let first = rename_directory(dir.path(), &config, &Reporter::silent()).unwrap();
        assert_eq!(first.renamed, 2);
        let after_first = sorted_listing(dir.path());
        assert!(after_first.iter().any(|name| name.ends_with("_1.jpg")));

        for _ in 0..2 {
            let again = rename_directory(dir.path(), &config, &Reporter::silent()).unwrap();
            assert_eq!(again.renamed, 0);
            assert_eq!(again.unchanged, 2);
            assert_eq!(again.failed, 0);
            assert_eq!(sorted_listing(dir.path()), after_first);
        }
    }

    #[test]
    fn test_default_fallback_order_is_idempotent() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("IMG_0001.jpg"),
            jpeg_with_capture_time("2018:06:14 22:00:00"),
        )
        .unwrap();
        fs::write(dir.path().join("note.txt"), b"plain").unwrap();
        fs::write(dir.path().join("clip.mov"), b"movie").unwrap();

        let config = RenameConfig {
            on_collision: CollisionPolicy::Suffix,
            ..RenameConfig::default()
        };
        let first = rename_directory(dir.path(), &config, &Reporter::silent()).unwrap();
        assert_eq!(first.renamed, 3);
        let after_first = sorted_listing(dir.path());
        assert!(after_first.contains(&"20180614_220000.jpg".to_string()));

        let second = rename_directory(dir.path(), &config, &Reporter::silent()).unwrap();
        assert_eq!(second.renamed, 0);
        assert_eq!(second.unchanged, 3);
        assert_eq!(sorted_listing(dir.path()), after_first);
    }

    #[test]
    fn test_rename_file_renames_hidden_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".photo.jpg");
        fs::write(&path, jpeg_with_capture_time("2018:06:14 22:00:00")).unwrap();

        let stats = rename_file(&path, &RenameConfig::default(), &Reporter::silent()).unwrap();

        assert_eq!(stats.renamed, 1);
        assert_eq!(stats.skipped, 0);
        assert_eq!(sorted_listing(dir.path()), names(&["20180614_220000.jpg"]));
    }

    #[test]
    fn test_directory_run_still_skips_hidden_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(".photo.jpg"),
            jpeg_with_capture_time("2018:06:14 22:00:00"),
        )
        .unwrap();

        let stats = rename_directory(dir.path(), &RenameConfig::default(), &Reporter::silent()).unwrap();

        assert_eq!(stats.renamed, 0);
        assert_eq!(stats.unchanged, 0);
        assert_eq!(sorted_listing(dir.path()), names(&[".photo.jpg"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_renamed() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let name = OsStr::from_bytes(b"IMG_\xff.jpg");
        fs::write(
            dir.path().join(name),
            jpeg_with_capture_time("2018:06:14 22:00:00"),
        )
        .unwrap();

        let stats = rename_directory(dir.path(), &RenameConfig::default(), &Reporter::silent()).unwrap();

        assert_eq!(stats.renamed, 1);
        assert_eq!(stats.skipped, 0);
        assert_eq!(sorted_listing(dir.path()), names(&["20180614_220000.jpg"]));
    }
}
