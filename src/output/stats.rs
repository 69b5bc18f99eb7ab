//! Statistics reporting.

use console::style;

use crate::cleanup::CleanupOutcome;
use crate::rename::RenameStats;

/// Print statistics for a rename run.
pub fn print_rename_stats(stats: &RenameStats, dry_run: bool) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    if dry_run {
        println!("{}", style("Rename Statistics (dry run):").bold());
    } else {
        println!("{}", style("Rename Statistics:").bold());
    }
    println!("  Renamed:   {}", style(stats.renamed).green());
    println!("  Unchanged: {}", stats.unchanged);
    if stats.skipped > 0 {
        println!("  Skipped:   {}", stats.skipped);
    }
    if stats.failed > 0 {
        println!("  Failed:    {}", style(stats.failed).red());
    }
    println!(
        "  Timestamps: {} capture, {} filesystem, {} none",
        stats.from_capture,
        style(stats.from_filesystem).yellow(),
        stats.unresolved
    );
    if stats.originals_removed > 0 {
        println!(
            "  Originals removed: {} (edited variants kept)",
            stats.originals_removed
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}

/// Print the closing message of a cleanup run.
///
/// An aborted run prints nothing here; it surfaces as an error.
pub fn print_cleanup_outcome(outcome: &CleanupOutcome) {
    if matches!(outcome, CleanupOutcome::Aborted(_)) {
        return;
    }
    println!();

    match outcome {
        CleanupOutcome::NothingFound => {
            println!("{}", style("No files were found, you are lucky.").green());
        }
        CleanupOutcome::Removed { found, stats } => {
            println!(
                "{}",
                style(format!("Deleted {} of {} file(s). Now it looks cleaner.", stats.removed, found))
                    .green()
            );
            if stats.failed > 0 {
                println!("  Failed: {}", style(stats.failed).red());
            }
        }
        CleanupOutcome::Declined(count) => {
            println!(
                "{}",
                style(format!("OK, leaving {} file(s) where they are.", count)).yellow()
            );
        }
        CleanupOutcome::Aborted(_) => {}
    }
}
