//! photo-tidy - CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use photo_tidy::{
    cleanup::{resolve_root, run_cleanup, AssumeYes, ConsolePrompt, Prompt},
    cli::{Args, Command},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::{current_dir, home_dir},
    output::{
        print_banner, print_cleanup_outcome, print_config_summary, print_error, print_info,
        print_rename_stats, Reporter,
    },
    rename::{rename_directory, rename_file, RenameStats},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Aborted(_) => ExitCode::from(exit_codes::ABORT as u8),
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::PartialFailure(_) => ExitCode::from(exit_codes::SOME_FILES_FAILED as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    if !args.quiet {
        print_banner();
    }

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using defaults",
            args.config.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    match &args.command {
        Command::File { path } => run_rename(&config, path, false, args.quiet),
        Command::Directory { path } => run_rename(&config, path, true, args.quiet),
        Command::Clean { root, home, yes } => run_clean(&config, root.clone(), *home, *yes),
    }
}

/// Rename a file or every eligible file of a directory.
fn run_rename(config: &Config, path: &Path, directory: bool, quiet: bool) -> Result<()> {
    let rename = &config.rename;

    if !quiet {
        print_config_summary(
            if directory { "directory" } else { "file" },
            &path.display().to_string(),
            rename,
        );
    }

    let reporter = Reporter::from_config(rename);
    let stats: RenameStats = if directory {
        rename_directory(path, rename, &reporter)?
    } else {
        rename_file(path, rename, &reporter)?
    };

    print_rename_stats(&stats, rename.dry_run);

    if stats.failed > 0 {
        return Err(Error::PartialFailure(stats.failed as usize));
    }

    Ok(())
}

/// Find and remove hidden artifacts, asking where and whether to delete.
fn run_clean(config: &Config, root: Option<PathBuf>, home: bool, yes: bool) -> Result<()> {
    let mut prompt: Box<dyn Prompt> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(ConsolePrompt::stdin())
    };

    let root = match (root, home) {
        (Some(root), _) => root,
        (None, true) => home_dir()?,
        (None, false) => {
            let current = current_dir();
            let choice = prompt.choose_root(&current)?;
            resolve_root(choice, &current)?
                .ok_or_else(|| Error::Aborted("incorrect answer".to_string()))?
        }
    };

    print_info(&format!("Searching for hidden files in {}", root.display()));

    let outcome = run_cleanup(&root, &config.cleanup, prompt.as_mut())?;
    print_cleanup_outcome(&outcome);
    outcome.into_result()?;

    Ok(())
}
