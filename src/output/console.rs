//! Console output utilities.

use console::{style, StyledObject};

use crate::config::RenameConfig;

/// Severity tag printed in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> StyledObject<&'static str> {
        match self {
            Level::Info => style("INFO").cyan().bold(),
            Level::Success => style("OK").green().bold(),
            Level::Warning => style("WARN").yellow().bold(),
            Level::Error => style("ERROR").red().bold(),
        }
    }
}

/// Print a status line; errors go to stderr.
fn print_line(level: Level, message: &str) {
    match level {
        Level::Error => eprintln!("{} {}", level.tag(), message),
        _ => println!("{} {}", level.tag(), message),
    }
}

pub fn print_info(message: &str) {
    print_line(Level::Info, message);
}

pub fn print_success(message: &str) {
    print_line(Level::Success, message);
}

pub fn print_warning(message: &str) {
    print_line(Level::Warning, message);
}

pub fn print_error(message: &str) {
    print_line(Level::Error, message);
}

/// Print an indented, dimmed line under the previous message.
pub fn print_detail(message: &str) {
    println!("     {}", style(message).dim());
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
┌────────────────────────────────────────────┐
│  photo-tidy                                │
│  name photos by when they were taken       │
└────────────────────────────────────────────┘
"#;
    println!("{}", style(banner).cyan());
}

/// Print the options a rename run will use.
pub fn print_config_summary(mode: &str, target: &str, config: &RenameConfig) {
    let fallback: Vec<String> = config.fallback_order.iter().map(|s| s.to_string()).collect();

    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Mode: {}  Target: {}", mode, target);
    println!(
        "  Tag: {}  Separator: '{}'  Fallback: {}",
        config.timestamp_tag_id,
        config.separator,
        fallback.join(" → ")
    );
    println!("  On collision: {}", config.on_collision);
    if config.reduce_edited_duplicates {
        println!(
            "  {}",
            style(format!("Originals with a {} variant are deleted", config.edited_marker)).yellow()
        );
    }
    if config.dry_run {
        println!("  {}", style("Dry run: nothing will be changed").yellow());
    }
    println!();
}
