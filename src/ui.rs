//! Centralized UI formatting and color utilities
//!
//! Severity colors and icons for terminal output, plus the console view of
//! a validation run.

use colored::{ColoredString, Colorize};

use crate::validation::{Finding, Severity, ValidationRun};

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("REPORTCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Disable colors when stdout is not a terminal.
pub fn configure_colors() {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

/// Returns a colored icon for the given severity.
///
/// Icons:
/// - Error: ✗ (red)
/// - Warning: ⚠ (yellow)
/// - Info: ℹ (blue)
/// - Success: ✓ (green)
pub fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "✗".red(),
        Severity::Warning => "⚠".yellow(),
        Severity::Info => "ℹ".blue(),
        Severity::Success => "✓".green(),
    }
}

/// Severity name in its display color.
pub fn severity_label(severity: Severity) -> ColoredString {
    let label = severity.to_string();
    match severity {
        Severity::Error => label.red().bold(),
        Severity::Warning => label.yellow().bold(),
        Severity::Info => label.blue(),
        Severity::Success => label.green().bold(),
    }
}

/// Colored one-line severity totals.
pub fn format_counts(run: &ValidationRun) -> String {
    Severity::DISPLAY_ORDER
        .iter()
        .map(|severity| {
            format!(
                "{} {}: {}",
                severity_icon(*severity),
                severity_label(*severity),
                run.counts.get(*severity)
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a single finding as a block of console lines.
pub fn format_finding(finding: &Finding) -> String {
    format!(
        "{} {} {}\n    {}",
        severity_icon(finding.severity),
        finding.item.cyan(),
        format!("[{}]", finding.category).dimmed(),
        finding.message
    )
}

/// Print a run to stdout, most serious findings first.
pub fn print_run(run: &ValidationRun) {
    println!("{}", format_counts(run));
    println!();
    for finding in run.sorted_for_display() {
        println!("{}", format_finding(finding));
    }
}
