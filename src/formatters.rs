//! Output formatters for validation runs
//!
//! Provides the JSON export and the plain-text report, and saves either to
//! disk. Terminal display lives in [`crate::ui`].

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::validation::{Severity, ValidationRun};

/// Report title written at the top of saved text reports
pub const REPORT_TITLE: &str = "Student report validation results";

const SEPARATOR_WIDTH: usize = 40;

/// Serialize findings as a JSON array of `{item, category, severity, message}`.
pub fn to_json(run: &ValidationRun) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&run.findings)
}

/// One-line severity totals.
pub fn format_summary(run: &ValidationRun) -> String {
    format!(
        "Errors: {}, Warnings: {}, Info: {}, Success: {}",
        run.counts.error, run.counts.warning, run.counts.info, run.counts.success
    )
}

/// Render findings grouped by severity, most serious first.
///
/// Severities with no findings are left out.
pub fn render_text(run: &ValidationRun) -> String {
    let mut output = vec![format_summary(run), String::new()];
    let separator = "-".repeat(SEPARATOR_WIDTH);

    for severity in Severity::DISPLAY_ORDER {
        let findings: Vec<_> = run.with_severity(severity).collect();
        if findings.is_empty() {
            continue;
        }

        output.push(format!("[{}] ({})", severity, findings.len()));
        for finding in findings {
            output.push(format!("Item: {}", finding.item));
            output.push(format!("Type: {}", finding.category));
            output.push(format!("Detail: {}", finding.message));
            output.push(separator.clone());
        }
        output.push(String::new());
    }

    output.join("\n")
}

/// Full text document: title, timestamp, source, then [`render_text`].
pub fn render_document(run: &ValidationRun, source: &str, generated_at: &str) -> String {
    format!(
        "{}\nGenerated: {}\nSource: {}\n{}\n\n{}",
        REPORT_TITLE,
        generated_at,
        source,
        "=".repeat(SEPARATOR_WIDTH),
        render_text(run)
    )
}

/// Save a run to `path`. A `.json` extension selects JSON, anything else
/// gets the text document.
pub fn write_report(path: &Path, run: &ValidationRun, source: &str) -> Result<()> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let content = if is_json {
        to_json(run).context("Failed to serialize findings")?
    } else {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        render_document(run, source, &now)
    };

    fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
