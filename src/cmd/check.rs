//! `reportcheck check`: load a workbook, run the checks, show and save the
//! results.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use reportcheck::config::Config;
use reportcheck::formatters;
use reportcheck::ui;
use reportcheck::validation::{CheckCategory, ValidationRun};
use reportcheck::{run_validation, workbook};

use crate::cli::OutputFormat;

/// Options collected from the command line.
pub struct CheckOptions {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    /// Categories switched off with `--no-*` flags
    pub disabled: Vec<CheckCategory>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
}

/// Categories that run: enabled in config and not disabled on the command
/// line.
pub fn effective_categories(config: &Config, disabled: &[CheckCategory]) -> Vec<CheckCategory> {
    let mut checks = config.checks.clone();
    for category in disabled {
        checks.disable(*category);
    }
    checks.enabled()
}

/// Status lines go to stdout only for interactive text output.
fn shows_progress(quiet: bool, format: OutputFormat) -> bool {
    !quiet && format == OutputFormat::Text
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn cmd_check(opts: &CheckOptions) -> Result<()> {
    let config = Config::load(opts.config.as_deref())?;
    let categories = effective_categories(&config, &opts.disabled);

    let progress = shows_progress(ui::is_quiet(), opts.format);
    if categories.is_empty() && progress {
        println!("{} All checks are disabled", "⚠".yellow());
    }

    let grid = workbook::load_grid(&opts.file)?;
    let source = source_name(&opts.file);

    if progress {
        let names: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
        println!(
            "{} Checking {} ({})",
            "→".cyan(),
            source.cyan(),
            names.join(", ")
        );
    }

    let run = run_validation(&grid, &config.catalog, &categories);
    info!(source = %source, findings = run.findings.len(), "checked report");

    match opts.format {
        OutputFormat::Text => ui::print_run(&run),
        OutputFormat::Json => {
            println!("{}", formatters::to_json(&run).context("Failed to serialize findings")?)
        }
    }

    if let Some(output) = &opts.output {
        formatters::write_report(output, &run, &source)?;
        if progress {
            println!(
                "\n{} Results saved to {}",
                "✓".green(),
                output.display().to_string().cyan()
            );
        }
    }

    exit_if_strict(&run, opts.strict);
    Ok(())
}

fn exit_if_strict(run: &ValidationRun, strict: bool) {
    if strict && run.has_errors() {
        std::process::exit(1);
    }
}
