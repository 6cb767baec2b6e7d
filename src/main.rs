//! CLI entry point for reportcheck.

mod cli;
mod cmd;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use reportcheck::validation::CheckCategory;

fn main() -> Result<()> {
    // Spawn the real work on a thread with a larger stack size.
    // Windows defaults to a 1MB stack; 8MB matches the Linux default.
    const STACK_SIZE: usize = 8 * 1024 * 1024; // 8 MB

    let thread = std::thread::Builder::new()
        .stack_size(STACK_SIZE)
        .spawn(run)
        .context("failed to spawn main thread")?;

    match thread.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

/// Logs go to stderr so they never mix with report output on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    reportcheck::ui::configure_colors();

    if cli.quiet {
        std::env::set_var("REPORTCHECK_QUIET", "1");
    }

    match cli.command {
        Commands::Check {
            file,
            output,
            no_scores,
            no_text,
            no_spelling,
            no_content,
            config,
            format,
            strict,
        } => {
            let disabled: Vec<CheckCategory> = [
                (no_scores, CheckCategory::Score),
                (no_text, CheckCategory::TextLength),
                (no_spelling, CheckCategory::Spelling),
                (no_content, CheckCategory::Content),
            ]
            .into_iter()
            .filter_map(|(off, category)| off.then_some(category))
            .collect();

            cmd::check::cmd_check(&cmd::check::CheckOptions {
                file,
                output,
                disabled,
                config,
                format,
                strict,
            })
        }
        Commands::Catalog { config } => cmd::catalog::cmd_catalog(config.as_deref()),
        Commands::Completions { shell } => cmd_completion(shell),
    }
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "reportcheck", &mut io::stdout());
    Ok(())
}
