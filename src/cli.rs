//! CLI argument definitions for reportcheck.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reportcheck")]
#[command(version)]
#[command(about = "Check student status report workbooks before submission", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    reportcheck check report.xlsx\n    reportcheck check report.xlsx -o results.json\n    reportcheck check report.xlsx --no-spelling --strict\n\nLogging goes to stderr and is controlled by RUST_LOG (e.g. RUST_LOG=reportcheck=debug)."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a report workbook
    Check {
        /// Workbook to check (xlsx, xlsm, xls, xlsb, ods)
        file: PathBuf,
        /// Save the results; a .json extension writes JSON, anything else text
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Skip score range and total checks
        #[arg(long)]
        no_scores: bool,
        /// Skip section length checks
        #[arg(long)]
        no_text: bool,
        /// Skip typo and style heuristics
        #[arg(long)]
        no_spelling: bool,
        /// Skip keyword and phrasing heuristics
        #[arg(long)]
        no_content: bool,
        /// Config file (default: ./reportcheck.yaml, then the user config dir)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Console output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Exit with status 1 when any error is found
        #[arg(long)]
        strict: bool,
    },
    /// Print the effective field catalog as YAML
    Catalog {
        /// Config file (default: ./reportcheck.yaml, then the user config dir)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
