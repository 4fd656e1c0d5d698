use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "stylelint orchestrator - policy-enforcement stylesheet scanning")]
#[command(long_about = "Runs an installed stylelint against a source tree, full or incremental,\n\
    and normalizes its output into structured issue records.\n\n\
    Exit codes:\n  \
    0 - Scan completed with no issues\n  \
    1 - Issues found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading the task configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan stylesheets and report issues
    Check(CheckArgs),

    /// Resolve and print the effective stylelint rule config
    Rules(RulesArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Directory containing the stylesheets to scan
    #[arg(default_value = ".")]
    pub source_dir: PathBuf,

    /// Path to the task configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the resolved rule config and the output capture
    /// (defaults to the current directory)
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Scan only files changed since a git reference (incremental scan).
    /// Accepts `ref`, `base..target`, or `base..`
    #[arg(long)]
    pub diff: Option<String>,

    /// Rule allow-list (comma-separated rule-ids; overrides config)
    #[arg(long, value_delimiter = ',')]
    pub rules: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format (overrides config) [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Path to the task configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the resolved rule config
    /// (defaults to the current directory)
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Rule allow-list (comma-separated rule-ids; overrides config)
    #[arg(long, value_delimiter = ',')]
    pub rules: Option<Vec<String>>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
