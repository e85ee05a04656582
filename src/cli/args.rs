//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// Angle between the hands of an analog clock
///
/// Prints the smaller angle, in degrees, between the hour and minute hands
/// at HOUR:MINUTE.
#[derive(Parser, Debug)]
#[command(name = "clockangle")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLOCKANGLE_CONFIG")]
    pub config: Option<String>,

    /// Reject out-of-range hour/minute instead of warning
    #[arg(long, global = true)]
    pub strict: bool,

    /// Hour on the dial (0-12)
    #[arg(required = true, allow_negative_numbers = true)]
    pub hour: Option<String>,

    /// Minute (0-60)
    #[arg(required = true, allow_negative_numbers = true)]
    pub minute: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format (`Angle  90.0`)
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Bare angle value
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
