//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{CheckArgs, ComputeArgs, DatesArgs, ForwardPointsArgs};

/// cipfx - implied interest rates from FX swap quotes
#[derive(Parser)]
#[command(name = "cipfx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: table, or `[output] format` from the config]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "CIPFX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter implied by `-v`/`-q` when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute implied rates for every observation in a CSV file
    Compute(ComputeArgs),

    /// Show spot and forward value dates for a trade date
    Dates(DatesArgs),

    /// Show the joint calendar status of a date
    Check(CheckArgs),

    /// Fair forward points implied by both interest rates
    ForwardPoints(ForwardPointsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_directive() {
        let cli = Cli::parse_from(["cipfx", "-vv", "check", "2026-04-03"]);
        assert_eq!(cli.log_directive(), "trace");

        let cli = Cli::parse_from(["cipfx", "check", "2026-04-03", "--quiet"]);
        assert_eq!(cli.log_directive(), "error");

        let cli = Cli::parse_from(["cipfx", "check", "2026-04-03"]);
        assert_eq!(cli.log_directive(), "info");
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["cipfx", "--format", "json", "check", "2026-04-03"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
