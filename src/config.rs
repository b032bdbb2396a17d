//! Configuration management for the G-code export tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Input selection and output formatting

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the G-code export tool
#[derive(Debug, Parser)]
#[command(name = "gcode-export")]
#[command(about = "Export parsed G-code commands as JSON tuples")]
#[command(version)]
pub struct Args {
    /// G-code file to read (stdin when omitted)
    #[arg(long, short, help = "G-code file to read; defaults to stdin")]
    pub input: Option<PathBuf>,

    /// Pretty-print each exported command
    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    /// Print a JSON summary to stderr when done
    #[arg(long, help = "Print an export summary to stderr")]
    pub summary: bool,

    /// Log level for the export tool
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Input file; `None` reads stdin
    pub input: Option<PathBuf>,
    pub pretty: bool,
    pub summary: bool,
    /// Default log filter (RUST_LOG takes precedence)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            pretty: false,
            summary: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        if let Some(input) = &args.input {
            if !input.is_file() {
                anyhow::bail!("Input is not a readable file: {}", input.display());
            }
        }

        Ok(Config {
            input: args.input,
            pretty: args.pretty,
            summary: args.summary,
            log_level: args.log_level,
        })
    }
}
