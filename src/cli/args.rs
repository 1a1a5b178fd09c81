//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Usage
//!
//! ```text
//! pack-convert <INPUT> [OUTPUT]
//! ```
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--dry-run`: Convert without writing
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Errors only
//! - `--completions <shell>`: Print a completion script

use clap::Parser;
use std::path::PathBuf;

/// Usage line shown when the input path is missing.
pub const USAGE: &str = "Usage: pack-convert <INPUT> [OUTPUT]";

/// Convert template packs from keyed schema objects (v0.13) to schema arrays (v0.14+)
#[derive(Parser, Debug)]
#[command(name = "pack-convert")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Convert next to the input (writes core-converted.json)
    pack-convert core.json

    # Choose the destination
    pack-convert core.json packs/core.json

    # See what would happen without writing anything
    pack-convert --dry-run core.json

CONFIGURATION:
    $PACK_CONVERT_CONFIG, $XDG_CONFIG_HOME/pack-convert/config.toml or
    ~/.pack-convert/config.toml may set `output_suffix` and `quiet`.")]
pub struct Cli {
    /// Template pack to convert
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Destination file [default: <INPUT stem>-converted<INPUT extension>]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Convert and summarize without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output; only errors are printed
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
