//! cli
//!
//! Command-line interface layer for pack-convert.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Install the diagnostic logger
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and hands off to
//! [`crate::core::convert`], which owns reading, converting and writing.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);
    commands::dispatch(cli)
}

/// Install a stderr logger.
///
/// `RUST_LOG` wins when set; otherwise `--debug` enables this crate's debug
/// events and everything else stays at `warn`.
fn init_tracing(debug: bool) {
    let fallback = if debug { "warn,pack_convert=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
