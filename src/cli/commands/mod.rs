//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Validates its arguments
//! 2. Calls into [`crate::core`] to do the work
//! 3. Formats and displays output

mod completion;
mod convert;

pub use completion::completion;
pub use convert::{convert, CliError, ConvertArgs};

use crate::cli::args::Cli;
use anyhow::Result;

/// Dispatch parsed arguments to the matching handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return completion(shell);
    }

    convert(ConvertArgs {
        input: cli.input,
        output: cli.output,
        dry_run: cli.dry_run,
        quiet: cli.quiet,
    })
}
