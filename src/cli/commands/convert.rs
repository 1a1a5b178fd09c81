//! convert - Convert a template pack to the array schema format

use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::cli::args::USAGE;
use crate::core::config::Config;
use crate::core::convert::{convert_pack, ConvertOptions};
use crate::core::errors::PackError;
use crate::core::pack_file::{default_output_path, same_file_path};
use crate::ui::output::{self, Verbosity};

/// Errors detected before the conversion starts.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing input path\n\n{}", USAGE)]
    MissingArgument,
}

/// Arguments for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub quiet: bool,
}

/// Convert a pack and print its summary.
pub fn convert(args: ConvertArgs) -> Result<()> {
    let input = args.input.ok_or(CliError::MissingArgument)?;

    let config = Config::load().context("failed to load configuration")?;
    if let Some(path) = config.loaded_from() {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let verbosity = Verbosity::from_quiet(args.quiet || config.quiet());
    let output_path = args
        .output
        .unwrap_or_else(|| default_output_path(&input, config.output_suffix()));

    if !args.dry_run && same_file_path(&output_path, &input) {
        output::warn(
            format!("overwriting {} in place", input.display()),
            verbosity,
        );
    }

    let options = ConvertOptions {
        dry_run: args.dry_run,
        verbosity,
    };

    let conversion = match convert_pack(&input, &output_path, &options) {
        Err(err @ PackError::NotFound { .. }) => return Err(err.into()),
        other => other.with_context(|| format!("failed to convert '{}'", input.display()))?,
    };

    output::print("", verbosity);
    output::print(&conversion.summary, verbosity);

    Ok(())
}
