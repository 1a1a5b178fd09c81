//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$PACK_CONVERT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/pack-convert/config.toml`
//! 3. `~/.pack-convert/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use pack_convert::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Output suffix: {}", config.output_suffix());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::pack_file::DEFAULT_OUTPUT_SUFFIX;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PACK_CONVERT_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// holds invalid values. Missing config files are not an error.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::candidate_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Config file locations, in search order.
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("pack-convert/config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".pack-convert/config.toml"));
        }

        paths
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the default output suffix.
    ///
    /// Defaults to "-converted" if not configured.
    pub fn output_suffix(&self) -> &str {
        self.global
            .output_suffix
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_SUFFIX)
    }

    /// Check if quiet mode is enabled by default.
    ///
    /// Defaults to `false` if not configured.
    pub fn quiet(&self) -> bool {
        self.global.quiet.unwrap_or(false)
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
