//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$PACK_CONVERT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/pack-convert/config.toml`
//! 3. `~/.pack-convert/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing so a bad suffix is reported
//! before any pack is read.

use serde::Deserialize;

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// output_suffix = "-v14"
/// quiet = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Marker appended to the input stem when no output path is given
    pub output_suffix: Option<String>,

    /// Suppress progress and summary output by default
    pub quiet: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(suffix) = &self.output_suffix {
            if suffix.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "output_suffix cannot be empty".into(),
                ));
            }
            if suffix.contains('/') || suffix.contains('\\') {
                return Err(ConfigError::InvalidValue(format!(
                    "output_suffix '{}' cannot contain a path separator",
                    suffix
                )));
            }
        }

        Ok(())
    }
}
