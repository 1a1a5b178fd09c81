//! core::summary
//!
//! Post-conversion validation summary.
//!
//! The summary is built from the converted pack before anything is written,
//! so a pack missing its identity fields fails the run with no output file.

use std::fmt;

use serde_json::Value;

use super::errors::PackError;
use super::pack::Pack;
use super::schema::{LegacyOrCurrent, OBJECT_TYPE_SCHEMAS, RELATIONSHIP_TYPE_SCHEMAS};

/// Identity and schema counts of a converted pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    pub name: String,
    pub version: String,
    pub object_types: usize,
    pub relationship_types: usize,
}

impl PackSummary {
    /// Summarize a converted pack.
    ///
    /// # Errors
    ///
    /// Returns `PackError::MissingRequiredField` if `name` or `version` is
    /// absent, or if a schema collection has not been converted to an array.
    pub fn from_pack(pack: &Pack) -> Result<Self, PackError> {
        Ok(Self {
            name: required_display(pack, "name")?,
            version: required_display(pack, "version")?,
            object_types: converted_len(pack.object_types(), OBJECT_TYPE_SCHEMAS)?,
            relationship_types: converted_len(
                pack.relationship_types(),
                RELATIONSHIP_TYPE_SCHEMAS,
            )?,
        })
    }
}

impl fmt::Display for PackSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation:")?;
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Version: {}", self.version)?;
        writeln!(f, "  Object types: {}", self.object_types)?;
        write!(f, "  Relationship types: {}", self.relationship_types)
    }
}

/// Strings display bare; anything else as compact JSON.
fn required_display(pack: &Pack, key: &'static str) -> Result<String, PackError> {
    match pack.field(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(PackError::MissingRequiredField(key)),
    }
}

fn converted_len(collection: &LegacyOrCurrent, key: &'static str) -> Result<usize, PackError> {
    match collection {
        LegacyOrCurrent::Current(items) => Ok(items.len()),
        LegacyOrCurrent::Legacy(_) => Err(PackError::MissingRequiredField(key)),
    }
}
