//! core::errors
//!
//! Error taxonomy for pack conversion.
//!
//! Every variant is fatal to a conversion run. Nothing is retried and no
//! partial output is left behind: writes are committed atomically and only
//! after the document has been fully converted and summarized.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading, converting, summarizing, or writing a pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// The input path does not exist.
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read pack file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not JSON, or not shaped like a pack.
    #[error("malformed pack document: {0}")]
    MalformedDocument(String),

    /// A legacy collection entry is not a JSON object.
    #[error("malformed {collection} entry '{name}': expected an object, found {found}")]
    MalformedSchemaEntry {
        collection: &'static str,
        name: String,
        found: &'static str,
    },

    /// A field the summary depends on is absent after conversion.
    #[error("missing required field '{0}'")]
    MissingRequiredField(&'static str),

    #[error("failed to write pack file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize pack: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for PackError {
    fn from(err: serde_json::Error) -> Self {
        PackError::Serialize(err.to_string())
    }
}
