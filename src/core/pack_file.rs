//! core::pack_file
//!
//! Reading and writing pack files.
//!
//! # Output Format
//!
//! Packs are written as pretty-printed JSON with 2-space indentation and a
//! trailing newline. Field order follows the in-memory document, which in
//! turn follows the source file.
//!
//! # Atomicity
//!
//! Writes go to a uniquely named temporary file in the destination
//! directory, which is synced and then renamed over the destination. A
//! failed write never leaves a truncated pack or a stray temporary file.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use super::errors::PackError;
use super::pack::Pack;

/// Marker inserted between the input stem and extension by default.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-converted";

/// Read and parse a pack file.
///
/// # Errors
///
/// - `PackError::NotFound` if `path` does not exist
/// - `PackError::Read` if it cannot be read
/// - `PackError::MalformedDocument` if it is not a JSON pack
pub fn read_pack(path: &Path) -> Result<Pack, PackError> {
    if !path.exists() {
        return Err(PackError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read(path).map_err(|e| PackError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_slice(&contents).map_err(|e| {
        PackError::MalformedDocument(format!("'{}' is not valid JSON: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "parsed pack file");
    Pack::from_value(value)
}

/// Write a pack document atomically.
///
/// Creates parent directories if needed and overwrites any existing file.
/// The temporary file gets a fresh name in the destination directory and
/// is removed if anything fails before the final rename.
pub fn write_pack(path: &Path, document: &Value) -> Result<(), PackError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| PackError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut contents = serde_json::to_string_pretty(document)?;
    contents.push('\n');

    let mut file = NamedTempFile::new_in(parent).map_err(|e| PackError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(contents.as_bytes()).map_err(|e| PackError::Write {
        path: file.path().to_path_buf(),
        source: e,
    })?;

    file.as_file().sync_all().map_err(|e| PackError::Write {
        path: file.path().to_path_buf(),
        source: e,
    })?;

    file.persist(path).map_err(|e| PackError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote pack file");
    Ok(())
}

/// Check if two paths name the same file, whether or not it exists yet.
///
/// Parents are canonicalized, so `./pack.json` and `pack.json` match.
/// Falls back to a literal comparison when a parent cannot be resolved.
pub fn same_file_path(a: &Path, b: &Path) -> bool {
    fn resolve(path: &Path) -> Option<PathBuf> {
        let name = path.file_name()?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Some(parent.canonicalize().ok()?.join(name))
    }

    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Compute the default destination for `input`.
///
/// Returns `<dir>/<stem><suffix><.ext>`, e.g. `packs/core.json` becomes
/// `packs/core-converted.json`. An input without an extension gets none.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = input.file_stem().unwrap_or_default().to_os_string();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
