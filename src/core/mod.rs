//! core
//!
//! Pack model and conversion.
//!
//! # Modules
//!
//! - [`schema`] - Object and relationship schema types, collection shapes
//! - [`pack`] - In-memory pack document with opaque passthrough fields
//! - [`convert`] - Legacy to current conversion and the full pipeline
//! - [`pack_file`] - Reading and atomically writing pack files
//! - [`summary`] - Post-conversion validation summary
//! - [`config`] - Configuration schema and loading
//! - [`errors`] - Pack error taxonomy

pub mod config;
pub mod convert;
pub mod errors;
pub mod pack;
pub mod pack_file;
pub mod schema;
pub mod summary;
