//! pack-convert - Template pack format migration
//!
//! Converts template packs from the v0.13 layout, where
//! `object_type_schemas` and `relationship_type_schemas` are objects keyed by
//! type name, to the v0.14+ layout, where both are arrays of schemas that
//! carry their own `name`.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Schema types, conversion, pack file I/O, summary, config
//! - [`ui`] - User-facing output
//!
//! # Guarantees
//!
//! 1. Collections already in array form are never rewritten
//! 2. Fields outside the two collections pass through unchanged, in order
//! 3. Output is only written once the whole pack converted and summarized
//!
//! # Example
//!
//! ```no_run
//! use pack_convert::core::convert::{convert_pack, ConvertOptions};
//! use std::path::Path;
//!
//! let conversion = convert_pack(
//!     Path::new("core.json"),
//!     Path::new("core-converted.json"),
//!     &ConvertOptions::default(),
//! )
//! .unwrap();
//! println!("{}", conversion.summary);
//! ```

pub mod cli;
pub mod core;
pub mod ui;
