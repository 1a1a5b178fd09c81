//! core::convert
//!
//! Legacy (keyed) to current (array) schema conversion.
//!
//! # Pipeline
//!
//! [`convert_pack`] runs a single linear pass:
//!
//! 1. Read and parse the input pack
//! 2. Convert `object_type_schemas`
//! 3. Convert `relationship_type_schemas`
//! 4. Summarize the converted pack
//! 5. Write the output (skipped on dry run)
//!
//! Collections already in array form are left untouched, so converting a
//! converted pack is a no-op.
//!
//! # Example
//!
//! ```
//! use pack_convert::core::convert::convert_object_schemas;
//! use serde_json::json;
//!
//! let legacy = json!({
//!     "Person": { "label": "Person", "icon": "user" }
//! });
//! let schemas = convert_object_schemas(legacy.as_object().unwrap()).unwrap();
//!
//! assert_eq!(schemas[0].name, "Person");
//! assert_eq!(
//!     serde_json::to_value(&schemas[0]).unwrap(),
//!     json!({ "name": "Person", "label": "Person" })
//! );
//! ```

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::errors::PackError;
use super::pack::Pack;
use super::pack_file;
use super::schema::{
    json_kind, LegacyOrCurrent, ObjectTypeSchema, RelationshipTypeSchema, TypeSchema,
};
use super::summary::PackSummary;
use crate::ui::output::{self, Verbosity};

/// Options for a conversion run.
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    /// Convert and summarize without writing the output file.
    pub dry_run: bool,
    /// Progress output level.
    pub verbosity: Verbosity,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            verbosity: Verbosity::Normal,
        }
    }
}

/// What happened to one schema collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionOutcome {
    /// Rewritten from a keyed object into an array.
    Converted { count: usize },
    /// Already an array; left as is.
    AlreadyCurrent { count: usize },
}

impl CollectionOutcome {
    pub fn count(&self) -> usize {
        match self {
            Self::Converted { count } | Self::AlreadyCurrent { count } => *count,
        }
    }
}

/// Per-collection outcomes of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    pub object_types: CollectionOutcome,
    pub relationship_types: CollectionOutcome,
}

/// Result of [`convert_pack`].
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The converted pack, as written.
    pub pack: Pack,
    pub report: ConversionReport,
    pub summary: PackSummary,
}

/// Convert legacy object type schemas to the array format.
///
/// Entries keep the legacy key order. Only `label`, `description` and
/// `properties` are carried over.
///
/// # Errors
///
/// Returns `PackError::MalformedSchemaEntry` if an entry is not an object.
pub fn convert_object_schemas(
    legacy: &Map<String, Value>,
) -> Result<Vec<ObjectTypeSchema>, PackError> {
    convert_legacy(legacy)
}

/// Convert legacy relationship type schemas to the array format.
///
/// Only `label`, `description`, `sourceTypes` and `targetTypes` are carried
/// over.
///
/// # Errors
///
/// Returns `PackError::MalformedSchemaEntry` if an entry is not an object.
pub fn convert_relationship_schemas(
    legacy: &Map<String, Value>,
) -> Result<Vec<RelationshipTypeSchema>, PackError> {
    convert_legacy(legacy)
}

fn convert_legacy<T: TypeSchema>(legacy: &Map<String, Value>) -> Result<Vec<T>, PackError> {
    legacy
        .iter()
        .map(|(name, entry)| {
            let entry = entry
                .as_object()
                .ok_or_else(|| PackError::MalformedSchemaEntry {
                    collection: T::COLLECTION,
                    name: name.clone(),
                    found: json_kind(entry),
                })?;

            for field in entry
                .keys()
                .filter(|k| !T::ALLOWED_FIELDS.contains(&k.as_str()))
            {
                debug!(collection = T::COLLECTION, entry = %name, field = %field, "dropping field");
            }

            Ok(T::from_legacy(name, entry))
        })
        .collect()
}

/// Convert one collection in place if it is still keyed.
pub fn convert_collection<T: TypeSchema>(
    collection: &mut LegacyOrCurrent,
) -> Result<CollectionOutcome, PackError> {
    match collection {
        LegacyOrCurrent::Current(items) => {
            debug!(collection = T::COLLECTION, count = items.len(), "already current");
            Ok(CollectionOutcome::AlreadyCurrent { count: items.len() })
        }
        LegacyOrCurrent::Legacy(map) => {
            let items = convert_legacy::<T>(map)?
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            let count = items.len();
            debug!(collection = T::COLLECTION, count, "converted legacy collection");
            *collection = LegacyOrCurrent::Current(items);
            Ok(CollectionOutcome::Converted { count })
        }
    }
}

/// Convert both schema collections of an in-memory pack.
pub fn convert_document(
    pack: &mut Pack,
    verbosity: Verbosity,
) -> Result<ConversionReport, PackError> {
    let object_types =
        convert_reporting::<ObjectTypeSchema>(pack.object_types_mut(), verbosity)?;
    let relationship_types =
        convert_reporting::<RelationshipTypeSchema>(pack.relationship_types_mut(), verbosity)?;

    Ok(ConversionReport {
        object_types,
        relationship_types,
    })
}

fn convert_reporting<T: TypeSchema>(
    collection: &mut LegacyOrCurrent,
    verbosity: Verbosity,
) -> Result<CollectionOutcome, PackError> {
    output::print(format!("Converting {}...", T::COLLECTION), verbosity);
    let outcome = convert_collection::<T>(collection)?;
    match outcome {
        CollectionOutcome::Converted { count } => {
            output::print(format!("  Converted {} {}", count, T::NOUN), verbosity)
        }
        CollectionOutcome::AlreadyCurrent { .. } => {
            output::print("  Already in array format, skipping", verbosity)
        }
    }
    Ok(outcome)
}

/// Convert the pack at `input_path` and write it to `output_path`.
///
/// The summary is built before the write, so a pack that cannot be
/// summarized leaves `output_path` untouched.
///
/// # Errors
///
/// Any [`PackError`]; every error aborts the run.
pub fn convert_pack(
    input_path: &Path,
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<Conversion, PackError> {
    let verbosity = options.verbosity;

    // A missing input fails before any progress output.
    if !input_path.exists() {
        return Err(PackError::NotFound {
            path: input_path.to_path_buf(),
        });
    }

    output::print(format!("Reading {}...", input_path.display()), verbosity);
    let mut pack = pack_file::read_pack(input_path)?;

    let report = convert_document(&mut pack, verbosity)?;
    let summary = PackSummary::from_pack(&pack)?;

    if options.dry_run {
        output::print(
            format!("Dry run: would write {}", output_path.display()),
            verbosity,
        );
    } else {
        output::print(format!("Writing {}...", output_path.display()), verbosity);
        pack_file::write_pack(output_path, &pack.to_value())?;
    }

    output::success("✓ Conversion complete", verbosity);

    Ok(Conversion {
        pack,
        report,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn quiet() -> ConvertOptions {
        ConvertOptions {
            dry_run: false,
            verbosity: Verbosity::Quiet,
        }
    }

    fn write_input(dir: &TempDir, value: Value) -> std::path::PathBuf {
        let path = dir.path().join("pack.json");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
        path
    }

    fn read_output(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    mod convert_object_schemas_fn {
        use super::*;

        #[test]
        fn empty_map_yields_empty_vec() {
            assert!(convert_object_schemas(&Map::new()).unwrap().is_empty());
        }

        #[test]
        fn keys_become_names_in_order() {
            let legacy = object(json!({
                "Zebra": {},
                "Apple": {"label": "Apple"},
                "Mango": {"description": "fruit"}
            }));

            let names: Vec<String> = convert_object_schemas(&legacy)
                .unwrap()
                .into_iter()
                .map(|s| s.name)
                .collect();
            assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
        }

        #[test]
        fn drops_fields_outside_allow_list() {
            let legacy = object(json!({
                "Person": {
                    "label": "Person",
                    "properties": {"age": "number"},
                    "sourceTypes": ["X"],
                    "color": "red"
                }
            }));

            let schemas = convert_object_schemas(&legacy).unwrap();
            assert_eq!(
                serde_json::to_value(&schemas[0]).unwrap(),
                json!({"name": "Person", "label": "Person", "properties": {"age": "number"}})
            );
        }

        #[test]
        fn non_object_entry_rejected() {
            let legacy = object(json!({"Person": {}, "Broken": "oops"}));

            let err = convert_object_schemas(&legacy).unwrap_err();
            match err {
                PackError::MalformedSchemaEntry {
                    collection,
                    name,
                    found,
                } => {
                    assert_eq!(collection, "object_type_schemas");
                    assert_eq!(name, "Broken");
                    assert_eq!(found, "a string");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    mod convert_relationship_schemas_fn {
        use super::*;

        #[test]
        fn copies_type_lists_and_drops_properties() {
            let legacy = object(json!({
                "KNOWS": {
                    "label": "knows",
                    "sourceTypes": ["Person"],
                    "targetTypes": ["Person"],
                    "properties": {"since": "date"}
                }
            }));

            let schemas = convert_relationship_schemas(&legacy).unwrap();
            assert_eq!(schemas.len(), 1);
            assert_eq!(
                serde_json::to_value(&schemas[0]).unwrap(),
                json!({
                    "name": "KNOWS",
                    "label": "knows",
                    "sourceTypes": ["Person"],
                    "targetTypes": ["Person"]
                })
            );
        }

        #[test]
        fn array_entry_rejected() {
            let legacy = object(json!({"R": ["Person"]}));
            let err = convert_relationship_schemas(&legacy).unwrap_err();
            assert!(err.to_string().contains("relationship_type_schemas"));
            assert!(err.to_string().contains("'R'"));
        }
    }

    mod convert_collection_fn {
        use super::*;

        #[test]
        fn current_left_untouched() {
            let items = vec![json!({"name": "A", "custom": true})];
            let mut collection = LegacyOrCurrent::Current(items.clone());

            let outcome = convert_collection::<ObjectTypeSchema>(&mut collection).unwrap();
            assert_eq!(outcome, CollectionOutcome::AlreadyCurrent { count: 1 });
            assert_eq!(collection, LegacyOrCurrent::Current(items));
        }

        #[test]
        fn legacy_replaced_with_array() {
            let mut collection = LegacyOrCurrent::Legacy(object(json!({"A": {"label": "a"}})));

            let outcome = convert_collection::<ObjectTypeSchema>(&mut collection).unwrap();
            assert_eq!(outcome, CollectionOutcome::Converted { count: 1 });
            assert_eq!(
                collection,
                LegacyOrCurrent::Current(vec![json!({"name": "A", "label": "a"})])
            );
        }

        #[test]
        fn second_pass_is_noop() {
            let mut collection = LegacyOrCurrent::Legacy(object(json!({"A": {}, "B": {}})));

            convert_collection::<RelationshipTypeSchema>(&mut collection).unwrap();
            let once = collection.clone();
            let outcome = convert_collection::<RelationshipTypeSchema>(&mut collection).unwrap();

            assert_eq!(outcome, CollectionOutcome::AlreadyCurrent { count: 2 });
            assert_eq!(collection, once);
        }
    }

    mod convert_pack_fn {
        use super::*;

        #[test]
        fn person_knows_scenario() {
            let temp = TempDir::new().unwrap();
            let input = write_input(
                &temp,
                json!({
                    "name": "P",
                    "version": "1",
                    "object_type_schemas": {
                        "Person": {"label": "Person", "properties": {"age": "number"}}
                    },
                    "relationship_type_schemas": {
                        "KNOWS": {"sourceTypes": ["Person"], "targetTypes": ["Person"]}
                    }
                }),
            );
            let output = temp.path().join("out.json");

            let conversion = convert_pack(&input, &output, &quiet()).unwrap();

            let written = read_output(&output);
            assert_eq!(
                written["object_type_schemas"],
                json!([{"name": "Person", "label": "Person", "properties": {"age": "number"}}])
            );
            assert_eq!(
                written["relationship_type_schemas"],
                json!([{"name": "KNOWS", "sourceTypes": ["Person"], "targetTypes": ["Person"]}])
            );
            assert_eq!(conversion.summary.object_types, 1);
            assert_eq!(conversion.summary.relationship_types, 1);
            assert_eq!(conversion.pack.to_value(), written);
        }

        #[test]
        fn current_shape_is_unchanged() {
            let temp = TempDir::new().unwrap();
            let source = json!({
                "name": "P",
                "version": "2",
                "object_type_schemas": [{"name": "A", "extra": 1}],
                "relationship_type_schemas": [{"name": "R"}]
            });
            let input = write_input(&temp, source.clone());
            let output = temp.path().join("out.json");

            let conversion = convert_pack(&input, &output, &quiet()).unwrap();

            assert_eq!(
                conversion.report,
                ConversionReport {
                    object_types: CollectionOutcome::AlreadyCurrent { count: 1 },
                    relationship_types: CollectionOutcome::AlreadyCurrent { count: 1 },
                }
            );
            assert_eq!(read_output(&output), source);
        }

        #[test]
        fn absent_collections_normalized() {
            let temp = TempDir::new().unwrap();
            let input = write_input(&temp, json!({"name": "P", "version": "1"}));
            let output = temp.path().join("out.json");

            convert_pack(&input, &output, &quiet()).unwrap();

            let written = read_output(&output);
            assert_eq!(written["object_type_schemas"], json!([]));
            assert_eq!(written["relationship_type_schemas"], json!([]));
        }

        #[test]
        fn empty_maps_become_empty_arrays() {
            let temp = TempDir::new().unwrap();
            let input = write_input(
                &temp,
                json!({
                    "name": "P",
                    "version": "1",
                    "object_type_schemas": {},
                    "relationship_type_schemas": {}
                }),
            );
            let output = temp.path().join("out.json");

            let conversion = convert_pack(&input, &output, &quiet()).unwrap();

            assert_eq!(conversion.report.object_types, CollectionOutcome::Converted { count: 0 });
            let written = read_output(&output);
            assert_eq!(written["object_type_schemas"], json!([]));
            assert_eq!(written["relationship_type_schemas"], json!([]));
        }

        #[test]
        fn passthrough_fields_preserved() {
            let temp = TempDir::new().unwrap();
            let input = write_input(
                &temp,
                json!({
                    "name": "P",
                    "version": "1",
                    "author": {"email": "a@b.c"},
                    "object_type_schemas": {},
                    "ui_configs": {"Person": {"icon": "user"}}
                }),
            );
            let output = temp.path().join("out.json");

            convert_pack(&input, &output, &quiet()).unwrap();

            let written = read_output(&output);
            assert_eq!(written["author"], json!({"email": "a@b.c"}));
            assert_eq!(written["ui_configs"], json!({"Person": {"icon": "user"}}));
            let keys: Vec<&str> = written
                .as_object()
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect();
            assert_eq!(
                keys,
                vec![
                    "name",
                    "version",
                    "author",
                    "object_type_schemas",
                    "ui_configs",
                    "relationship_type_schemas"
                ]
            );
        }

        #[test]
        fn dry_run_writes_nothing() {
            let temp = TempDir::new().unwrap();
            let input = write_input(
                &temp,
                json!({"name": "P", "version": "1", "object_type_schemas": {"A": {}}}),
            );
            let output = temp.path().join("out.json");
            let options = ConvertOptions {
                dry_run: true,
                verbosity: Verbosity::Quiet,
            };

            let conversion = convert_pack(&input, &output, &options).unwrap();

            assert!(!output.exists());
            assert_eq!(conversion.summary.object_types, 1);
        }

        #[test]
        fn missing_name_writes_nothing() {
            let temp = TempDir::new().unwrap();
            let input = write_input(&temp, json!({"version": "1", "object_type_schemas": {}}));
            let output = temp.path().join("out.json");

            let err = convert_pack(&input, &output, &quiet()).unwrap_err();

            assert!(matches!(err, PackError::MissingRequiredField("name")));
            assert!(!output.exists());
        }

        #[test]
        fn missing_input_writes_nothing() {
            let temp = TempDir::new().unwrap();
            let input = temp.path().join("nope.json");
            let output = temp.path().join("out.json");

            let err = convert_pack(&input, &output, &quiet()).unwrap_err();

            assert!(matches!(err, PackError::NotFound { .. }));
            assert!(!output.exists());
        }

        #[test]
        fn malformed_entry_writes_nothing() {
            let temp = TempDir::new().unwrap();
            let input = write_input(
                &temp,
                json!({"name": "P", "version": "1", "object_type_schemas": {"A": 42}}),
            );
            let output = temp.path().join("out.json");

            let err = convert_pack(&input, &output, &quiet()).unwrap_err();

            assert!(matches!(err, PackError::MalformedSchemaEntry { .. }));
            assert!(!output.exists());
        }

        #[test]
        fn in_place_overwrite() {
            let temp = TempDir::new().unwrap();
            let input = write_input(
                &temp,
                json!({"name": "P", "version": "1", "object_type_schemas": {"A": {}}}),
            );

            convert_pack(&input, &input, &quiet()).unwrap();

            assert_eq!(read_output(&input)["object_type_schemas"], json!([{"name": "A"}]));
        }

        #[test]
        fn input_named_like_temp_file_survives() {
            let temp = TempDir::new().unwrap();
            let source = r#"{"name":"P","version":"1","object_type_schemas":{"A":{}}}"#;
            let input = temp.path().join("p.json.tmp");
            fs::write(&input, source).unwrap();
            let output = temp.path().join("p.json");

            convert_pack(&input, &output, &quiet()).unwrap();

            assert_eq!(fs::read_to_string(&input).unwrap(), source);
            assert_eq!(read_output(&output)["object_type_schemas"], json!([{"name": "A"}]));
        }
    }
}
