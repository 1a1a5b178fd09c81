//! core::schema
//!
//! Schema types for template packs.
//!
//! # Formats
//!
//! A pack carries two schema collections, `object_type_schemas` and
//! `relationship_type_schemas`. Each collection is in exactly one shape:
//!
//! - **Legacy** (v0.13): an object keyed by type name, whose values do not
//!   carry their own name.
//! - **Current** (v0.14+): an array of schema objects, each with a `name`.
//!
//! The shape is decided once, when the pack is parsed, into a
//! [`LegacyOrCurrent`] value.
//!
//! # Example
//!
//! ```
//! use pack_convert::core::schema::{LegacyOrCurrent, OBJECT_TYPE_SCHEMAS};
//! use serde_json::json;
//!
//! let legacy = LegacyOrCurrent::from_field(
//!     OBJECT_TYPE_SCHEMAS,
//!     Some(json!({ "Person": { "label": "Person" } })),
//! )
//! .unwrap();
//! assert!(legacy.is_legacy());
//!
//! let missing = LegacyOrCurrent::from_field(OBJECT_TYPE_SCHEMAS, None).unwrap();
//! assert_eq!(missing.len(), 0);
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::PackError;

/// Document key for object type schemas.
pub const OBJECT_TYPE_SCHEMAS: &str = "object_type_schemas";

/// Document key for relationship type schemas.
pub const RELATIONSHIP_TYPE_SCHEMAS: &str = "relationship_type_schemas";

/// A schema kind that can be built from a legacy keyed entry.
pub trait TypeSchema: Serialize + Sized {
    /// Document key of the collection holding this kind.
    const COLLECTION: &'static str;

    /// Plural noun used in progress output ("object types").
    const NOUN: &'static str;

    /// Legacy fields carried over. Everything else is dropped.
    const ALLOWED_FIELDS: &'static [&'static str];

    /// Build a schema from a legacy entry keyed by `name`.
    fn from_legacy(name: &str, entry: &Map<String, Value>) -> Self;
}

/// One object type in the current format.
///
/// Optional fields hold their legacy value verbatim. A field present with
/// a `null` value stays present as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectTypeSchema {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

impl TypeSchema for ObjectTypeSchema {
    const COLLECTION: &'static str = OBJECT_TYPE_SCHEMAS;
    const NOUN: &'static str = "object types";
    const ALLOWED_FIELDS: &'static [&'static str] = &["label", "description", "properties"];

    fn from_legacy(name: &str, entry: &Map<String, Value>) -> Self {
        Self {
            name: name.to_string(),
            label: entry.get("label").cloned(),
            description: entry.get("description").cloned(),
            properties: entry.get("properties").cloned(),
        }
    }
}

/// One relationship type in the current format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipTypeSchema {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    /// Object type names allowed at the source end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_types: Option<Value>,

    /// Object type names allowed at the target end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_types: Option<Value>,
}

impl TypeSchema for RelationshipTypeSchema {
    const COLLECTION: &'static str = RELATIONSHIP_TYPE_SCHEMAS;
    const NOUN: &'static str = "relationship types";
    const ALLOWED_FIELDS: &'static [&'static str] =
        &["label", "description", "sourceTypes", "targetTypes"];

    fn from_legacy(name: &str, entry: &Map<String, Value>) -> Self {
        Self {
            name: name.to_string(),
            label: entry.get("label").cloned(),
            description: entry.get("description").cloned(),
            source_types: entry.get("sourceTypes").cloned(),
            target_types: entry.get("targetTypes").cloned(),
        }
    }
}

/// Shape of a schema collection, decided at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyOrCurrent {
    /// Keyed by type name, in document order.
    Legacy(Map<String, Value>),
    /// Already an array of named schemas. Never rewritten.
    Current(Vec<Value>),
}

impl LegacyOrCurrent {
    /// Decide the shape of the collection stored under `field`.
    ///
    /// An absent or `null` collection is an empty legacy map, so it
    /// normalizes to an empty array on conversion.
    ///
    /// # Errors
    ///
    /// Returns `PackError::MalformedDocument` if the value is a scalar.
    pub fn from_field(field: &'static str, value: Option<Value>) -> Result<Self, PackError> {
        match value {
            None | Some(Value::Null) => Ok(Self::Legacy(Map::new())),
            Some(Value::Object(map)) => Ok(Self::Legacy(map)),
            Some(Value::Array(items)) => Ok(Self::Current(items)),
            Some(other) => Err(PackError::MalformedDocument(format!(
                "'{}' must be an object or an array, found {}",
                field,
                json_kind(&other)
            ))),
        }
    }

    /// Check if the collection still needs conversion.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    /// Number of schemas in the collection.
    pub fn len(&self) -> usize {
        match self {
            Self::Legacy(map) => map.len(),
            Self::Current(items) => items.len(),
        }
    }

    /// Check if the collection holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert back into a plain JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Legacy(map) => Value::Object(map.clone()),
            Self::Current(items) => Value::Array(items.clone()),
        }
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
