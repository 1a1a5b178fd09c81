//! core::pack
//!
//! In-memory template pack document.
//!
//! # Passthrough
//!
//! Only the two schema collections are interpreted. Every other top-level
//! field (`name`, `version`, and anything else) is kept as an opaque JSON
//! value in its original position and written back unchanged.

use serde_json::{Map, Value};

use super::errors::PackError;
use super::schema::{json_kind, LegacyOrCurrent, OBJECT_TYPE_SCHEMAS, RELATIONSHIP_TYPE_SCHEMAS};

/// A parsed template pack.
///
/// # Invariants
///
/// - `fields` keeps the document's top-level field order
/// - A collection present in the source keeps its slot in `fields`
///   (holding a `null` placeholder while parsed out)
#[derive(Debug, Clone, PartialEq)]
pub struct Pack {
    fields: Map<String, Value>,
    object_types: LegacyOrCurrent,
    relationship_types: LegacyOrCurrent,
}

impl Pack {
    /// Parse a pack from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `PackError::MalformedDocument` if the value is not an object
    /// or a schema collection is neither an object nor an array.
    pub fn from_value(value: Value) -> Result<Self, PackError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(PackError::MalformedDocument(format!(
                    "top level must be an object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let object_types = LegacyOrCurrent::from_field(
            OBJECT_TYPE_SCHEMAS,
            fields.get_mut(OBJECT_TYPE_SCHEMAS).map(Value::take),
        )?;
        let relationship_types = LegacyOrCurrent::from_field(
            RELATIONSHIP_TYPE_SCHEMAS,
            fields.get_mut(RELATIONSHIP_TYPE_SCHEMAS).map(Value::take),
        )?;

        Ok(Self {
            fields,
            object_types,
            relationship_types,
        })
    }

    /// Render the pack as a JSON value.
    ///
    /// Collections absent from the source are appended after the other
    /// fields, object types first.
    pub fn to_value(&self) -> Value {
        let mut fields = self.fields.clone();
        fields.insert(
            OBJECT_TYPE_SCHEMAS.to_string(),
            self.object_types.to_value(),
        );
        fields.insert(
            RELATIONSHIP_TYPE_SCHEMAS.to_string(),
            self.relationship_types.to_value(),
        );
        Value::Object(fields)
    }

    /// Get a passthrough top-level field.
    ///
    /// The schema collections are not reachable through this accessor.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match key {
            OBJECT_TYPE_SCHEMAS | RELATIONSHIP_TYPE_SCHEMAS => None,
            _ => self.fields.get(key),
        }
    }

    pub fn object_types(&self) -> &LegacyOrCurrent {
        &self.object_types
    }

    pub fn object_types_mut(&mut self) -> &mut LegacyOrCurrent {
        &mut self.object_types
    }

    pub fn relationship_types(&self) -> &LegacyOrCurrent {
        &self.relationship_types
    }

    pub fn relationship_types_mut(&mut self) -> &mut LegacyOrCurrent {
        &mut self.relationship_types
    }
}
