//! JSON-backed entity records.
//!
//! A `Record` is one object from a collection exported by the dashboard's
//! REST API: a required id plus whatever attributes the endpoint returns.

use crate::model::{EntityId, FieldRegistry, FieldSpec, FieldValue, Identify, InvalidEntityId};
use serde_json::{Map, Value};

/// A dashboard entity with an open set of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: EntityId,
    attributes: Map<String, Value>,
}

impl Record {
    /// Build a record from a JSON object, taking the id from `id_field`.
    ///
    /// The id attribute stays in `attributes` so it can be displayed and
    /// filtered like any other field.
    pub fn from_object(attributes: Map<String, Value>, id_field: &str) -> Result<Self, RecordError> {
        let raw_id = attributes
            .get(id_field)
            .ok_or_else(|| RecordError::MissingId(id_field.to_string()))?;
        let id = EntityId::from_json(raw_id)?;
        Ok(Self { id, attributes })
    }

    /// Build a record from any JSON value. Non-objects are rejected.
    pub fn from_value(value: Value, id_field: &str) -> Result<Self, RecordError> {
        match value {
            Value::Object(map) => Self::from_object(map, id_field),
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// Read an attribute as a [`FieldValue`].
    ///
    /// Arrays and objects are rendered as compact JSON text.
    pub fn field(&self, name: &str) -> FieldValue {
        match self.attributes.get(name) {
            None => FieldValue::Missing,
            Some(Value::Null) => FieldValue::Null,
            Some(Value::Bool(b)) => FieldValue::Bool(*b),
            Some(Value::Number(n)) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            Some(Value::String(s)) => FieldValue::Text(s.clone()),
            Some(other) => FieldValue::Text(other.to_string()),
        }
    }

    /// Attribute keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// The raw JSON object.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Consume into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.attributes)
    }
}

impl Identify for Record {
    type Id = EntityId;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Registry entry reading a named attribute from a [`Record`].
pub fn record_field(name: impl Into<String>, label: impl Into<String>) -> FieldSpec<Record> {
    let name = name.into();
    let key = name.clone();
    FieldSpec::new(name, label, move |record: &Record| record.field(&key))
}

/// Registry of every attribute key seen across `records`, in first-seen order.
///
/// Labels are the keys themselves.
pub fn infer_fields(records: &[Record]) -> FieldRegistry<Record> {
    let mut registry = FieldRegistry::new();
    for record in records {
        for key in record.keys() {
            if registry.get(key).is_none() {
                registry.register(record_field(key, key));
            }
        }
    }
    registry
}

/// Why a JSON value could not become a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Collection entries must be JSON objects.
    #[error("entry is not a JSON object")]
    NotAnObject,
    /// The configured id attribute is absent.
    #[error("missing id field '{0}'")]
    MissingId(String),
    /// The id attribute is present but unusable.
    #[error("invalid id: {0}")]
    InvalidId(#[from] InvalidEntityId),
}
