//! Entity identity.
//!
//! The list engine is generic over any type that can name itself with a
//! unique, ordered identifier. Everything else about an entity is reached
//! through the accessors held in a [`FieldRegistry`](crate::model::FieldRegistry).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Capability required of every entity shown by a list.
///
/// `Id` must be totally ordered so selections and bulk actions report ids
/// in a stable order.
pub trait Identify {
    /// Identifier type.
    type Id: Clone + Eq + Hash + Ord + fmt::Debug;

    /// The entity's unique identifier within its collection.
    fn id(&self) -> &Self::Id;
}

/// Identifier of a dashboard entity as delivered by the REST API.
///
/// The backend uses integer keys for most resources and string keys for a
/// few (e.g. review codes). Integers order before text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    /// Numeric primary key.
    Int(i64),
    /// Opaque string key. Never empty.
    Text(String),
}

impl EntityId {
    /// Smart constructor for a textual id. Rejects empty and whitespace-only strings.
    pub fn text(raw: impl Into<String>) -> Result<Self, InvalidEntityId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidEntityId::Empty)
        } else {
            Ok(Self::Text(s))
        }
    }

    /// Convert a JSON value into an id.
    ///
    /// Accepts integers and non-empty strings. Floats, booleans, null,
    /// arrays and objects are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidEntityId> {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .ok_or_else(|| InvalidEntityId::NotAnInteger(n.to_string())),
            serde_json::Value::String(s) => Self::text(s.clone()),
            other => Err(InvalidEntityId::WrongType(json_type_name(other))),
        }
    }

    /// Convert back into a JSON value (used when writing records out).
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            EntityId::Int(n) => serde_json::Value::from(*n),
            EntityId::Text(s) => serde_json::Value::from(s.clone()),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ===== Error Types =====

/// Reasons a value cannot serve as an entity id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEntityId {
    /// Empty or whitespace-only string.
    #[error("Entity ID cannot be empty")]
    Empty,
    /// A JSON number that is not representable as `i64`.
    #[error("Entity ID must be an integer, got {0}")]
    NotAnInteger(String),
    /// A JSON value of an unsupported type.
    #[error("Entity ID must be a string or integer, got {0}")]
    WrongType(&'static str),
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_id_rejects_empty_string() {
        assert_eq!(EntityId::text(""), Err(InvalidEntityId::Empty));
        assert_eq!(EntityId::text("   "), Err(InvalidEntityId::Empty));
    }

    #[test]
    fn text_id_keeps_original_value() {
        let id = EntityId::text("rev-7").expect("valid id");
        assert_eq!(id.to_string(), "rev-7");
    }

    #[test]
    fn from_json_accepts_integer_and_string() {
        assert_eq!(EntityId::from_json(&json!(42)), Ok(EntityId::Int(42)));
        assert_eq!(
            EntityId::from_json(&json!("q-1")),
            Ok(EntityId::Text("q-1".to_string()))
        );
    }

    #[test]
    fn from_json_rejects_float_and_null() {
        assert!(matches!(
            EntityId::from_json(&json!(1.5)),
            Err(InvalidEntityId::NotAnInteger(_))
        ));
        assert_eq!(
            EntityId::from_json(&json!(null)),
            Err(InvalidEntityId::WrongType("null"))
        );
    }

    #[test]
    fn integers_order_before_text() {
        let mut ids = vec![
            EntityId::Text("a".to_string()),
            EntityId::Int(10),
            EntityId::Int(2),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                EntityId::Int(2),
                EntityId::Int(10),
                EntityId::Text("a".to_string())
            ]
        );
    }

    #[test]
    fn untagged_deserialization() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[3, "x"]"#).expect("valid json");
        assert_eq!(ids, vec![EntityId::Int(3), EntityId::Text("x".to_string())]);
    }

    #[test]
    fn to_json_round_trips_through_from_json() {
        let id = EntityId::Int(-4);
        assert_eq!(EntityId::from_json(&id.to_json()), Ok(id));
    }
}
