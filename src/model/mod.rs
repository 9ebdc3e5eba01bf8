//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod entity;
pub mod error;
pub mod field;
pub mod key_action;
pub mod malformed_record;
pub mod record;

// Re-export for convenience
pub use entity::{EntityId, Identify, InvalidEntityId};
pub use error::{AppError, ClauseError, InputError, SortError};
pub use field::{coerce_number, FieldRegistry, FieldSpec, FieldValue};
pub use key_action::KeyAction;
pub use malformed_record::MalformedRecord;
pub use record::{infer_fields, record_field, Record, RecordError};
