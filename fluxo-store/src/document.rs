//! Document envelope: an identifier plus schemaless JSON fields

use crate::error::{Result, StoreError};
use serde_json::Value;

/// The field map of a document. Plain JSON object, no schema.
pub type Fields = serde_json::Map<String, Value>;

/// A stored document. The identifier lives outside the field map, the way
/// a document reference does - field payloads never carry their own id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    /// Create a document envelope
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Get a field value
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Reject field maps carrying JSON nulls.
///
/// The store contract mirrors the backing document database: an absent field
/// is a no-op on update, but a null is not - it would be mis-stored. Callers
/// strip absent fields at serialization time; a null reaching this point is
/// a caller bug surfaced as an error rather than persisted.
pub fn reject_nulls(fields: &Fields) -> Result<()> {
    for (name, value) in fields {
        if value.is_null() {
            return Err(StoreError::NullField {
                field: name.clone(),
            });
        }
    }
    Ok(())
}
