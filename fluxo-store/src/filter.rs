//! List filtering: a single equality predicate on one field

use crate::document::Fields;
use serde_json::Value;

/// Equality filter for `list` queries, e.g. `columnId == "c1"`.
///
/// The store offers exactly one predicate shape - equality on a foreign-key
/// field. Anything richer (ordering, compound queries) happens client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub equals: Value,
}

impl Filter {
    /// Create an equality filter
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            equals: value.into(),
        }
    }

    /// Check whether a document's fields satisfy the predicate
    pub fn matches(&self, fields: &Fields) -> bool {
        fields.get(&self.field) == Some(&self.equals)
    }
}
