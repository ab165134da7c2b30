//! Entity identifiers
//!
//! ULID-backed newtype strings. The store mints document ids; these wrappers
//! keep a workspace id from ever being passed where a task id is expected.
//! Ids are never reused - ULIDs are unique across creates and deletes.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh identifier
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing identifier (e.g. restored from a document id)
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

entity_id!(
    /// Identifies a workspace
    WorkspaceId
);
entity_id!(
    /// Identifies a project within a workspace
    ProjectId
);
entity_id!(
    /// Identifies a board (one per project)
    BoardId
);
entity_id!(
    /// Identifies a column on a board
    ColumnId
);
entity_id!(
    /// Identifies a task within a column
    TaskId
);
