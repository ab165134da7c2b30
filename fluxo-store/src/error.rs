//! Error types for the document store

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document not found (update target missing)
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// A field carried a JSON null. Callers must strip fields they do not
    /// intend to write instead of sending null.
    #[error("null value for field '{field}' - strip absent fields before the call")]
    NullField { field: String },

    /// Lock is held by another process
    #[error("store lock busy - another process has the store open")]
    LockBusy,

    /// Backend unavailable (network-style failure)
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Create an unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockBusy | Self::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::not_found("tasks", "abc123");
        assert_eq!(err.to_string(), "document not found: tasks/abc123");
    }

    #[test]
    fn test_retryable() {
        assert!(StoreError::unavailable("timeout").is_retryable());
        assert!(!StoreError::not_found("tasks", "x").is_retryable());
    }
}
