//! Error types for store operations.
//!
//! This module defines structured error types for the persistence
//! collaborators. Store errors are deliberately coarse: the session manager
//! only needs to distinguish "the store failed" from "the key was absent",
//! and the latter is not an error at all.

use thiserror::Error;

/// Errors that can occur while reading or writing a key-value store.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failed underneath a durable store
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The store image could not be serialized for writing
    #[error("Failed to serialize store image")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// The store image on disk could not be parsed
    #[error("Failed to deserialize store image")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StoreError::FileIo { .. })
    }

    /// Check if this error is a serialization or deserialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. }
        )
    }
}

// Conversion to the main crate error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
