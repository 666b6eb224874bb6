//! Session error types.
//!
//! This module defines structured error types for session operations.
//! Only recoverable conditions live here: misuse of the manager itself,
//! such as calling an operation before initialization, is a wiring bug
//! and panics instead of returning an error.

use thiserror::Error;

/// Errors that can occur during session operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
    /// A required credential field was empty
    #[error("Required field '{field}' is empty")]
    EmptyField {
        /// Name of the offending field
        field: &'static str,
    },
}

impl SessionError {
    /// Check if this error is a local input-validation failure.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, SessionError::EmptyField { .. })
    }
}

// Conversion to the main crate error type
impl From<SessionError> for crate::Error {
    fn from(err: SessionError) -> Self {
        crate::Error::Session(err)
    }
}
