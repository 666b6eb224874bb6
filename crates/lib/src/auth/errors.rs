//! Authentication error types.
//!
//! This module defines structured error types for the authentication
//! collaborators. Backends stay deliberately vague about why an attempt
//! was refused; the distinction that matters to the session manager is
//! refusal versus infrastructure failure, and the latter travels as a
//! store or I/O error instead.

use thiserror::Error;

/// Errors raised by an authentication backend.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend refused the presented credentials
    #[error("Credentials rejected for '{email}'")]
    InvalidCredentials {
        /// Address the attempt was made for
        email: String,
    },
}

impl AuthError {
    /// Check if this error is a credential refusal.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials { .. })
    }
}

// Conversion to the main crate error type
impl From<AuthError> for crate::Error {
    fn from(err: AuthError) -> Self {
        crate::Error::Auth(err)
    }
}
