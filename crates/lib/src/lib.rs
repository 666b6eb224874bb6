//!
//! Rosette: the client session core for the Roses fan community app.
//! This library owns the "who is signed in" state so UI layers can stay
//! presentation-only: they receive a handle, render from its state, and
//! call its operations.
//!
//! ## Core Concepts
//!
//! * **SessionManager (`session::SessionManager`)**: single source of truth for the
//!   current user, with login, signup, logout, and restore-on-start. Handles are
//!   cheap to clone and safe to share across tasks.
//! * **SessionState (`session::SessionState`)**: the session lifecycle. Starts
//!   `Uninitialized`, passes through `Loading` during the restore attempt, and
//!   settles in `Anonymous` or `Authenticated`.
//! * **User (`user::User`)**: the identity record for a signed-in account, exactly
//!   what gets persisted between runs.
//! * **KvStore (`store::KvStore`)**: pluggable key-value persistence that remembers
//!   identity across restarts. Ships with `InMemory` and `JsonFile`.
//! * **AuthBackend (`auth::AuthBackend`)**: the authentication capability a
//!   deployment provides. The shipped `MockAuth` accepts any non-empty credentials
//!   and stands in for a real account service.

pub mod auth;
pub mod constants;
pub mod session;
pub mod store;
pub mod user;

/// Re-export the session types for easier access.
pub use session::{SessionManager, SessionState};

/// Re-export the user record for easier access.
pub use user::User;

/// Result type used throughout the rosette library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the rosette library.
///
/// The `Io` and `Serialize` variants exist mostly for third-party
/// [`KvStore`](store::KvStore) and [`AuthBackend`](auth::AuthBackend)
/// implementations, which can propagate their underlying errors with `?`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured authentication errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured session errors from the session module
    #[error(transparent)]
    Session(session::SessionError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Auth(_) => "auth",
            Error::Session(_) => "session",
            Error::Store(_) => "store",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a local input-validation failure.
    ///
    /// Validation failures are expected user mistakes: show the message
    /// next to the offending form field and move on.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is an authentication refusal.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this error came from the persistence collaborator.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Store(store_err) => store_err.is_io_error(),
            _ => false,
        }
    }
}
