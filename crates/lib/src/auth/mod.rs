//! Authentication collaborators.
//!
//! The session manager never checks a credential itself: it delegates the
//! round trip to an [`AuthBackend`] and caches whatever identity the
//! backend hands back. [`MockAuth`] is the backend the Roses client ships
//! with, a deterministic stand-in that accepts any non-empty credentials;
//! deployments with a real account service substitute their own
//! implementation.

pub mod errors;
pub mod mock;

pub use errors::AuthError;
pub use mock::MockAuth;

#[cfg(any(test, feature = "testing"))]
pub use mock::DenyAll;

use async_trait::async_trait;

use crate::{Result, user::User};

/// An authentication capability the session manager delegates to.
///
/// Implementations perform whatever verification their deployment needs
/// and return the canonical identity record on success. The manager treats
/// the record as opaque: it persists and installs exactly what the backend
/// returns, so the backend decides ids, display names, and avatars.
///
/// A refusal is an `Err`, usually [`AuthError::InvalidCredentials`];
/// there is no "succeeded but no user" outcome.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Authenticate an existing account.
    async fn login(&self, email: &str, password: &str) -> Result<User>;

    /// Create an account and authenticate as it.
    async fn signup(&self, email: &str, password: &str, username: &str) -> Result<User>;
}
