//! The deterministic authentication backend the client ships with.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    Result,
    auth::{AuthBackend, AuthError},
    user::User,
};

/// Reference backend that accepts any non-empty credentials.
///
/// No credential leaves the process and no password is kept anywhere: the
/// backend mints a fresh opaque id, builds the profile from the submitted
/// fields, and forgets the password immediately. On login the display
/// name is derived from the email's local part; on signup the chosen name
/// is kept verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuth;

impl MockAuth {
    /// Creates the mock backend.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthBackend for MockAuth {
    async fn login(&self, email: &str, password: &str) -> Result<User> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials {
                email: email.to_string(),
            }
            .into());
        }
        Ok(User::from_email(Uuid::new_v4().to_string(), email))
    }

    async fn signup(&self, email: &str, password: &str, username: &str) -> Result<User> {
        if email.is_empty() || password.is_empty() || username.is_empty() {
            return Err(AuthError::InvalidCredentials {
                email: email.to_string(),
            }
            .into());
        }
        Ok(User::with_username(
            Uuid::new_v4().to_string(),
            email,
            username,
        ))
    }
}

/// Backend that refuses every attempt, for exercising refusal paths.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[cfg(any(test, feature = "testing"))]
impl DenyAll {
    /// Creates the refusing backend.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(any(test, feature = "testing"))]
#[async_trait]
impl AuthBackend for DenyAll {
    async fn login(&self, email: &str, _password: &str) -> Result<User> {
        Err(AuthError::InvalidCredentials {
            email: email.to_string(),
        }
        .into())
    }

    async fn signup(&self, email: &str, _password: &str, _username: &str) -> Result<User> {
        Err(AuthError::InvalidCredentials {
            email: email.to_string(),
        }
        .into())
    }
}
