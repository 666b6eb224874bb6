//! User identity types.
//!
//! A [`User`] is the identity record for a signed-in session. It is exactly
//! what gets persisted under
//! [`SESSION_USER_KEY`](crate::constants::SESSION_USER_KEY) as a flat JSON
//! object, so the serialized form is part of the storage contract.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AVATAR;

/// Identity record for the currently signed-in account.
///
/// A `User` is immutable for the lifetime of a session: re-authenticating
/// replaces the record wholesale, it is never merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque account identifier assigned by the authentication backend
    pub id: String,

    /// Display name shown in the UI
    pub username: String,

    /// Address the account was authenticated with
    pub email: String,

    /// Reference to the account's avatar image
    pub avatar: String,
}

impl User {
    /// Build the record for a returning account, deriving the display name
    /// from the email address.
    ///
    /// The display name is the local part before the first `@`; an address
    /// without a separator is taken whole.
    pub fn from_email(id: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        let username = derive_username(&email).to_string();
        Self {
            id: id.into(),
            username,
            email,
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }

    /// Build the record for a fresh account, keeping the chosen display
    /// name verbatim.
    pub fn with_username(
        id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

/// Display name derived from an email address.
pub(crate) fn derive_username(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}
