//! Session lifecycle states.

use crate::user::User;

/// Where the session is in its lifecycle.
///
/// The state moves strictly forward through initialization
/// (`Uninitialized` to `Loading` to one of the settled states) and
/// afterwards only between `Anonymous` and `Authenticated`. Signing out
/// returns the session to [`Anonymous`](SessionState::Anonymous), never to
/// `Uninitialized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Restore from storage has not been attempted yet
    Uninitialized,
    /// Restore from storage is in progress
    Loading,
    /// Restore completed, no user is signed in
    Anonymous,
    /// Exactly one user is signed in
    Authenticated(User),
}

impl SessionState {
    /// The signed-in user, when there is one.
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether the restore attempt has completed.
    ///
    /// `false` means "identity unknown yet", not "signed out": UI should
    /// hold both its signed-in and signed-out affordances until this turns
    /// true.
    pub fn is_ready(&self) -> bool {
        matches!(
            self,
            SessionState::Anonymous | SessionState::Authenticated(_)
        )
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}
