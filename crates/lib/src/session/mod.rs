//! Session management.
//!
//! [`SessionManager`] is the single source of truth for "who is the
//! current user". It owns the [`SessionState`] lifecycle, serializes the
//! mutating operations, keeps the persisted record in step with memory,
//! and lets dependent UI subscribe to changes. Consumers receive a clone
//! of the handle through their dependency graph at start-up; there is no
//! ambient global to reach for.

pub mod errors;
pub mod state;


pub use errors::SessionError;
pub use state::SessionState;

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::{
    Result, auth::AuthBackend, constants::SESSION_USER_KEY, store::KvStore, user::User,
};

/// Internal state for SessionManager.
struct SessionInternal {
    /// Durable store remembering identity across restarts
    store: Arc<dyn KvStore>,

    /// Authentication capability performing login and signup round trips
    auth: Arc<dyn AuthBackend>,

    /// Current lifecycle state. The watch sender is both the cell readers
    /// borrow from and the broadcast subscribers listen on, so a
    /// transition is one atomic replacement: no reader ever sees a
    /// half-updated user record.
    state: watch::Sender<SessionState>,

    /// Serializes initialize/login/signup/logout per manager
    op_lock: Mutex<()>,
}

/// Single source of truth for the current user's session.
///
/// SessionManager is a cheap-to-clone handle around an internal `Arc`;
/// every clone observes and drives the same session. Construct one at
/// start-up with [`open`](Self::open) (or [`new`](Self::new) plus
/// [`initialize`](Self::initialize)) and hand clones to the components
/// that need to know who is signed in.
///
/// The mutating operations are serialized per manager: overlapping calls
/// queue up and apply one at a time, each leaving memory and the persisted
/// record in agreement before the next begins. Reads are wait-free
/// snapshots.
///
/// ## Example
///
/// ```
/// # use std::sync::Arc;
/// # use rosette::{SessionManager, auth::MockAuth, store::InMemory};
/// # #[tokio::main]
/// # async fn main() -> rosette::Result<()> {
/// let session = SessionManager::open(
///     Arc::new(InMemory::new()),
///     Arc::new(MockAuth::new()),
/// )
/// .await;
///
/// let user = session.login("rose@example.com", "secret").await?;
/// assert_eq!(user.username, "rose");
///
/// session.logout().await;
/// assert!(session.current_user().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInternal>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}

impl SessionManager {
    /// Create a manager in the `Uninitialized` state.
    ///
    /// Call [`initialize`](Self::initialize) exactly once before any of
    /// the mutating operations, or use [`open`](Self::open) to do both in
    /// one step.
    pub fn new(store: Arc<dyn KvStore>, auth: Arc<dyn AuthBackend>) -> Self {
        let (state, _) = watch::channel(SessionState::Uninitialized);
        Self {
            inner: Arc::new(SessionInternal {
                store,
                auth,
                state,
                op_lock: Mutex::new(()),
            }),
        }
    }

    /// Create a manager and restore any persisted session.
    ///
    /// This is the usual entry point: the returned manager is already past
    /// initialization and [`ready`](Self::ready).
    pub async fn open(store: Arc<dyn KvStore>, auth: Arc<dyn AuthBackend>) -> Self {
        let manager = Self::new(store, auth);
        manager.initialize().await;
        manager
    }

    /// Attempt to restore a persisted session.
    ///
    /// Reads the session record from the store, reaching
    /// `Authenticated` when a valid record exists and `Anonymous`
    /// otherwise. Restore problems are never surfaced: a malformed record
    /// and an unavailable store both leave the session anonymous, logged
    /// at warn level, since the only thing lost is a remembered login.
    /// After return the manager is [`ready`](Self::ready) regardless of
    /// outcome.
    ///
    /// # Panics
    ///
    /// Panics when called a second time on the same manager.
    pub async fn initialize(&self) {
        let _guard = self.inner.op_lock.lock().await;
        let fresh = matches!(*self.inner.state.borrow(), SessionState::Uninitialized);
        if !fresh {
            panic!("SessionManager::initialize called twice; it runs exactly once per manager");
        }
        self.inner.state.send_replace(SessionState::Loading);

        let restored = match self.inner.store.get(SESSION_USER_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(error) => {
                    warn!(%error, "persisted session record is malformed, starting signed out");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "session store unavailable during restore, starting signed out");
                None
            }
        };

        match restored {
            Some(user) => {
                info!(user_id = %user.id, username = %user.username, "session restored");
                self.inner.state.send_replace(SessionState::Authenticated(user));
            }
            None => {
                debug!("no persisted session, starting anonymous");
                self.inner.state.send_replace(SessionState::Anonymous);
            }
        }
    }

    /// Authenticate with an email address and password.
    ///
    /// Both fields must be non-empty; verification itself is delegated to
    /// the [`AuthBackend`]. On success the returned user has been
    /// persisted and installed as the current user before the call
    /// returns. On any failure the session is left exactly as it was,
    /// including a still-signed-in previous user.
    ///
    /// # Panics
    ///
    /// Panics when the manager has not been initialized.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        self.assert_ready("login");
        let _guard = self.inner.op_lock.lock().await;

        if email.is_empty() {
            return Err(SessionError::EmptyField { field: "email" }.into());
        }
        if password.is_empty() {
            return Err(SessionError::EmptyField { field: "password" }.into());
        }

        let user = self.inner.auth.login(email, password).await?;
        self.install(user).await
    }

    /// Create an account and sign in as it.
    ///
    /// All three fields must be non-empty; account creation is delegated
    /// to the [`AuthBackend`]. Success and failure behave exactly like
    /// [`login`](Self::login).
    ///
    /// # Panics
    ///
    /// Panics when the manager has not been initialized.
    pub async fn signup(&self, email: &str, password: &str, username: &str) -> Result<User> {
        self.assert_ready("signup");
        let _guard = self.inner.op_lock.lock().await;

        if email.is_empty() {
            return Err(SessionError::EmptyField { field: "email" }.into());
        }
        if password.is_empty() {
            return Err(SessionError::EmptyField { field: "password" }.into());
        }
        if username.is_empty() {
            return Err(SessionError::EmptyField { field: "username" }.into());
        }

        let user = self.inner.auth.signup(email, password, username).await?;
        self.install(user).await
    }

    /// Sign out.
    ///
    /// Unconditional: the session always reaches `Anonymous`, and signing
    /// out while already anonymous is a no-op. The persisted record is
    /// removed best-effort; a store failure is logged rather than
    /// surfaced, leaving nothing for the caller to handle.
    ///
    /// # Panics
    ///
    /// Panics when the manager has not been initialized.
    pub async fn logout(&self) {
        self.assert_ready("logout");
        let _guard = self.inner.op_lock.lock().await;

        if let Err(error) = self.inner.store.remove(SESSION_USER_KEY).await {
            warn!(%error, "failed to clear persisted session record");
        }
        let previous = self.inner.state.send_replace(SessionState::Anonymous);
        if let SessionState::Authenticated(user) = previous {
            info!(user_id = %user.id, username = %user.username, "session ended");
        }
    }

    /// The signed-in user, or `None` when anonymous or not yet ready.
    ///
    /// Snapshot of the most recent completed transition; a record is
    /// never observable half-applied.
    pub fn current_user(&self) -> Option<User> {
        self.inner.state.borrow().user().cloned()
    }

    /// Whether the restore attempt has completed.
    ///
    /// `false` means "identity unknown yet", not "signed out".
    pub fn ready(&self) -> bool {
        self.inner.state.borrow().is_ready()
    }

    /// Snapshot of the current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to session state changes.
    ///
    /// The receiver is notified on every transition and always reads a
    /// fully-applied state. Receivers that fall behind see only the
    /// latest state, which is the right semantics for rendering: UI draws
    /// where the session is now, not its history. Dropping the receiver
    /// just unsubscribes; the manager never depends on anyone listening.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Mutating operations are meaningless before the restore attempt has
    /// settled, and calling one earlier is a wiring bug in the caller.
    fn assert_ready(&self, operation: &str) {
        let ready = self.inner.state.borrow().is_ready();
        assert!(
            ready,
            "SessionManager::{operation} called before initialize() completed"
        );
    }

    /// Persist `user` and make it the current identity.
    ///
    /// Persistence comes first: when the store write fails the state is
    /// untouched and the error propagates, so memory never claims a login
    /// the next restart would not remember.
    async fn install(&self, user: User) -> Result<User> {
        let raw = serde_json::to_string(&user)?;
        self.inner.store.set(SESSION_USER_KEY, &raw).await?;
        self.inner
            .state
            .send_replace(SessionState::Authenticated(user.clone()));
        info!(user_id = %user.id, username = %user.username, "session established");
        Ok(user)
    }
}
