//! Integration tests: overlapping calls on a shared session
//!
//! Handles are cloned across tasks on purpose; these tests check that
//! overlapping operations apply one at a time and that observers can
//! never catch the session between a store write and the matching state
//! change.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use rosette::{
    Result, SessionManager, SessionState, User,
    auth::MockAuth,
    constants::SESSION_USER_KEY,
    store::{InMemory, KvStore},
};

use crate::helpers::{manager_over, ready_manager};

/// Store that records how many mutations are in flight at once.
struct OverlapProbe {
    inner: InMemory,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl OverlapProbe {
    fn new() -> Self {
        Self {
            inner: InMemory::new(),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn max_seen(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KvStore for OverlapProbe {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        // Stay "inside" the write across a few scheduling points.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        let result = self.inner.set(key, value).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key).await
    }
}

#[tokio::test]
async fn test_concurrent_logins_apply_one_at_a_time() {
    let store = Arc::new(OverlapProbe::new());
    let manager = SessionManager::open(store.clone(), Arc::new(MockAuth::new())).await;

    let mut handles = Vec::new();
    for i in 0..6 {
        let session = manager.clone();
        handles.push(tokio::spawn(async move {
            session
                .login(&format!("fan{i}@roses.app"), "pw")
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.max_seen(), 1);
}

#[tokio::test]
async fn test_concurrent_logins_settle_on_one_winner() {
    let store = Arc::new(InMemory::new());
    let manager = manager_over(store.clone()).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let session = manager.clone();
        handles.push(tokio::spawn(async move {
            session
                .login(&format!("fan{i}@roses.app"), "pw")
                .await
                .unwrap()
        }));
    }
    let mut returned = Vec::new();
    for handle in handles {
        returned.push(handle.await.unwrap());
    }

    // Whoever applied last is the session, in memory and on the record.
    let current = manager.current_user().unwrap();
    assert!(returned.contains(&current));

    let raw = store.get(SESSION_USER_KEY).await.unwrap().unwrap();
    let persisted: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, current);
}

#[tokio::test]
async fn test_mixed_operations_leave_memory_and_store_agreeing() {
    let store = Arc::new(InMemory::new());
    let manager = manager_over(store.clone()).await;

    let mut handles = Vec::new();
    for i in 0..10 {
        let session = manager.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                session
                    .login(&format!("fan{i}@roses.app"), "pw")
                    .await
                    .unwrap();
            } else {
                session.logout().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    match manager.state() {
        SessionState::Authenticated(user) => {
            let raw = store.get(SESSION_USER_KEY).await.unwrap().unwrap();
            let persisted: User = serde_json::from_str(&raw).unwrap();
            assert_eq!(persisted, user);
        }
        SessionState::Anonymous => {
            assert_eq!(store.get(SESSION_USER_KEY).await.unwrap(), None);
        }
        other => panic!("session settled in {other:?}"),
    }
}

#[tokio::test]
async fn test_subscribers_only_see_fully_applied_states() {
    let manager = ready_manager().await;
    let mut rx = manager.subscribe();

    let watcher = tokio::spawn(async move {
        let mut observed = 0usize;
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            if let SessionState::Authenticated(user) = state {
                assert!(!user.id.is_empty());
                assert!(!user.username.is_empty());
                assert!(!user.email.is_empty());
                assert!(!user.avatar.is_empty());
            }
            observed += 1;
        }
        observed
    });

    for i in 0..5 {
        manager
            .login(&format!("fan{i}@roses.app"), "pw")
            .await
            .unwrap();
        manager.logout().await;
    }
    drop(manager);

    // The receiver may coalesce bursts, but it must have seen something
    // and every snapshot it did see was complete.
    let observed = watcher.await.unwrap();
    assert!(observed >= 1);
}

#[tokio::test]
async fn test_reads_never_wait_on_writers() {
    let manager = ready_manager().await;

    let mut handles = Vec::new();
    for i in 0..4 {
        let session = manager.clone();
        handles.push(tokio::spawn(async move {
            session
                .login(&format!("fan{i}@roses.app"), "pw")
                .await
                .unwrap();
        }));
    }

    // Snapshots stay available while the writers queue.
    for _ in 0..16 {
        let _ = manager.state();
        let _ = manager.ready();
        let _ = manager.current_user();
        tokio::task::yield_now().await;
    }

    for handle in handles {
        handle.await.unwrap();
    }
    assert!(manager.state().is_authenticated());
}
