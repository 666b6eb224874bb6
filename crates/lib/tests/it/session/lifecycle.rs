//! Integration tests: initialization and the restore-on-start lifecycle
//!
//! Covers the path from a fresh manager to a settled session: restoring a
//! remembered login, starting anonymous, and how restore problems are
//! absorbed rather than surfaced.

use std::sync::Arc;

use rosette::{
    SessionManager, SessionState,
    auth::MockAuth,
    constants::SESSION_USER_KEY,
    store::{FailingStore, InMemory, KvStore},
};

use crate::helpers::{GatedStore, manager_over, ready_manager, sample_user, seeded_store};

#[tokio::test]
async fn test_fresh_store_starts_anonymous() {
    let manager = ready_manager().await;
    assert!(manager.ready());
    assert_eq!(manager.state(), SessionState::Anonymous);
    assert!(manager.current_user().is_none());
}

#[tokio::test]
async fn test_valid_record_restores_the_session() {
    let user = sample_user("nayeon");
    let store = seeded_store(&user).await;

    let manager = manager_over(store).await;
    assert!(manager.ready());
    assert_eq!(manager.current_user(), Some(user));
}

#[tokio::test]
async fn test_corrupt_record_starts_anonymous_without_raising() {
    let store = Arc::new(InMemory::new());
    store
        .set(SESSION_USER_KEY, "{definitely not a user record")
        .await
        .unwrap();

    let manager = manager_over(store.clone()).await;
    assert!(manager.ready());
    assert_eq!(manager.state(), SessionState::Anonymous);

    // The unreadable record is left alone until the next explicit write.
    assert!(store.get(SESSION_USER_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn test_record_with_wrong_shape_starts_anonymous() {
    let store = Arc::new(InMemory::new());
    store
        .set(SESSION_USER_KEY, r#"{"id":"u-1"}"#)
        .await
        .unwrap();

    let manager = manager_over(store).await;
    assert_eq!(manager.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_unreachable_store_starts_anonymous_and_recovers() {
    let store = Arc::new(FailingStore::new());
    store.fail_reads(true);

    let manager = SessionManager::open(store.clone(), Arc::new(MockAuth::new())).await;
    assert!(manager.ready());
    assert_eq!(manager.state(), SessionState::Anonymous);

    // Once the store is healthy again the same manager signs in fine.
    store.fail_reads(false);
    manager.login("yuna@roses.app", "pw").await.unwrap();
    assert!(manager.state().is_authenticated());
}

#[tokio::test]
async fn test_loading_is_observable_while_restore_is_in_flight() {
    let store = Arc::new(GatedStore::new());
    let manager = SessionManager::new(store.clone(), Arc::new(MockAuth::new()));

    let restoring = manager.clone();
    let task = tokio::spawn(async move { restoring.initialize().await });

    // Wait for the restore to park on the gated read.
    while manager.state() != SessionState::Loading {
        tokio::task::yield_now().await;
    }
    assert!(!manager.ready());
    assert!(manager.current_user().is_none());

    store.release_read();
    task.await.unwrap();
    assert!(manager.ready());
    assert_eq!(manager.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_subscriber_observes_settling() {
    let manager = SessionManager::new(Arc::new(InMemory::new()), Arc::new(MockAuth::new()));
    let mut rx = manager.subscribe();
    assert_eq!(*rx.borrow_and_update(), SessionState::Uninitialized);

    manager.initialize().await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), SessionState::Anonymous);
}
