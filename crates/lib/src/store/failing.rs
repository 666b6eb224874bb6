//! Failure-injecting store for exercising persistence error paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::{
    Error, Result,
    store::{InMemory, KvStore, StoreError},
};

/// Test double that behaves like [`InMemory`] until told to fail.
///
/// Reads and writes can be switched into a failing mode independently at
/// any point; failures surface as the same I/O error class a durable store
/// would produce. Values written while healthy remain visible once the
/// store is healthy again.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: InMemory,
    reads_failing: AtomicBool,
    writes_failing: AtomicBool,
}

impl FailingStore {
    /// Creates a healthy store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch read failures on or off.
    pub fn fail_reads(&self, failing: bool) {
        self.reads_failing.store(failing, Ordering::Relaxed);
    }

    /// Switch write and remove failures on or off.
    pub fn fail_writes(&self, failing: bool) {
        self.writes_failing.store(failing, Ordering::Relaxed);
    }

    fn injected(operation: &'static str) -> Error {
        StoreError::FileIo {
            source: std::io::Error::other(format!("injected {operation} failure")),
        }
        .into()
    }
}

#[async_trait]
impl KvStore for FailingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.reads_failing.load(Ordering::Relaxed) {
            return Err(Self::injected("get"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.writes_failing.load(Ordering::Relaxed) {
            return Err(Self::injected("set"));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.writes_failing.load(Ordering::Relaxed) {
            return Err(Self::injected("remove"));
        }
        self.inner.remove(key).await
    }
}
