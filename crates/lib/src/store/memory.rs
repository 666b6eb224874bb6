//! In-memory store implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Result, store::KvStore};

/// A simple in-memory key-value store backed by a `HashMap`.
///
/// Nothing survives the process: dropping the store drops every value.
/// Suitable for tests and for sessions that should never be remembered.
/// Two session managers sharing one `Arc<InMemory>` observe each other's
/// writes, which is how restart behavior is exercised without touching
/// disk.
#[derive(Debug, Default)]
pub struct InMemory {
    values: RwLock<HashMap<String, String>>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for InMemory {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
