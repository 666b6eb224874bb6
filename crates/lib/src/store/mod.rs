//! Persistence collaborators for session records.
//!
//! This module defines the [`KvStore`] trait, the key-value surface the
//! session manager persists identity through, plus the implementations the
//! library ships:
//!
//! * [`InMemory`]: ephemeral storage for tests and sessions that should not
//!   outlive the process.
//! * [`JsonFile`]: a single-file JSON image for sessions that survive
//!   restarts.
//!
//! With the `testing` feature, [`FailingStore`] is also available for
//! exercising persistence failure paths.

pub mod errors;
pub mod file;
pub mod memory;

#[cfg(any(test, feature = "testing"))]
pub mod failing;

pub use errors::StoreError;
pub use file::JsonFile;
pub use memory::InMemory;

#[cfg(any(test, feature = "testing"))]
pub use failing::FailingStore;

use async_trait::async_trait;

use crate::Result;

/// Key-value store the session manager remembers identity in.
///
/// The manager only ever touches a single reserved key, but the trait is a
/// plain string-to-string map so one store can back other client-side
/// concerns too. Implementations must be safe to share behind an `Arc`
/// across tasks.
///
/// Absent keys are not errors: `get` returns `None` and `remove` succeeds.
/// An `Err` from any method means the store itself failed and the caller
/// decides how much that matters.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get the value stored under `key`, or `None` if it was never set or
    /// has been removed.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` and its value. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}
