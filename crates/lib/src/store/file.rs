//! File-backed store implementation.
//!
//! Persists the whole key-value image as a single JSON object on disk, the
//! durable analogue of the browser storage the Roses client keeps its
//! session in. The image is human-readable on purpose so a session file
//! can be inspected and repaired by hand.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use crate::{
    Error, Result,
    store::{KvStore, StoreError},
};

/// A durable key-value store keeping all values in one JSON file.
///
/// Every mutation re-reads the image, applies the change, and rewrites the
/// file. At session call volume (human interaction rate) that is cheap and
/// keeps the format trivially inspectable. A missing file reads as an
/// empty store; the parent directory is created on first write.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    /// Serializes every operation's access to the file image
    image_lock: Mutex<()>,
}

impl JsonFile {
    /// Creates a store persisting to `path`.
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            image_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the image from disk. A missing file is an empty store.
    async fn load(&self) -> Result<HashMap<String, String>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(StoreError::FileIo { source: e }.into()),
        };
        serde_json::from_str(&json)
            .map_err(|e| -> Error { StoreError::DeserializationFailed { source: e }.into() })
    }

    /// Read the image for a mutation. An unparseable image is discarded so
    /// a corrupted file cannot wedge the store forever; the mutation
    /// rewrites it from scratch.
    async fn load_for_update(&self) -> Result<HashMap<String, String>> {
        match self.load().await {
            Err(Error::Store(StoreError::DeserializationFailed { source })) => {
                warn!(
                    path = %self.path.display(),
                    error = %source,
                    "store image unreadable, rebuilding"
                );
                Ok(HashMap::new())
            }
            other => other,
        }
    }

    /// Write the image to disk, creating the parent directory if needed.
    async fn save(&self, values: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| -> Error { StoreError::FileIo { source: e }.into() })?;
            }
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| -> Error { StoreError::SerializationFailed { source: e }.into() })?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| -> Error { StoreError::FileIo { source: e }.into() })
    }
}

#[async_trait]
impl KvStore for JsonFile {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.image_lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.image_lock.lock().await;
        let mut values = self.load_for_update().await?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.image_lock.lock().await;
        let mut values = self.load_for_update().await?;
        if values.remove(key).is_some() {
            self.save(&values).await?;
        }
        Ok(())
    }
}
