use super::{BlobStore, validate_key};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local blob store. Wrap it in an `Arc` to share it between handles.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> AppError {
        AppError::Blob("memory blob store lock poisoned".into())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        validate_key(key)?;
        let blobs = self.blobs.lock().map_err(|_| Self::poisoned())?;
        Ok(blobs.get(key).cloned())
    }

    async fn put(&self, key: &str, blob: Vec<u8>) -> AppResult<()> {
        validate_key(key)?;
        let mut blobs = self.blobs.lock().map_err(|_| Self::poisoned())?;
        blobs.insert(key.to_string(), blob);
        Ok(())
    }
}
