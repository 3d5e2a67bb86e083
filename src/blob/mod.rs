//! Durable key → blob storage used as the ledger's only persistence medium.
//!
//! The ledger never talks to the filesystem directly: it reads one snapshot
//! on startup and replaces it wholesale after every mutation through the
//! [`BlobStore`] trait.

mod fs;
mod memory;

pub use fs::FsBlobStore;
pub use memory::MemoryBlobStore;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Asynchronous key → binary blob persistence.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetch the blob stored under `key`, or `None` if nothing was ever written.
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`.
    async fn put(&self, key: &str, blob: Vec<u8>) -> AppResult<()>;
}

#[async_trait]
impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, blob: Vec<u8>) -> AppResult<()> {
        (**self).put(key, blob).await
    }
}

#[async_trait]
impl<T: BlobStore + ?Sized> BlobStore for Box<T> {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, blob: Vec<u8>) -> AppResult<()> {
        (**self).put(key, blob).await
    }
}

/// Keys end up as file names, so only a conservative charset is allowed.
pub fn validate_key(key: &str) -> AppResult<()> {
    if key.is_empty() {
        return Err(AppError::Blob("empty blob key".into()));
    }
    if key.starts_with('.') {
        return Err(AppError::Blob(format!("blob key must not start with '.': {key}")));
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(AppError::Blob(format!(
            "invalid character {c:?} in blob key '{key}'"
        )));
    }
    Ok(())
}
