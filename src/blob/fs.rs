use super::{BlobStore, validate_key};
use crate::errors::AppResult;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const BLOB_EXT: &str = "blob";

/// Stores each key as `<root>/<key>.blob`.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{BLOB_EXT}")))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path).await {
            Ok(bytes) => {
                debug!(path = %path.display(), len = bytes.len(), "blob read");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, blob: Vec<u8>) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await?;

        // Write aside, then rename over the target: readers see old or new, never half.
        let tmp_path = path.with_extension(format!("{BLOB_EXT}.tmp"));
        fs::write(&tmp_path, &blob).await?;
        fs::rename(&tmp_path, &path).await?;

        debug!(path = %path.display(), len = blob.len(), "blob written");
        Ok(())
    }
}
