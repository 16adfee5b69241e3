//! Filesystem-backed [`BlobStore`].
//!
//! Files land in `storage.static_dir` under a random v4 UUID name and are served
//! by the `/static` route, so the returned URL is
//! `<public_base_url>/static/<uuid>.<ext>`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use cr_core::errors::{DomainError, DomainResult};
use cr_core::services::BlobStore;
use cr_shared::StorageConfig;

pub struct LocalBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into();
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.static_dir, &config.public_base_url)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn public_url(&self, file_name: &str) -> String {
        format!("{}/static/{}", self.public_base_url, file_name)
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, bytes: &[u8], extension: &str) -> DomainResult<String> {
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.root.join(&file_name);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create static dir: {}", e)))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Blob written");
        Ok(self.public_url(&file_name))
    }
}
