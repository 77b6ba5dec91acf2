//! Filesystem store for interaction logs.
//!
//! Directory creation is recursive and idempotent; writes create or truncate
//! the target file. There is no exclusive-create and no locking, so two
//! interactions that share a file name simply overwrite one another.

use async_trait::async_trait;
use interlog_application::{InteractionStore, StoreError};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Interaction store that writes plain UTF-8 files with `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsInteractionStore;

impl FsInteractionStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InteractionStore for FsInteractionStore {
    async fn ensure_dir(&self, dir: &Path) -> Result<(), StoreError> {
        fs::create_dir_all(dir)
            .await
            .map_err(|source| StoreError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
    }

    async fn write(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        fs::write(path, content.as_bytes())
            .await
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}
