//! Interaction store port
//!
//! Defines where rendered interaction logs end up. The filesystem adapter
//! lives in the infrastructure layer.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while persisting an interaction log
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// The directory or file the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::CreateDir { path, .. } | StoreError::Write { path, .. } => path,
        }
    }
}

/// Storage for rendered interaction logs
///
/// Both operations are expected to be safe under concurrent use: directory
/// creation is idempotent and each write targets its own path.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Create `dir` and any missing parents. Succeeds if it already exists.
    async fn ensure_dir(&self, dir: &Path) -> Result<(), StoreError>;

    /// Write `content` to `path`, replacing any existing file.
    async fn write(&self, path: &Path, content: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_includes_path() {
        let error = StoreError::Write {
            path: PathBuf::from("/tmp/logs/llm_interaction_1.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write log file /tmp/logs/llm_interaction_1.log: denied"
        );
        assert_eq!(error.path(), Path::new("/tmp/logs/llm_interaction_1.log"));
    }
}
