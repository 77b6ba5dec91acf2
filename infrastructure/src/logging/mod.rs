//! Logging infrastructure — per-interaction log files on the local filesystem.
//!
//! Provides [`FsInteractionStore`], a `tokio::fs` backed implementation of
//! the [`InteractionStore`](interlog_application::InteractionStore) port.

mod fs_store;

pub use fs_store::FsInteractionStore;
