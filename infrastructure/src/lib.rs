//! Infrastructure layer for interlog
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use clock::MonotonicClock;
pub use config::{ConfigLoader, FileConfig, FileLoggingConfig};
pub use logging::FsInteractionStore;
