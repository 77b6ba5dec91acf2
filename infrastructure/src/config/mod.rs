//! Configuration file loading for interlog
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `INTERLOG_LOGGING__DIR`, `INTERLOG_LOGGING__ENABLED`
//! 2. `--config <path>` specified file
//! 3. Project root: `./interlog.toml` or `./.interlog.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/interlog/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLoggingConfig};
pub use loader::ConfigLoader;
