//! Application-level configuration.
//!
//! This module provides configuration types that control how the interaction
//! logger behaves, such as where log files are written.

use std::path::PathBuf;

/// Directory interaction logs go to when nothing else is configured.
pub const DEFAULT_LOG_DIR: &str = "/tmp/cline/llm_logs";

/// Interaction logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Directory that receives one file per interaction.
    pub log_dir: PathBuf,
    /// When false, interactions are dropped without touching the filesystem.
    pub enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            enabled: true,
        }
    }
}

impl LoggerConfig {
    /// Creates an enabled config writing to `log_dir`.
    pub fn with_log_dir(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            enabled: true,
        }
    }

    /// Creates a config that records nothing.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}
