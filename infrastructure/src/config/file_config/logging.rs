//! Interaction logging configuration from TOML (`[logging]` section)

use interlog_application::{DEFAULT_LOG_DIR, LoggerConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for interaction log files (default: `/tmp/cline/llm_logs`)
    pub dir: Option<PathBuf>,
    /// Record interactions at all
    pub enabled: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            enabled: true,
        }
    }
}

impl FileLoggingConfig {
    /// Convert to the application-layer logger config, filling in the default directory.
    pub fn into_logger_config(self) -> LoggerConfig {
        LoggerConfig {
            log_dir: self.dir.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            enabled: self.enabled,
        }
    }
}
