//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types.

mod logging;

pub use logging::FileLoggingConfig;

use interlog_application::LoggerConfig;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Interaction log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    pub fn logger_config(&self) -> LoggerConfig {
        self.logging.clone().into_logger_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.logging.dir.is_none());
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_logger_config_uses_file_values() {
        let toml_str = r#"
[logging]
dir = "/srv/interlog"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let logger = config.logger_config();
        assert_eq!(logger.log_dir, PathBuf::from("/srv/interlog"));
        assert!(logger.enabled);
    }
}
