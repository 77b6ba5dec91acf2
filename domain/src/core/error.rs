//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid interaction log file name: {0}")]
    InvalidFileName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_name_display() {
        let error = DomainError::InvalidFileName("notes.txt".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid interaction log file name: notes.txt"
        );
    }
}
