//! Application layer for interlog
//!
//! This crate contains the interaction logging use case, its port
//! definitions, and logger configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_LOG_DIR, LoggerConfig};
pub use ports::{
    clock::InteractionClock,
    failure_reporter::{FailureReporter, LogFailure, NoFailureReporter, TracingFailureReporter},
    interaction_store::{InteractionStore, StoreError},
};
pub use use_cases::log_interaction::LogInteractionUseCase;
