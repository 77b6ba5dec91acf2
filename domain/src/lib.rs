//! Domain layer for interlog
//!
//! This crate contains the interaction record, its text layout and the log
//! file naming scheme. It has no dependencies on infrastructure concerns.
//!
//! # Core Concepts
//!
//! - **Interaction**: one request/response pair, rendered between fixed
//!   `--- LLM Request ---` / `--- LLM Response ---` markers
//! - **Interaction file name**: `llm_interaction_<micros>.log`, unique only
//!   down to clock resolution

pub mod core;
pub mod interaction;

// Re-export commonly used types
pub use core::error::DomainError;
pub use interaction::{Interaction, InteractionFileName};
