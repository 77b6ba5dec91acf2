//! Interaction domain module — one recorded request/response exchange.
//!
//! An **Interaction** is a single LLM round trip: the text sent to the model
//! and the text it returned. It is recorded to its own file, named after a
//! microsecond timestamp:
//!
//! | Piece | Type | Example |
//! |-------|------|---------|
//! | Content | [`Interaction`] | `--- LLM Request ---\nHello\n\n--- LLM Response ---\nWorld\n` |
//! | File name | [`InteractionFileName`] | `llm_interaction_1712345678901234.log` |
//!
//! # Examples
//!
//! ```
//! use interlog_domain::interaction::{Interaction, InteractionFileName};
//!
//! let interaction = Interaction::new("Hello", "World");
//! assert_eq!(
//!     interaction.render(),
//!     "--- LLM Request ---\nHello\n\n--- LLM Response ---\nWorld\n"
//! );
//!
//! let name = InteractionFileName::from_micros(42);
//! assert_eq!(name.to_string(), "llm_interaction_42.log");
//! ```

pub mod entities;
pub mod file_name;

pub use entities::{Interaction, REQUEST_MARKER, RESPONSE_MARKER};
pub use file_name::{FILE_NAME_EXTENSION, FILE_NAME_PREFIX, InteractionFileName};
