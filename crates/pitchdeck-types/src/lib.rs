//! Shared domain types for Pitchdeck.
//!
//! Ideas, slides and decks, LLM request/response shapes, configuration, and
//! the error enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod deck;
pub mod error;
pub mod idea;
pub mod llm;
