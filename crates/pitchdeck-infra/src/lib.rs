//! Infrastructure layer for Pitchdeck.
//!
//! Contains implementations of the ports defined in `pitchdeck-core`:
//! the OpenAI-compatible chat-completions client, the in-memory deck store,
//! and the TOML/environment configuration loader.

pub mod config;
pub mod llm;
pub mod store;
