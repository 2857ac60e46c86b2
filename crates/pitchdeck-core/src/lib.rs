//! Business logic and service ports for Pitchdeck.
//!
//! Prompt templates, the two-step deck generation pipeline, and the traits
//! (LLM provider, rate limiter, deck store) that the infrastructure layer
//! implements. Depends only on `pitchdeck-types` -- never on
//! `pitchdeck-infra` or any HTTP/IO crate.

pub mod generator;
pub mod llm;
pub mod prompt;
pub mod rate_limit;
pub mod store;
pub mod usage;
