//! HTTP layer for Pitchdeck.
//!
//! Axum-based JSON API under `/api/` plus the browser pages, with optional
//! access-token authentication, per-client rate limiting and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
