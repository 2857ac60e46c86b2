//! Access token extractor.
//!
//! When an access token is configured, requests must present it via
//! `Authorization: Bearer <token>` or as the bare `Authorization` value.
//! Tokens are SHA-256 hashed and compared against the configured hash.
//! With no token configured every request passes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};

use crate::http::error::AppError;
use crate::state::AppState;

/// Authorized request marker. Extracting this checks the access token.
pub struct Authorized;

impl FromRequestParts<AppState> for Authorized {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.auth_token_hash.as_deref() else {
            return Ok(Authorized);
        };

        match extract_token(parts) {
            Some(token) if hash_token(token) == expected => Ok(Authorized),
            Some(_) => {
                tracing::debug!("rejected request with wrong access token");
                Err(AppError::Unauthorized)
            }
            None => Err(AppError::Unauthorized),
        }
    }
}

/// Extract the token from the `Authorization` header.
fn extract_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get("authorization")?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ").map(str::trim).unwrap_or(value);
    (!token.is_empty()).then_some(token)
}

/// Compute SHA-256 hash of a token (lowercase hex).
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    format!("{:x}", digest)
}
