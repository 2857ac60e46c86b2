//! Deck generation endpoint.
//!
//! POST /api/generate - Validate an idea, run the two-step pipeline, store
//! the deck and return its slides.
//!
//! Checks run in a fixed order: method (route fallback), access token,
//! rate limit, body validation, generation.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use pitchdeck_core::rate_limit::{describe_window, RateDecision};
use pitchdeck_core::store::DeckStore;
use pitchdeck_types::deck::{DeckId, Slide, UsageSummary};
use pitchdeck_types::idea::IdeaFields;

use crate::http::error::AppError;
use crate::http::extractors::auth::Authorized;
use crate::http::extractors::client::ClientId;
use crate::state::AppState;

/// Successful generation response.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub id: DeckId,
    pub slides: Vec<Slide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageSummary>,
}

/// POST /api/generate
pub async fn generate_deck(
    State(state): State<AppState>,
    _auth: Authorized,
    ClientId(client): ClientId,
    body: Result<Json<IdeaFields>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let start = Instant::now();

    if let Some(limiter) = &state.rate_limiter {
        if let RateDecision::Limited {
            limit,
            window,
            retry_after,
        } = limiter.check(&client)
        {
            tracing::warn!(%client, retry_after_secs = retry_after.as_secs(), "rate limit exceeded");
            return Err(AppError::RateLimited {
                limit,
                window: describe_window(window),
            });
        }
    }

    let Json(fields) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "unreadable idea body");
        AppError::Validation { field: None }
    })?;
    let idea = fields.validate()?;

    let generated = state.generator.generate(&idea).await?;
    let stored = state.deck_store.put(generated.deck).await;

    tracing::info!(
        deck_id = %stored.id,
        tokens_used = generated.tokens_used,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "pitch deck generated"
    );

    Ok(Json(GenerateResponse {
        id: stored.id,
        slides: stored.slides,
        usage: state.config.usage.report.then(|| state.usage.summary()),
    }))
}

/// Fallback for any method other than POST on /api/generate.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
