//! Stored deck lookup.
//!
//! GET /api/decks/{id} - Fetch a previously generated deck.

use axum::extract::{Path, State};
use axum::Json;

use pitchdeck_core::store::DeckStore;
use pitchdeck_types::deck::{DeckId, StoredDeck};

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /api/decks/{id}
///
/// Malformed ids are reported as not found rather than as a bad request,
/// so the response does not reveal which ids are well-formed.
pub async fn get_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredDeck>, AppError> {
    let id: DeckId = id
        .parse()
        .map_err(|_| AppError::NotFound("Deck".to_string()))?;

    state
        .deck_store
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Deck".to_string()))
}
