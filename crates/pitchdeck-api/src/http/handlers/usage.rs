//! GET /api/usage - Process-wide token usage and estimated cost.

use axum::extract::State;
use axum::Json;

use pitchdeck_types::deck::UsageSummary;

use crate::http::extractors::auth::Authorized;
use crate::state::AppState;

pub async fn get_usage(State(state): State<AppState>, _auth: Authorized) -> Json<UsageSummary> {
    Json(state.usage.summary())
}
