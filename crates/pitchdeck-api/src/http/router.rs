//! Axum router configuration with middleware.
//!
//! JSON routes live under `/api/`; the form and viewer pages are served at
//! `/` and `/decks/{id}`. Middleware: CORS and request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/generate",
            post(handlers::generate::generate_deck).fallback(handlers::generate::method_not_allowed),
        )
        .route("/decks/{id}", get(handlers::deck::get_deck))
        .route("/usage", get(handlers::usage::get_usage));

    Router::new()
        .nest("/api", api_routes)
        .route("/", get(handlers::pages::index))
        .route("/decks/{id}", get(handlers::pages::viewer))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint (no auth required).
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
