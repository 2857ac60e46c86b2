//! Application error type mapping to HTTP status codes and JSON bodies.
//!
//! Every error body carries a `message`; some variants add context fields
//! (`field` for validation, `limit`/`window` for rate limiting). Server-side
//! causes are logged and never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use pitchdeck_types::error::IdeaError;
use pitchdeck_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A required idea field is missing or the body is unreadable.
    Validation { field: Option<&'static str> },
    /// Access token missing or wrong.
    Unauthorized,
    /// Client exceeded its request budget.
    RateLimited { limit: u32, window: String },
    /// Wrong HTTP method for the route.
    MethodNotAllowed,
    /// Unknown resource.
    NotFound(String),
    /// The upstream completion call failed.
    Generation(LlmError),
}

impl From<IdeaError> for AppError {
    fn from(e: IdeaError) -> Self {
        AppError::Validation {
            field: Some(e.field()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Generation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { field } => {
                let mut body = json!({ "message": "Missing required fields" });
                if let Some(field) = field {
                    body["field"] = json!(field);
                }
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({ "message": "Unauthorized" })),
            AppError::RateLimited { limit, window } => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({
                    "message": "Rate limit exceeded. Please try again later.",
                    "limit": limit,
                    "window": window,
                }),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "message": "Method not allowed" }),
            ),
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, json!({ "message": format!("{what} not found") })),
            AppError::Generation(e) => {
                tracing::error!(error = %e, "Error generating pitch deck");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Error generating pitch deck" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
