//! Completion request/response types shared by the pipeline and providers.
//!
//! Every upstream call in Pitchdeck is a single user prompt answered by a
//! single text. Wire formats live next to each client in pitchdeck-infra.

use serde::{Deserialize, Serialize};

/// One prompt sent to a completion provider.
///
/// An empty `model` means "use the provider's configured default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
}

impl CompletionRequest {
    /// A request carrying `prompt` as the only user message.
    pub fn single_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }
}

/// What came back from a completion call.
///
/// `content` is `None` when the upstream answer did not carry the expected
/// `choices[0].message.content` shape. Callers decide what to substitute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token counts reported for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Errors from completion providers.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error(
        "rate limited by upstream{}",
        .retry_after_ms.map(|ms| format!(", retry after {ms} ms")).unwrap_or_default()
    )]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("request timed out")]
    Timeout,
}
