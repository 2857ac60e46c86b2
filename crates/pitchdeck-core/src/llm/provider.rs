//! The completion port the deck generator talks to.

use std::future::Future;

use pitchdeck_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// A chat-completion backend: the OpenAI-compatible client in
/// pitchdeck-infra, or a scripted double in tests.
///
/// Wrap in [`super::box_provider::BoxLlmProvider`] to hold one behind a
/// trait object.
pub trait LlmProvider: Send + Sync {
    /// Short backend name used in logs, e.g. `openai`.
    fn name(&self) -> &str;

    /// Answer one prompt.
    ///
    /// An answer without generated text is still `Ok` with `content: None`.
    /// Transport failures and non-success statuses are `Err`.
    fn complete(&self, request: &CompletionRequest) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
