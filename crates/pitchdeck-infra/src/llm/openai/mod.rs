//! OpenAiProvider -- concrete [`LlmProvider`] for OpenAI-compatible
//! chat-completions APIs.
//!
//! Sends `POST {base_url}/chat/completions` with a bearer credential.
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use pitchdeck_core::llm::provider::LlmProvider;
use pitchdeck_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use self::types::{extract_content, extract_str, extract_usage, ChatCompletionRequest};

/// OpenAI-compatible chat-completions provider.
///
/// # API Key Security
///
/// Does NOT derive Debug. The key is only exposed when building the
/// `Authorization` header.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a provider.
    ///
    /// * `api_key` - bearer credential
    /// * `base_url` - API root without the trailing `/chat/completions`
    /// * `model` - model used when a request leaves `model` empty
    /// * `timeout` - whole-request timeout for each call
    pub fn new(
        api_key: SecretString,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// The request's model, or the configured default when it is empty.
    fn model_for<'a>(&'a self, request: &'a CompletionRequest) -> &'a str {
        if request.model.is_empty() {
            &self.model
        } else {
            &request.model
        }
    }
}

/// `Retry-After` in seconds, converted to milliseconds.
fn retry_after_ms(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

fn transport_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::Provider {
            message: format!("HTTP request failed: {e}"),
        }
    }
}

impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = ChatCompletionRequest::user_prompt(self.model_for(request), &request.prompt);
        tracing::debug!(model = body.model, prompt_len = request.prompt.len(), "sending chat completion");

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_ms = retry_after_ms(response.headers());
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited { retry_after_ms },
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        let json: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let usage = extract_usage(&json);
        if let Some(usage) = &usage {
            tracing::debug!(total_tokens = usage.total_tokens, "chat completion usage");
        }

        Ok(CompletionResponse {
            id: extract_str(&json, "id"),
            content: extract_content(&json),
            model: extract_str(&json, "model"),
            usage,
        })
    }
}
