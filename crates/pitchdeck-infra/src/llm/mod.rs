//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `pitchdeck-core`, plus a factory ([`create_provider`])
//! that builds it from an [`LlmConfig`].
//!
//! [`LlmProvider`]: pitchdeck_core::llm::provider::LlmProvider

pub mod openai;

use std::time::Duration;

use secrecy::SecretString;

use pitchdeck_core::llm::box_provider::BoxLlmProvider;
use pitchdeck_types::config::LlmConfig;
use pitchdeck_types::llm::LlmError;

use self::openai::OpenAiProvider;

/// Create a [`BoxLlmProvider`] from the `[llm]` config section.
///
/// # Errors
///
/// Returns an error if the API key is empty or the HTTP client cannot be built.
pub fn create_provider(config: &LlmConfig, api_key: SecretString) -> Result<BoxLlmProvider, LlmError> {
    use secrecy::ExposeSecret;

    if api_key.expose_secret().trim().is_empty() {
        return Err(LlmError::AuthenticationFailed);
    }

    let provider = OpenAiProvider::new(
        api_key,
        config.base_url.clone(),
        config.model.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;
    tracing::debug!(base_url = %config.base_url, model = %config.model, "LLM provider configured");
    Ok(BoxLlmProvider::new(provider))
}
