//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the HTTP server. Everything shared between requests lives here behind
//! `Arc`; there are no process globals.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use pitchdeck_core::generator::DeckGenerator;
use pitchdeck_core::llm::box_provider::BoxLlmProvider;
use pitchdeck_core::rate_limit::{FixedWindowRateLimiter, RateLimiter};
use pitchdeck_core::usage::UsageTracker;
use pitchdeck_infra::llm::create_provider;
use pitchdeck_infra::store::memory::InMemoryDeckStore;
use pitchdeck_types::config::PitchdeckConfig;

use crate::http::extractors::auth::hash_token;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<DeckGenerator>,
    pub usage: Arc<UsageTracker>,
    /// `None` when rate limiting is disabled.
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
    pub deck_store: Arc<InMemoryDeckStore>,
    /// SHA-256 of the configured access token, if any.
    pub auth_token_hash: Option<Arc<str>>,
    pub config: Arc<PitchdeckConfig>,
}

impl AppState {
    /// Build the state from configuration and the upstream API key.
    pub fn init(config: PitchdeckConfig, api_key: SecretString) -> anyhow::Result<Self> {
        let provider = create_provider(&config.llm, api_key)?;
        Ok(Self::from_parts(config, provider))
    }

    /// Build the state around an already-constructed provider.
    pub fn from_parts(config: PitchdeckConfig, provider: BoxLlmProvider) -> Self {
        let usage = Arc::new(UsageTracker::new(config.usage.cost_per_thousand_tokens));
        let generator = DeckGenerator::new(
            Arc::new(provider),
            config.llm.model.clone(),
            Arc::clone(&usage),
        );

        let rate_limiter = config.rate_limit.enabled.then(|| {
            Arc::new(FixedWindowRateLimiter::new(
                config.rate_limit.max_requests,
                Duration::from_secs(config.rate_limit.window_secs),
            )) as Arc<dyn RateLimiter>
        });

        let auth_token_hash = config
            .auth
            .token
            .as_deref()
            .map(|token| Arc::from(hash_token(token)));

        Self {
            generator: Arc::new(generator),
            usage,
            rate_limiter,
            deck_store: Arc::new(InMemoryDeckStore::new(config.store.max_decks)),
            auth_token_hash,
            config: Arc::new(config),
        }
    }
}
