//! Configuration types for Pitchdeck.
//!
//! `PitchdeckConfig` represents the top-level `pitchdeck.toml`. Every section
//! and field has a default, so an empty file (or no file) is a valid config.
//! Secrets such as the upstream API key are never part of this struct; they
//! are resolved from the environment by the loader.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PitchdeckConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub usage: UsageConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Upstream chat-completion API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-request timeout for upstream calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Per-client fixed-window rate limiting for the generate endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

fn default_max_requests() -> u32 {
    100
}

fn default_window_secs() -> u64 {
    3600
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

/// Token usage reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Include `usage` in generate responses.
    #[serde(default = "default_report")]
    pub report: bool,
    /// USD per thousand tokens used for the cost estimate.
    #[serde(default = "default_cost_per_thousand_tokens")]
    pub cost_per_thousand_tokens: f64,
}

fn default_report() -> bool {
    true
}

fn default_cost_per_thousand_tokens() -> f64 {
    0.06
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            report: default_report(),
            cost_per_thousand_tokens: default_cost_per_thousand_tokens(),
        }
    }
}

/// In-memory deck store sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_max_decks")]
    pub max_decks: usize,
}

fn default_max_decks() -> usize {
    256
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_decks: default_max_decks(),
        }
    }
}

/// Bearer-token check on the generate endpoint. Disabled when `token` is unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}
