//! Configuration loader for Pitchdeck.
//!
//! Reads `pitchdeck.toml` and deserializes it into [`PitchdeckConfig`].
//! Falls back to defaults when the file is missing or malformed, then applies
//! environment overrides. The upstream API key only ever comes from the
//! environment.

use std::path::Path;

use secrecy::SecretString;

use pitchdeck_core::rate_limit::MAX_WINDOW;
use pitchdeck_types::config::PitchdeckConfig;
use pitchdeck_types::error::ConfigError;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pitchdeck.toml";

/// Env var holding the upstream API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`PitchdeckConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
///
/// Environment overrides are NOT applied here; see [`apply_env_overrides`].
pub async fn load_config(path: &Path) -> PitchdeckConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return PitchdeckConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return PitchdeckConfig::default();
        }
    };

    match toml::from_str::<PitchdeckConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            PitchdeckConfig::default()
        }
    }
}

/// Apply environment overrides using `lookup` (usually `std::env::var`).
///
/// | Env var           | Field          |
/// |-------------------|----------------|
/// | `OPENAI_BASE_URL` | `llm.base_url` |
/// | `PITCHDECK_MODEL` | `llm.model`    |
/// | `TEST_TOKEN`      | `auth.token`   |
pub fn apply_env_overrides<F>(config: &mut PitchdeckConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(base_url) = non_empty("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(model) = non_empty("PITCHDECK_MODEL") {
        config.llm.model = model;
    }
    if let Some(token) = non_empty("TEST_TOKEN") {
        config.auth.token = Some(token);
    }
}

/// Reject values that would make the server misbehave.
pub fn validate(config: &PitchdeckConfig) -> Result<(), ConfigError> {
    if config.rate_limit.enabled && config.rate_limit.window_secs == 0 {
        return Err(ConfigError::InvalidValue {
            key: "rate_limit.window_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.rate_limit.enabled && config.rate_limit.window_secs > MAX_WINDOW.as_secs() {
        return Err(ConfigError::InvalidValue {
            key: "rate_limit.window_secs",
            message: format!("must be at most {} (one year)", MAX_WINDOW.as_secs()),
        });
    }
    if config.llm.timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            key: "llm.timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if !config.usage.cost_per_thousand_tokens.is_finite() || config.usage.cost_per_thousand_tokens < 0.0 {
        return Err(ConfigError::InvalidValue {
            key: "usage.cost_per_thousand_tokens",
            message: "must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

/// Resolve the upstream API key from `OPENAI_API_KEY`.
pub fn resolve_api_key<F>(lookup: F) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(API_KEY_ENV)
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
        .ok_or(ConfigError::MissingEnv(API_KEY_ENV))
}

/// Load from `path`, apply process environment overrides, and validate.
pub async fn load_effective_config(path: &Path) -> Result<PitchdeckConfig, ConfigError> {
    let mut config = load_config(path).await;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate(&config)?;
    Ok(config)
}
