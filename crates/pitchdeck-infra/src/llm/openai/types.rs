//! OpenAI chat-completions wire types.
//!
//! These are provider-specific request structures. They are NOT the generic
//! LLM types from pitchdeck-types -- those are provider-agnostic.
//!
//! Responses are read as untyped JSON and picked apart with
//! [`extract_content`] / [`extract_usage`]: every step on the path to the
//! generated text may be missing, and a missing step is not an error.

use serde::Serialize;
use serde_json::Value;

use pitchdeck_types::llm::Usage;

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 1],
}

impl<'a> ChatCompletionRequest<'a> {
    /// A request whose only message is `prompt` in the `user` role.
    pub fn user_prompt(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        }
    }
}

/// A single message in a chat-completions conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Text at `choices[0].message.content`, if it is a string.
pub fn extract_content(body: &Value) -> Option<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Token counts from the `usage` object, if present.
pub fn extract_usage(body: &Value) -> Option<Usage> {
    let usage = body.get("usage")?.as_object()?;
    let count = |key: &str| usage.get(key).and_then(Value::as_u64).unwrap_or(0);
    Some(Usage {
        prompt_tokens: count("prompt_tokens"),
        completion_tokens: count("completion_tokens"),
        total_tokens: count("total_tokens"),
    })
}

/// Optional top-level string field (`id`, `model`).
pub fn extract_str(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}
