//! Type-erased [`LlmProvider`] for runtime selection.
//!
//! `LlmProvider::complete` returns `impl Future`, which makes the trait
//! unusable as `dyn`. [`DynLlmProvider`] restates it with a boxed future and
//! is blanket-implemented for every provider; [`BoxLlmProvider`] owns one.

use std::future::Future;
use std::pin::Pin;

use pitchdeck_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::provider::LlmProvider;

/// Boxed future returned by [`DynLlmProvider::complete_boxed`].
pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<CompletionResponse, LlmError>> + Send + 'a>>;

/// Object-safe mirror of [`LlmProvider`].
pub trait DynLlmProvider: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(&'a self, request: &'a CompletionRequest) -> CompletionFuture<'a>;
}

impl<P: LlmProvider> DynLlmProvider for P {
    fn name(&self) -> &str {
        LlmProvider::name(self)
    }

    fn complete_boxed<'a>(&'a self, request: &'a CompletionRequest) -> CompletionFuture<'a> {
        Box::pin(self.complete(request))
    }
}

/// Owned, type-erased provider. The deck generator holds one of these so the
/// HTTP layer and tests can swap the backend without generics leaking upward.
pub struct BoxLlmProvider {
    inner: Box<dyn DynLlmProvider>,
}

impl BoxLlmProvider {
    pub fn new<P: LlmProvider + 'static>(provider: P) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn complete<'a>(&'a self, request: &'a CompletionRequest) -> CompletionFuture<'a> {
        self.inner.complete_boxed(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                content: Some(request.prompt.clone()),
                model: Some(request.model.clone()),
                ..Default::default()
            })
        }
    }

    struct DownProvider;

    impl LlmProvider for DownProvider {
        fn name(&self) -> &str {
            "down"
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::Timeout)
        }
    }

    #[tokio::test]
    async fn delegates_to_wrapped_provider() {
        let provider = BoxLlmProvider::new(EchoProvider);
        assert_eq!(provider.name(), "echo");

        let response = provider
            .complete(&CompletionRequest::single_prompt("gpt-4", "ping"))
            .await
            .unwrap();
        assert_eq!(response.content.as_deref(), Some("ping"));
        assert_eq!(response.model.as_deref(), Some("gpt-4"));
    }

    #[tokio::test]
    async fn errors_pass_through_unchanged() {
        let providers = [BoxLlmProvider::new(EchoProvider), BoxLlmProvider::new(DownProvider)];
        let request = CompletionRequest::single_prompt("", "ping");

        assert!(providers[0].complete(&request).await.is_ok());
        assert!(matches!(providers[1].complete(&request).await, Err(LlmError::Timeout)));
    }
}
