//! BoxCompletionProvider -- object-safe dynamic dispatch wrapper for
//! CompletionProvider. Same blanket-impl pattern as `BoxReplyBackend`.

use std::future::Future;
use std::pin::Pin;

use chatwidget_types::error::ProviderError;
use chatwidget_types::wire::PromptMessage;

use super::provider::{CompletionParams, CompletionProvider};

/// Object-safe version of [`CompletionProvider`] with boxed futures.
pub trait CompletionProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        messages: &'a [PromptMessage],
        params: CompletionParams,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>>;
}

impl<T: CompletionProvider> CompletionProviderDyn for T {
    fn name(&self) -> &str {
        CompletionProvider::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        messages: &'a [PromptMessage],
        params: CompletionParams,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>> {
        Box::pin(self.complete(messages, params))
    }
}

/// Type-erased completion provider for runtime provider selection.
pub struct BoxCompletionProvider {
    inner: Box<dyn CompletionProviderDyn + Send + Sync>,
}

impl BoxCompletionProvider {
    pub fn new<T: CompletionProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn complete(
        &self,
        messages: &[PromptMessage],
        params: CompletionParams,
    ) -> Result<String, ProviderError> {
        self.inner.complete_boxed(messages, params).await
    }
}
