//! CompletionProvider trait definition.

use chatwidget_types::error::ProviderError;
use chatwidget_types::wire::PromptMessage;

/// Sampling parameters for a single completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_tokens: 512,
        }
    }
}

/// Trait for chat-completion backends used by the reply service.
///
/// Implementations live in chatwidget-infra (e.g., `OpenAiCompatProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "azure").
    fn name(&self) -> &str;

    /// Send the prompt and return the assistant message text.
    fn complete(
        &self,
        messages: &[PromptMessage],
        params: CompletionParams,
    ) -> impl std::future::Future<Output = Result<String, ProviderError>> + Send;
}
