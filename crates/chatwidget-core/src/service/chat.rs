//! Chat service behind `POST /chat`.
//!
//! Answer order: canned reply from the profile, then the reply cache, then
//! the completion provider. Provider replies are cached by normalized
//! question.

use chatwidget_types::error::ProviderError;
use chatwidget_types::profile::RestaurantProfile;
use chatwidget_types::wire::{ChatRequest, ChatResponse, PromptMessage, PromptRole, ReplySource};

use crate::llm::{BoxCompletionProvider, CompletionParams};

use super::cache::ReplyCache;
use super::canned::canned_reply;
use super::prompt::build_system_prompt;

/// Errors surfaced by the chat service to the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("message is required")]
    EmptyMessage,

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Answers widget questions for one restaurant.
pub struct ChatService {
    profile: RestaurantProfile,
    provider: BoxCompletionProvider,
    cache: ReplyCache,
    history_limit: usize,
    params: CompletionParams,
}

impl ChatService {
    pub fn new(
        profile: RestaurantProfile,
        provider: BoxCompletionProvider,
        cache_capacity: usize,
        history_limit: usize,
    ) -> Self {
        Self {
            profile,
            provider,
            cache: ReplyCache::new(cache_capacity),
            history_limit,
            params: CompletionParams::default(),
        }
    }

    pub fn profile(&self) -> &RestaurantProfile {
        &self.profile
    }

    pub fn cache(&self) -> &ReplyCache {
        &self.cache
    }

    /// Produce a reply for one request.
    pub async fn handle(&self, request: &ChatRequest) -> Result<ChatResponse, ServiceError> {
        let user_text = request.message.trim();
        if user_text.is_empty() {
            return Err(ServiceError::EmptyMessage);
        }

        if let Some(reply) = canned_reply(user_text, &self.profile) {
            tracing::debug!("answered with canned reply");
            return Ok(ChatResponse {
                reply,
                source: ReplySource::Canned,
            });
        }

        if let Some(reply) = self.cache.get(user_text) {
            tracing::debug!("answered from cache");
            return Ok(ChatResponse {
                reply,
                source: ReplySource::Cache,
            });
        }

        let messages = self.build_messages(request, user_text);
        let reply = self
            .provider
            .complete(&messages, self.params)
            .await
            .map_err(|error| {
                tracing::warn!(provider = %self.provider.name(), %error, "provider call failed");
                ServiceError::Provider(error)
            })?
            .trim()
            .to_string();

        if !reply.is_empty() {
            self.cache.insert(user_text, reply.clone());
        }

        Ok(ChatResponse {
            reply,
            source: ReplySource::Llm,
        })
    }

    /// System prompt, the tail of the supplied conversation, then the question.
    fn build_messages(&self, request: &ChatRequest, user_text: &str) -> Vec<PromptMessage> {
        let mut messages = vec![PromptMessage::new(
            PromptRole::System,
            build_system_prompt(&self.profile),
        )];

        if let Some(conversation) = &request.conversation {
            let start = conversation.len().saturating_sub(self.history_limit);
            messages.extend(conversation[start..].iter().cloned());
        }

        messages.push(PromptMessage::new(PromptRole::User, user_text));
        messages
    }
}
