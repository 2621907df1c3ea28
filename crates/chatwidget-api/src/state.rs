//! Application state shared by the HTTP handlers.
//!
//! `AppState` pins the chat service to the concrete OpenAI-compatible
//! provider and the restaurant profile loaded from disk.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use chatwidget_core::llm::BoxCompletionProvider;
use chatwidget_core::service::ChatService;
use chatwidget_infra::config::load_profile;
use chatwidget_infra::llm::{OpenAiCompatProvider, ProviderSettings};
use chatwidget_types::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    /// Wire the reply service from the server config and the environment.
    ///
    /// Fails if the profile cannot be loaded or the provider settings are
    /// unusable. A missing API key is not fatal here; it is reported per
    /// request.
    pub async fn init(server: &ServerConfig, profile_path: &Path) -> anyhow::Result<Self> {
        let profile = load_profile(profile_path).await.with_context(|| {
            format!("failed to load restaurant profile {}", profile_path.display())
        })?;

        let settings = ProviderSettings::from_env();
        let provider = OpenAiCompatProvider::new(settings).context("invalid provider settings")?;
        tracing::info!(provider = %provider.chat_url(), "completion provider ready");

        let chat_service = ChatService::new(
            profile,
            BoxCompletionProvider::new(provider),
            server.cache_capacity,
            server.history_limit,
        );
        Ok(Self::from_service(chat_service))
    }

    pub fn from_service(chat_service: ChatService) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
        }
    }
}
