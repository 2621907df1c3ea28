//! Builds the reply resolver the terminal commands drive.

use chatwidget_core::chat::ReplyResolver;
use chatwidget_core::remote::BoxReplyBackend;
use chatwidget_infra::remote::HttpReplyBackend;
use chatwidget_types::config::WidgetConfig;

/// Resolver for this session.
///
/// `force_local` wins over `[backend].enabled`. A backend that cannot be
/// constructed is logged and the session continues locally.
pub fn build_resolver(config: &WidgetConfig, force_local: bool) -> ReplyResolver {
    let knowledge = config.knowledge.clone();

    if force_local || !config.backend.enabled {
        tracing::debug!("remote backend disabled, answering locally");
        return ReplyResolver::local(knowledge);
    }

    match HttpReplyBackend::from_config(&config.backend) {
        Ok(backend) => {
            tracing::info!(endpoint = %backend.endpoint_url(), "remote backend enabled");
            ReplyResolver::with_backend(knowledge, BoxReplyBackend::new(backend))
        }
        Err(error) => {
            tracing::warn!(%error, "failed to build remote backend, answering locally");
            ReplyResolver::local(knowledge)
        }
    }
}
