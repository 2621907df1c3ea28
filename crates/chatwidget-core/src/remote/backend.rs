//! ReplyBackend trait definition.

use chatwidget_types::chat::Turn;
use chatwidget_types::error::RemoteError;

/// A remote service that can answer a widget message.
///
/// One call per message, carrying the message and the conversation so far.
/// Implementations report every failure as a [`RemoteError`]; deciding what
/// to do about it is the responder's job.
///
/// Implementations live in chatwidget-infra (e.g., `HttpReplyBackend`).
pub trait ReplyBackend: Send + Sync {
    /// Short name used in log fields.
    fn name(&self) -> &str;

    /// Ask the remote service for a reply.
    fn fetch_reply(
        &self,
        message: &str,
        conversation: &[Turn],
    ) -> impl std::future::Future<Output = Result<String, RemoteError>> + Send;
}
