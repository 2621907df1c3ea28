//! Remote responder: one remote attempt, then silent local fallback.
//!
//! Remote outcomes are tagged as [`RemoteOutcome`] and the fallback policy is
//! applied in exactly one place, [`RemoteResponder::resolve`]. Whatever goes
//! wrong remotely, the caller gets a reply.

use std::sync::Arc;
use std::time::Instant;

use chatwidget_types::chat::Turn;
use chatwidget_types::error::RemoteError;
use chatwidget_types::knowledge::KnowledgeBase;

use crate::chat::buffer::ConversationBuffer;
use crate::intent::local_reply;

use super::box_backend::BoxReplyBackend;

/// Result of a single remote attempt.
#[derive(Debug)]
pub enum RemoteOutcome {
    /// The service answered with a string reply.
    Success(String),
    /// Anything else. Never surfaced past the responder.
    Failure(RemoteError),
}

/// Answers through a remote backend, falling back to local classification.
#[derive(Debug)]
pub struct RemoteResponder {
    backend: BoxReplyBackend,
    knowledge: Arc<KnowledgeBase>,
}

impl RemoteResponder {
    pub fn new(backend: BoxReplyBackend, knowledge: Arc<KnowledgeBase>) -> Self {
        Self { backend, knowledge }
    }

    /// Make one remote call and tag its outcome.
    pub async fn attempt(&self, message: &str, conversation: &[Turn]) -> RemoteOutcome {
        let start = Instant::now();
        match self.backend.fetch_reply(message, conversation).await {
            Ok(reply) => {
                tracing::debug!(
                    backend = %self.backend.name(),
                    latency_ms = start.elapsed().as_millis() as u64,
                    "remote reply received"
                );
                RemoteOutcome::Success(reply)
            }
            Err(error) => RemoteOutcome::Failure(error),
        }
    }

    /// Reply to `text` using the buffer as context.
    ///
    /// Falls back to [`local_reply`] on the same text for every failure kind.
    /// The failure is only visible at debug level.
    pub async fn resolve(&self, text: &str, buffer: &ConversationBuffer) -> String {
        let conversation = buffer.snapshot();
        match self.attempt(text, &conversation).await {
            RemoteOutcome::Success(reply) => reply,
            RemoteOutcome::Failure(error) => {
                tracing::debug!(
                    backend = %self.backend.name(),
                    %error,
                    "remote reply failed, answering locally"
                );
                local_reply(&self.knowledge, text)
            }
        }
    }
}
