//! Reply resolver: the widget's single entry point.
//!
//! Owns the conversation buffer and decides, per the backend setting, whether
//! a reply comes from the remote responder or straight from local
//! classification. Nothing fails outward: every non-empty input gets a reply.

use std::sync::Arc;

use chatwidget_types::chat::Turn;
use chatwidget_types::knowledge::KnowledgeBase;
use chatwidget_types::topic::Topic;

use crate::intent::local_reply;
use crate::remote::{BoxReplyBackend, RemoteResponder};

use super::buffer::ConversationBuffer;

/// Turns raw widget input into a reply and keeps the conversation log.
///
/// Calls take `&mut self`, so one owner drives one resolution at a time.
/// Create one resolver per widget session; tests create as many isolated
/// instances as they like.
#[derive(Debug)]
pub struct ReplyResolver {
    buffer: ConversationBuffer,
    knowledge: Arc<KnowledgeBase>,
    remote: Option<RemoteResponder>,
}

impl ReplyResolver {
    /// A resolver with the backend disabled.
    pub fn local(knowledge: KnowledgeBase) -> Self {
        Self {
            buffer: ConversationBuffer::new(),
            knowledge: Arc::new(knowledge),
            remote: None,
        }
    }

    /// A resolver that tries `backend` first for every reply.
    pub fn with_backend(knowledge: KnowledgeBase, backend: BoxReplyBackend) -> Self {
        let knowledge = Arc::new(knowledge);
        let remote = RemoteResponder::new(backend, Arc::clone(&knowledge));
        Self {
            buffer: ConversationBuffer::new(),
            knowledge,
            remote: Some(remote),
        }
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    pub fn buffer(&self) -> &ConversationBuffer {
        &self.buffer
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Reply to free text typed by the user.
    ///
    /// Returns `None` for empty or whitespace-only input, with no turn
    /// recorded.
    pub async fn respond(&mut self, raw_input: &str) -> Option<String> {
        if raw_input.trim().is_empty() {
            return None;
        }

        self.buffer.append(Turn::user(raw_input));

        let reply = match &self.remote {
            Some(remote) => remote.resolve(raw_input, &self.buffer).await,
            None => local_reply(&self.knowledge, raw_input),
        };

        self.buffer.append(Turn::assistant(reply.clone()));
        Some(reply)
    }

    /// Reply to a quick-reply shortcut.
    ///
    /// Without a backend the topic's canned reply is returned directly, no
    /// classification involved. With a backend the topic key is sent as the
    /// message and a failure falls back to classifying that key.
    pub async fn respond_quick(&mut self, topic: Topic) -> String {
        let key = topic.as_str();
        self.buffer.append(Turn::user(key));

        let reply = match &self.remote {
            Some(remote) => remote.resolve(key, &self.buffer).await,
            None => self.knowledge.lookup(topic).to_string(),
        };

        tracing::debug!(%topic, remote = self.remote.is_some(), "quick intent resolved");
        self.buffer.append(Turn::assistant(reply.clone()));
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::ReplyBackend;
    use chatwidget_types::chat::Role;
    use chatwidget_types::error::RemoteError;
    use std::future::Future;

    #[derive(Clone)]
    enum MockResult {
        Reply(String),
        Error(fn() -> RemoteError),
    }

    struct MockBackend {
        result: MockResult,
    }

    impl MockBackend {
        fn ok(reply: &str) -> BoxReplyBackend {
            BoxReplyBackend::new(Self {
                result: MockResult::Reply(reply.to_string()),
            })
        }

        fn failing(error: fn() -> RemoteError) -> BoxReplyBackend {
            BoxReplyBackend::new(Self {
                result: MockResult::Error(error),
            })
        }
    }

    impl ReplyBackend for MockBackend {
        fn name(&self) -> &str {
            "mock"
        }

        fn fetch_reply(
            &self,
            _message: &str,
            _conversation: &[Turn],
        ) -> impl Future<Output = Result<String, RemoteError>> + Send {
            let result = self.result.clone();
            async move {
                match result {
                    MockResult::Reply(reply) => Ok(reply),
                    MockResult::Error(make) => Err(make()),
                }
            }
        }
    }

    #[tokio::test]
    async fn test_local_hours_question_returns_hours_entry() {
        let mut resolver = ReplyResolver::local(KnowledgeBase::default());
        let reply = resolver.respond("What time do you open?").await;
        assert_eq!(reply.as_deref(), Some(KnowledgeBase::default().hours.as_str()));
    }

    #[tokio::test]
    async fn test_empty_input_records_nothing() {
        let mut resolver = ReplyResolver::local(KnowledgeBase::default());
        assert_eq!(resolver.respond("").await, None);
        assert_eq!(resolver.respond("   \t\n").await, None);
        assert!(resolver.buffer().is_empty());
    }

    #[tokio::test]
    async fn test_respond_records_user_then_assistant() {
        let mut resolver = ReplyResolver::local(KnowledgeBase::default());
        let reply = resolver.respond("  menu please ").await.unwrap();

        let turns: Vec<&Turn> = resolver.buffer().turns().collect();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role(), Role::User);
        assert_eq!(turns[0].content(), "  menu please ");
        assert_eq!(turns[1].role(), Role::Assistant);
        assert_eq!(turns[1].content(), reply);
    }

    #[tokio::test]
    async fn test_buffer_stays_bounded_over_many_exchanges() {
        let mut resolver = ReplyResolver::local(KnowledgeBase::default());
        for i in 0..20 {
            resolver.respond(&format!("question {i}")).await;
            assert!(resolver.buffer().len() <= 10);
        }
        let first = resolver.buffer().turns().next().unwrap();
        assert_eq!(first.content(), "question 15");
    }

    #[tokio::test]
    async fn test_remote_success_overrides_classification() {
        let mut resolver =
            ReplyResolver::with_backend(KnowledgeBase::default(), MockBackend::ok("X"));
        assert_eq!(resolver.respond("What time do you open?").await.as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn test_remote_failures_match_local_result() {
        let failures: [fn() -> RemoteError; 4] = [
            || RemoteError::Transport("connection refused".to_string()),
            || RemoteError::Timeout,
            || RemoteError::Status(500),
            || RemoteError::Decode("missing field `reply`".to_string()),
        ];
        for input in ["What time do you open?", "vegan?", "call you", "hi"] {
            let mut local = ReplyResolver::local(KnowledgeBase::default());
            let expected = local.respond(input).await;
            for make in failures {
                let mut remote = ReplyResolver::with_backend(
                    KnowledgeBase::default(),
                    MockBackend::failing(make),
                );
                assert_eq!(remote.respond(input).await, expected, "input: {input}");
            }
        }
    }

    #[tokio::test]
    async fn test_quick_vegetarian_local_is_exact_entry() {
        let kb = KnowledgeBase {
            vegetarian: "Ask for the green menu.".to_string(),
            ..KnowledgeBase::default()
        };
        let mut resolver = ReplyResolver::local(kb);
        assert_eq!(resolver.respond_quick(Topic::Vegetarian).await, "Ask for the green menu.");
    }

    #[tokio::test]
    async fn test_quick_local_bypasses_classification() {
        // "call" would classify fine, but the lookup must not depend on it.
        let kb = KnowledgeBase {
            call: "CALL".to_string(),
            ..KnowledgeBase::default()
        };
        let mut resolver = ReplyResolver::local(kb);
        for topic in Topic::ALL {
            let reply = resolver.respond_quick(topic).await;
            assert_eq!(reply, resolver.knowledge().lookup(topic));
        }
    }

    #[tokio::test]
    async fn test_quick_records_topic_key_as_user_turn() {
        let mut resolver = ReplyResolver::local(KnowledgeBase::default());
        resolver.respond_quick(Topic::Directions).await;
        let turns = resolver.buffer().snapshot();
        assert_eq!(turns[0], Turn::user("directions"));
        assert_eq!(turns[1].role(), Role::Assistant);
    }

    #[tokio::test]
    async fn test_quick_with_backend_uses_remote_reply() {
        let mut resolver = ReplyResolver::with_backend(
            KnowledgeBase::default(),
            MockBackend::ok("From the kitchen"),
        );
        assert_eq!(resolver.respond_quick(Topic::Menu).await, "From the kitchen");
    }

    #[tokio::test]
    async fn test_quick_with_failing_backend_classifies_key() {
        let mut resolver = ReplyResolver::with_backend(
            KnowledgeBase::default(),
            MockBackend::failing(|| RemoteError::Timeout),
        );
        for topic in Topic::ALL {
            let reply = resolver.respond_quick(topic).await;
            assert_eq!(reply, KnowledgeBase::default().lookup(topic), "topic: {topic}");
        }
    }
}
