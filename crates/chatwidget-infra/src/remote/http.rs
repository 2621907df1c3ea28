//! HttpReplyBackend -- concrete [`ReplyBackend`] over HTTP.
//!
//! POSTs `{ message, conversation }` as JSON to the configured endpoint and
//! expects `{ reply: string }` back. Every failure is reported as a
//! [`RemoteError`]; the responder in chatwidget-core decides what to do.

use std::time::Duration;

use chatwidget_core::remote::ReplyBackend;
use chatwidget_types::chat::Turn;
use chatwidget_types::config::BackendConfig;
use chatwidget_types::error::RemoteError;
use chatwidget_types::wire::{ReplyPayload, ReplyRequest};

/// Widget reply backend talking to the chat service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReplyBackend {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpReplyBackend {
    /// Create a backend whose every request is bounded by `timeout`.
    pub fn new(endpoint_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, RemoteError> {
        Self::new(
            config.endpoint_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

fn transport_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::Transport(e.to_string())
    }
}

impl ReplyBackend for HttpReplyBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_reply(
        &self,
        message: &str,
        conversation: &[Turn],
    ) -> Result<String, RemoteError> {
        let body = ReplyRequest {
            message,
            conversation,
        };

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        let payload: ReplyPayload = serde_json::from_slice(&bytes)
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        tracing::debug!(
            endpoint = %self.endpoint_url,
            turns = conversation.len(),
            "remote reply decoded"
        );
        Ok(payload.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn backend_for(server: &MockServer) -> HttpReplyBackend {
        HttpReplyBackend::new(format!("{}/chat", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_posts_message_and_conversation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({
                "message": "menu?",
                "conversation": [{ "role": "user", "content": "menu?" }]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "reply": "X", "source": "llm" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let reply = backend
            .fetch_reply("menu?", &[Turn::user("menu?")])
            .await
            .unwrap();
        assert_eq!(reply, "X");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_json(json!({ "reply": "nope" })))
            .mount(&server)
            .await;

        let err = backend_for(&server).await.fetch_reply("hi", &[]).await.unwrap_err();
        assert!(matches!(err, RemoteError::Status(502)));
    }

    #[tokio::test]
    async fn test_missing_or_non_string_reply_is_decode_error() {
        for body in [json!({ "answer": "X" }), json!({ "reply": 7 }), json!(["X"])] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&server)
                .await;

            let err = backend_for(&server).await.fetch_reply("hi", &[]).await.unwrap_err();
            assert!(matches!(err, RemoteError::Decode(_)));
        }
    }

    #[tokio::test]
    async fn test_array_body_falls_back_to_local_reply() {
        use chatwidget_core::chat::ReplyResolver;
        use chatwidget_core::remote::BoxReplyBackend;
        use chatwidget_types::knowledge::KnowledgeBase;

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["X"])))
            .mount(&server)
            .await;

        let backend = BoxReplyBackend::new(backend_for(&server).await);
        let mut remote = ReplyResolver::with_backend(KnowledgeBase::default(), backend);
        let mut local = ReplyResolver::local(KnowledgeBase::default());

        let question = "What time do you open?";
        let reply = remote.respond(question).await;
        assert_ne!(reply.as_deref(), Some("X"));
        assert_eq!(reply, local.respond(question).await);
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = backend_for(&server).await.fetch_reply("hi", &[]).await.unwrap_err();
        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "reply": "late" }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let backend =
            HttpReplyBackend::new(format!("{}/chat", server.uri()), Duration::from_millis(200))
                .unwrap();
        let err = backend.fetch_reply("hi", &[]).await.unwrap_err();
        assert!(matches!(err, RemoteError::Timeout));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let backend =
            HttpReplyBackend::new("http://127.0.0.1:9/chat", Duration::from_secs(2)).unwrap();
        let err = backend.fetch_reply("hi", &[]).await.unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_) | RemoteError::Timeout));
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let backend = HttpReplyBackend::from_config(&BackendConfig::default()).unwrap();
        assert_eq!(backend.endpoint_url(), "http://127.0.0.1:8000/chat");
    }
}
