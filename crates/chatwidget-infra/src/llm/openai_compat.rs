//! OpenAI-compatible chat completions provider.
//!
//! One [`OpenAiCompatProvider`] serves OpenAI, Groq and other services that
//! speak the `/chat/completions` protocol, plus Azure OpenAI deployments,
//! which use a different URL layout and an `api-key` header.
//!
//! Settings come from the environment (after `.env` is loaded):
//! `PROVIDER_BASE_URL`, `PROVIDER_API_KEY`, `PROVIDER_MODEL`,
//! `PROVIDER_KIND` and `AZURE_OPENAI_API_VERSION`.

use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use chatwidget_core::llm::{CompletionParams, CompletionProvider};
use chatwidget_types::error::ProviderError;
use chatwidget_types::wire::PromptMessage;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Which URL layout and auth header the provider uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Azure,
    Other,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "azure" => Ok(ProviderKind::Azure),
            "other" => Ok(ProviderKind::Other),
            other => Err(format!("invalid provider kind: '{other}'")),
        }
    }
}

impl ProviderKind {
    /// Kind for a `PROVIDER_KIND` value. Unset means `openai`; anything
    /// unrecognized is logged and treated as `other`, whatever the base URL.
    pub fn from_setting(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => raw.parse().unwrap_or_else(|err: String| {
                tracing::warn!(%err, "falling back to an OpenAI-style endpoint");
                ProviderKind::Other
            }),
            None => ProviderKind::OpenAi,
        }
    }
}

/// Connection settings for an OpenAI-compatible provider.
///
/// Does not derive Debug; the API key must never reach logs.
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: SecretString,
    pub model: String,
    pub kind: ProviderKind,
    pub azure_api_version: Option<String>,
    pub timeout: Duration,
}

impl ProviderSettings {
    /// Read settings from the process environment, with defaults.
    ///
    /// An unrecognized `PROVIDER_KIND` is logged and treated as `other`.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let kind = ProviderKind::from_setting(var("PROVIDER_KIND").as_deref());

        Self {
            base_url: var("PROVIDER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: SecretString::from(var("PROVIDER_API_KEY").unwrap_or_default()),
            model: var("PROVIDER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            kind,
            azure_api_version: var("AZURE_OPENAI_API_VERSION"),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat completions client for OpenAI-style and Azure endpoints.
///
/// Does NOT derive Debug so the API key cannot leak through formatting.
pub struct OpenAiCompatProvider {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    kind: ProviderKind,
    chat_url: String,
}

impl OpenAiCompatProvider {
    /// Build a provider, resolving the chat URL for the configured kind.
    ///
    /// Azure requires `azure_api_version`.
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let chat_url = Self::resolve_chat_url(&settings)?;
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ProviderError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: settings.api_key,
            model: settings.model,
            kind: settings.kind,
            chat_url,
        })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    fn resolve_chat_url(settings: &ProviderSettings) -> Result<String, ProviderError> {
        let base = settings.base_url.trim_end_matches('/');
        match settings.kind {
            ProviderKind::OpenAi | ProviderKind::Other => Ok(format!("{base}/chat/completions")),
            ProviderKind::Azure => {
                let version = settings.azure_api_version.as_deref().ok_or_else(|| {
                    ProviderError::Config(
                        "AZURE_OPENAI_API_VERSION is required for PROVIDER_KIND=azure".to_string(),
                    )
                })?;
                let base = if base.ends_with("/openai") {
                    base.to_string()
                } else {
                    format!("{base}/openai")
                };
                Ok(format!(
                    "{base}/deployments/{}/chat/completions?api-version={version}",
                    settings.model
                ))
            }
        }
    }
}

impl CompletionProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        match self.kind {
            ProviderKind::Azure => "azure",
            ProviderKind::OpenAi | ProviderKind::Other => "openai",
        }
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
        params: CompletionParams,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key.expose_secret();
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let body = CompletionBody {
            model: &self.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let request = self.client.post(&self.chat_url).json(&body);
        let request = match self.kind {
            ProviderKind::Azure => request.header("api-key", api_key),
            ProviderKind::OpenAi | ProviderKind::Other => request.bearer_auth(api_key),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: CompletionReply = response
            .json()
            .await
            .map_err(|e| ProviderError::Deserialization(format!("failed to parse response: {e}")))?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::Deserialization("response has no message content".to_string())
            })?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatwidget_types::wire::PromptRole;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base_url: &str, kind: ProviderKind, key: &str) -> ProviderSettings {
        ProviderSettings {
            base_url: base_url.to_string(),
            api_key: SecretString::from(key.to_string()),
            model: "gpt-4o-mini".to_string(),
            kind,
            azure_api_version: None,
            timeout: Duration::from_secs(5),
        }
    }

    fn prompt() -> Vec<PromptMessage> {
        vec![
            PromptMessage::new(PromptRole::System, "be brief"),
            PromptMessage::new(PromptRole::User, "do you have wifi?"),
        ]
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
    }

    #[test]
    fn test_openai_url_trims_trailing_slash() {
        let settings = settings("https://api.openai.com/v1/", ProviderKind::OpenAi, "k");
        let provider = OpenAiCompatProvider::new(settings).unwrap();
        assert_eq!(provider.chat_url(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_azure_url_adds_openai_segment_and_version() {
        let mut s = settings("https://res.openai.azure.com", ProviderKind::Azure, "k");
        s.model = "my-deploy".to_string();
        s.azure_api_version = Some("2024-02-01".to_string());
        let provider = OpenAiCompatProvider::new(s).unwrap();
        assert_eq!(
            provider.chat_url(),
            "https://res.openai.azure.com/openai/deployments/my-deploy/chat/completions\
             ?api-version=2024-02-01"
        );
        assert_eq!(provider.name(), "azure");
    }

    #[test]
    fn test_azure_requires_api_version() {
        let settings = settings("https://res.openai.azure.com/openai", ProviderKind::Azure, "k");
        let result = OpenAiCompatProvider::new(settings);
        assert!(matches!(result, Err(ProviderError::Config(_))));
    }

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!(" azure ".parse::<ProviderKind>().unwrap(), ProviderKind::Azure);
        assert!("bedrock".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_unknown_kind_setting_uses_openai_style_url() {
        assert_eq!(ProviderKind::from_setting(None), ProviderKind::OpenAi);
        assert_eq!(ProviderKind::from_setting(Some("AZURE")), ProviderKind::Azure);

        let kind = ProviderKind::from_setting(Some("bedrock"));
        assert_eq!(kind, ProviderKind::Other);

        let provider =
            OpenAiCompatProvider::new(settings("https://gateway.example.com/llm", kind, "k"))
                .unwrap();
        assert_eq!(provider.chat_url(), "https://gateway.example.com/llm/chat/completions");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("x")))
            .expect(0)
            .mount(&server)
            .await;

        let provider =
            OpenAiCompatProvider::new(settings(&server.uri(), ProviderKind::OpenAi, "  ")).unwrap();
        let err = provider
            .complete(&prompt(), CompletionParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_openai_request_shape_and_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.2,
                "max_tokens": 512,
                "messages": [
                    { "role": "system", "content": "be brief" },
                    { "role": "user", "content": "do you have wifi?" }
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion("  Yes, free WiFi. ")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let settings = settings(&server.uri(), ProviderKind::OpenAi, "sk-test");
        let provider = OpenAiCompatProvider::new(settings).unwrap();
        let reply = provider
            .complete(&prompt(), CompletionParams::default())
            .await
            .unwrap();
        assert_eq!(reply, "Yes, free WiFi.");
    }

    #[tokio::test]
    async fn test_azure_request_uses_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/deployments/gpt-4o-mini/chat/completions"))
            .and(query_param("api-version", "2024-02-01"))
            .and(header("api-key", "az-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("hi")))
            .expect(1)
            .mount(&server)
            .await;

        let mut s = settings(&server.uri(), ProviderKind::Azure, "az-key");
        s.azure_api_version = Some("2024-02-01".to_string());
        let provider = OpenAiCompatProvider::new(s).unwrap();
        let reply = provider
            .complete(&prompt(), CompletionParams::default())
            .await
            .unwrap();
        assert_eq!(reply, "hi");
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let provider =
            OpenAiCompatProvider::new(settings(&server.uri(), ProviderKind::Other, "k")).unwrap();
        let err = provider
            .complete(&prompt(), CompletionParams::default())
            .await
            .unwrap_err();
        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let provider =
            OpenAiCompatProvider::new(settings(&server.uri(), ProviderKind::OpenAi, "k")).unwrap();
        let err = provider
            .complete(&prompt(), CompletionParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Deserialization(_)));
    }
}
