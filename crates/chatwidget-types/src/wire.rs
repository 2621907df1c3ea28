//! JSON bodies exchanged between the widget and the reply service, and
//! between the reply service and its completion provider.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::chat::Turn;

/// Outbound body of the widget's remote call.
#[derive(Debug, Serialize)]
pub struct ReplyRequest<'a> {
    pub message: &'a str,
    pub conversation: &'a [Turn],
}

/// The only part of a service response the widget relies on.
///
/// Only a JSON object is accepted. Extra fields (such as `source`) are
/// ignored; a missing or non-string `reply` fails deserialization.
#[derive(Debug)]
pub struct ReplyPayload {
    pub reply: String,
}

impl<'de> Deserialize<'de> for ReplyPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PayloadVisitor;

        impl<'de> Visitor<'de> for PayloadVisitor {
            type Value = ReplyPayload;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with a string `reply` field")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ReplyPayload, A::Error> {
                let mut reply = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "reply" {
                        reply = Some(map.next_value::<String>()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                reply
                    .map(|reply| ReplyPayload { reply })
                    .ok_or_else(|| de::Error::missing_field("reply"))
            }
        }

        deserializer.deserialize_map(PayloadVisitor)
    }
}

/// Role of a prompt message sent to a completion provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for PromptRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptRole::System => write!(f, "system"),
            PromptRole::User => write!(f, "user"),
            PromptRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in a completion prompt or an inbound conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: PromptRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Inbound body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub conversation: Option<Vec<PromptMessage>>,
}

/// Where a service reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Canned,
    Cache,
    Llm,
}

/// Outbound body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: ReplySource,
}
