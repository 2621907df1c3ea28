//! Configuration types for the widget and the reply service.
//!
//! `WidgetConfig` is the top-level `chatwidget.toml`. Every field has a
//! default, so an empty or missing file yields a working local-only widget.

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Remote reply backend used by the widget.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Canned replies for local classification.
    #[serde(default)]
    pub knowledge: KnowledgeBase,

    /// Settings for `chatwidget serve`.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Remote backend settings. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// When false, every reply comes from local classification.
    #[serde(default)]
    pub enabled: bool,

    /// Full URL of the chat endpoint (POST).
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Upper bound on a single remote call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint_url() -> String {
    "http://127.0.0.1:8000/chat".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint_url: default_endpoint_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Reply service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the restaurant profile YAML.
    #[serde(default = "default_profile_path")]
    pub profile_path: String,

    /// Maximum number of cached question/reply pairs.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// How many trailing conversation entries are forwarded to the provider.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Origins allowed by CORS. `"null"` admits `file://` pages.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_profile_path() -> String {
    "restaurant.yml".to_string()
}

fn default_cache_capacity() -> usize {
    128
}

fn default_history_limit() -> usize {
    6
}

fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:8080",
        "http://127.0.0.1:8080",
        "http://localhost:5500",
        "http://127.0.0.1:5500",
        "https://www.dlanosrestaurant.ca",
        "null",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            profile_path: default_profile_path(),
            cache_capacity: default_cache_capacity(),
            history_limit: default_history_limit(),
            cors_origins: default_cors_origins(),
        }
    }
}
