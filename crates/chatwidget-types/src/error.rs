use thiserror::Error;

/// Why a remote reply attempt did not yield a usable reply.
///
/// Every variant is a soft failure: the widget logs it and answers locally.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("non-success status: {0}")]
    Status(u16),

    #[error("malformed reply payload: {0}")]
    Decode(String),
}

/// Errors from completion provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("missing PROVIDER_API_KEY; set it in .env and restart the server")]
    MissingApiKey,

    #[error("invalid provider configuration: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from loading configuration or profile files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
