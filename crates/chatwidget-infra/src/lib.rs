//! Infrastructure implementations for the chat widget.
//!
//! - `remote`: reqwest-backed [`ReplyBackend`] used by the widget
//! - `llm`: OpenAI-compatible [`CompletionProvider`] used by the reply service
//! - `config`: TOML widget config and YAML restaurant profile loaders
//!
//! [`ReplyBackend`]: chatwidget_core::remote::ReplyBackend
//! [`CompletionProvider`]: chatwidget_core::llm::CompletionProvider

pub mod config;
pub mod llm;
pub mod remote;
