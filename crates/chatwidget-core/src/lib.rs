//! Reply resolution for the chat widget, plus the reply service logic.
//!
//! The widget side turns a raw utterance into a reply: local intent
//! classification, a bounded conversation buffer, and a remote attempt with
//! silent local fallback. The service side answers `POST /chat` from a
//! restaurant profile, a reply cache and a completion provider.
//!
//! This crate defines the ports (`ReplyBackend`, `CompletionProvider`) that
//! `chatwidget-infra` implements. It never depends on an HTTP client.

pub mod chat;
pub mod intent;
pub mod llm;
pub mod remote;
pub mod service;
