//! Reply service logic (the remote end of the widget).
//!
//! - `canned`: word-boundary intent rules answered from the restaurant profile
//! - `cache`: LRU cache of provider replies
//! - `prompt`: system prompt built from the profile
//! - `chat`: canned → cache → provider orchestration

pub mod cache;
pub mod canned;
pub mod chat;
pub mod prompt;

pub use chat::{ChatService, ServiceError};
