//! Remote reply attempts with local fallback.
//!
//! - `ReplyBackend`: RPITIT trait for the network call (implemented in infra)
//! - `BoxReplyBackend`: object-safe wrapper for dynamic dispatch
//! - `RemoteResponder`: one attempt, tagged outcome, silent fallback

pub mod backend;
pub mod box_backend;
pub mod responder;

pub use backend::ReplyBackend;
pub use box_backend::BoxReplyBackend;
pub use responder::{RemoteOutcome, RemoteResponder};
