//! Completion provider abstractions for the reply service.
//!
//! - `CompletionProvider`: RPITIT trait for concrete provider implementations
//! - `BoxCompletionProvider`: object-safe wrapper for dynamic dispatch

pub mod box_provider;
pub mod provider;

pub use box_provider::BoxCompletionProvider;
pub use provider::{CompletionParams, CompletionProvider};
