//! Local intent classification and canned-reply lookup.
//!
//! - `classifier`: keyword rules mapping free text to a [`Topic`]
//! - `local_reply`: classification followed by a knowledge base lookup
//!
//! [`Topic`]: chatwidget_types::topic::Topic

pub mod classifier;

pub use classifier::{classify, local_reply};
