//! Shared domain types for the chat widget.
//!
//! This crate contains the data shapes used across the workspace:
//! conversation turns, topics, the knowledge base, configuration,
//! the restaurant profile, wire formats and error types.
//!
//! Zero infrastructure dependencies -- only serde, indexmap, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod profile;
pub mod topic;
pub mod wire;
