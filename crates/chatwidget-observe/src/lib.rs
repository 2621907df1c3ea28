//! Observability setup shared by the chat widget binaries.

pub mod tracing_setup;
