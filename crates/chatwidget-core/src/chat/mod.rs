//! Widget-side conversation handling.
//!
//! - `buffer`: bounded FIFO log of recent turns
//! - `resolver`: `respond` / `respond_quick`, the entry points the UI calls

pub mod buffer;
pub mod resolver;

pub use buffer::{CONVERSATION_CAPACITY, ConversationBuffer};
pub use resolver::ReplyResolver;
