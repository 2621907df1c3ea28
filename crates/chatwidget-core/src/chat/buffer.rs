//! Bounded conversation memory.
//!
//! Supplies context for the remote call only; local classification never
//! reads it.

use std::collections::VecDeque;

use chatwidget_types::chat::Turn;

/// Maximum number of turns retained.
pub const CONVERSATION_CAPACITY: usize = 10;

/// Ordered log of the most recent turns, oldest first.
///
/// Append-only; once full, each append evicts the oldest turn.
#[derive(Debug, Clone, Default)]
pub struct ConversationBuffer {
    turns: VecDeque<Turn>,
}

impl ConversationBuffer {
    pub fn new() -> Self {
        Self {
            turns: VecDeque::with_capacity(CONVERSATION_CAPACITY + 1),
        }
    }

    /// Add a turn, then drop the oldest entries beyond the capacity.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > CONVERSATION_CAPACITY {
            self.turns.pop_front();
        }
    }

    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    /// Owned copy of the current turns, oldest first.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
