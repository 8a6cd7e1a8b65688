//! Bounded conversation history.
//!
//! Holds the most recent `2 * max_history_pairs` exchange lines. Appending
//! past capacity evicts from the front, so survivors keep their insertion
//! order.

use std::collections::VecDeque;

use lchat_types::chat::{ExchangeLine, Role};

/// Upper bound on lines reserved up front; larger windows grow on demand.
const PREALLOCATED_LINES: usize = 64;

/// FIFO-bounded sequence of exchange lines, owned by the chat loop.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    lines: VecDeque<ExchangeLine>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer holding at most `max_pairs` user/assistant
    /// pairs.
    pub fn new(max_pairs: usize) -> Self {
        let capacity = max_pairs.saturating_mul(2);
        Self {
            lines: VecDeque::with_capacity(capacity.min(PREALLOCATED_LINES)),
            capacity,
        }
    }

    /// Append a line and drop the oldest ones until within capacity.
    pub fn append(&mut self, role: Role, text: impl Into<String>) {
        self.lines.push_back(ExchangeLine::new(role, text));
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    /// Lines oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ExchangeLine> {
        self.lines.iter()
    }

    /// Most recently appended line.
    pub fn last(&self) -> Option<&ExchangeLine> {
        self.lines.back()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
