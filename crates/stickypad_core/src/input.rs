//! Host-input vocabulary.
//!
//! The host view layer owns keyboard listening and on-screen selection
//! extraction; this module defines the types it routes into the core, so
//! the core stays free of platform event hooks.

use serde::{Deserialize, Serialize};

/// Where keyboard focus sits when a key event arrives.
///
/// A delete keystroke only targets the board when focus is outside any
/// text-input field, so normal text deletion is never intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    /// Focus is inside a title/content text field.
    TextInput,
    /// Focus is on the board surface itself.
    Surface,
}

/// A user's on-screen text selection, translated to character offsets.
///
/// `anchor` is where the selection started, `head` where it ended; reversed
/// selections (head before anchor) are normal and handled by `normalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSpan {
    pub anchor: usize,
    pub head: usize,
}

impl SelectionSpan {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Ordered `(start, end)` character offsets.
    pub fn normalized(self) -> (usize, usize) {
        (self.anchor.min(self.head), self.anchor.max(self.head))
    }

    /// Whether the selection covers no characters.
    pub fn is_collapsed(self) -> bool {
        self.anchor == self.head
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionSpan;

    #[test]
    fn normalized_orders_reversed_spans() {
        assert_eq!(SelectionSpan::new(9, 4).normalized(), (4, 9));
        assert_eq!(SelectionSpan::new(4, 9).normalized(), (4, 9));
    }

    #[test]
    fn collapsed_span_is_detected() {
        assert!(SelectionSpan::new(3, 3).is_collapsed());
        assert!(!SelectionSpan::new(3, 4).is_collapsed());
    }
}
