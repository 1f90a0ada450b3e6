//! Bounded undo/redo log of gradient snapshots.
//!
//! A linear list of owned [`Gradient`] clones with a cursor. Recording after
//! an undo discards the redo branch; going over capacity evicts the oldest
//! entry. Navigating (undo/redo) never records.

use crate::gradient::Gradient;

/// Snapshots kept when no capacity is given.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog {
    entries: Vec<Gradient>,
    cursor: usize,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Creates an empty log holding at most `capacity` snapshots (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a snapshot, dropping anything after the cursor.
    pub fn record(&mut self, gradient: &Gradient) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(gradient.clone());
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
        log::debug!("history: recorded entry {} of {}", self.cursor + 1, self.entries.len());
    }

    /// Steps back one snapshot; `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<&Gradient> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Steps forward one snapshot; `None` when already at the newest.
    pub fn redo(&mut self) -> Option<&Gradient> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&Gradient> {
        self.entries.get(self.cursor)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
