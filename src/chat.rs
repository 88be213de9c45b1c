//! Append-only chat log with left/right alignment metadata.
//!
//! Rendering-agnostic: the log records which side each line belongs to and
//! leaves the actual alignment to the presentation layer.

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

/// Which side of the conversation a message belongs to. Local messages are
/// rendered right-aligned, remote ones left-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Local,
    Remote,
}

/// A single chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatEntry {
    /// Strictly increasing, equal to insertion order.
    pub seq: u64,
    pub side: Side,
    pub text: String,
}

/// Ordered record of chat lines. Entries are only ever appended; there is
/// no removal and no reordering. The log is unbounded.
#[derive(Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    next_seq: u64,
}

impl ChatLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, assigning the next sequence number. Never fails.
    pub fn append(&mut self, text: &str, side: Side) -> &ChatEntry {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(ChatEntry {
            seq,
            side,
            text: text.to_string(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Iterate entries in insertion order. Restartable; repeated calls see
    /// the same sequence.
    pub fn entries(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
