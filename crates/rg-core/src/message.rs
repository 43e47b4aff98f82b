//! Message line and history
//!
//! Every line shown to the player is also kept in a bounded history that the
//! frontend can page through. Lines waiting to be displayed sit in `pending`
//! until the frontend drains them.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Bounded message history plus the lines not yet displayed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLog {
    history: VecDeque<String>,
    capacity: usize,
    #[serde(skip)]
    pending: Vec<String>,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
            pending: Vec::new(),
        }
    }

    /// Add a line. Empty lines are ignored.
    ///
    /// The first letter is capitalized unless the line starts with a pack
    /// letter address such as `"c) a mace"`.
    pub fn push(&mut self, msg: impl Into<String>) {
        let line = capitalize(msg.into());
        if line.is_empty() {
            return;
        }
        if self.capacity > 0 {
            if self.history.len() == self.capacity {
                self.history.pop_front();
            }
            self.history.push_back(line.clone());
        }
        self.pending.push(line);
    }

    /// Take the lines that have not been displayed yet
    pub fn drain_pending(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    /// Most recent line, if any
    pub fn last(&self) -> Option<&str> {
        self.history.back().map(String::as_str)
    }

    /// History, oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

fn capitalize(mut line: String) -> String {
    let mut chars = line.chars();
    let (Some(first), second) = (chars.next(), chars.next()) else {
        return line;
    };
    if first.is_ascii_lowercase() && second != Some(')') {
        line[..1].make_ascii_uppercase();
    }
    line
}
