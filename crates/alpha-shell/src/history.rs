//! Command history ring.

use alloc::collections::VecDeque;
use alloc::string::String;

/// Most recent commands, oldest evicted first.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    /// Commands ever recorded, evicted ones included
    total: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Record a command. Blank lines are ignored.
    pub fn push(&mut self, line: &str) {
        if line.trim().is_empty() || self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(String::from(line));
        self.total += 1;
    }

    /// Commands currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commands ever recorded.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Held commands oldest first, with their 1-based sequence numbers.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        let first = self.total - self.entries.len() + 1;
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, line)| (first + i, line.as_str()))
    }

    /// Most recent command.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}
