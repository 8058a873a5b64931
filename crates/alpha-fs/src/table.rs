//! Fixed-capacity entry table keyed by canonical path.
//!
//! Lookups are linear scans over at most `capacity` records. Deletion moves
//! the last live entry into the freed slot, so positions are never stable
//! and are never handed out.

use alloc::string::String;
use alloc::vec::Vec;

use crate::entry::{Entry, EntryKind};
use crate::error::{FsError, FsResult};
use crate::path::ROOT;

/// Ordered collection of entries.
#[derive(Clone, Debug)]
pub struct EntryTable {
    entries: Vec<Entry>,
    capacity: usize,
    max_path_len: usize,
}

impl EntryTable {
    /// Create an empty table.
    pub fn new(capacity: usize, max_path_len: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            max_path_len,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of live entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another entry would exceed capacity.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Append a new entry for `path`.
    ///
    /// `offset` is the arena cursor the entry's empty extent starts at.
    pub fn create(
        &mut self,
        path: String,
        is_directory: bool,
        offset: usize,
        tick: u64,
    ) -> FsResult<&mut Entry> {
        if path.is_empty() {
            return Err(FsError::InvalidPath);
        }
        if path.len() > self.max_path_len {
            return Err(FsError::PathTooLong);
        }
        if self.exists(&path) {
            return Err(FsError::DuplicateExists);
        }
        if self.is_full() {
            return Err(FsError::TableFull);
        }

        self.entries.push(Entry::new(path, is_directory, offset, tick));
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last])
    }

    /// Exact-match lookup.
    pub fn find(&self, path: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Exact-match lookup for mutation.
    pub fn find_mut(&mut self, path: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.path == path)
    }

    /// Whether an entry with this path exists.
    pub fn exists(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Remove the entry for `path`, returning it.
    ///
    /// The last live entry takes over the removed slot.
    pub fn delete(&mut self, path: &str) -> FsResult<Entry> {
        if path == ROOT {
            return Err(FsError::CannotDeleteRoot);
        }
        let idx = self
            .entries
            .iter()
            .position(|e| e.path == path)
            .ok_or(FsError::NotFound)?;
        Ok(self.entries.swap_remove(idx))
    }

    /// `file`, `directory`, or `unknown` for a missing path.
    pub fn kind_string(&self, path: &str) -> &'static str {
        self.find(path)
            .map(Entry::kind)
            .unwrap_or(EntryKind::Unknown)
            .as_str()
    }

    /// Rendered permissions, or all dashes for a missing path.
    pub fn permission_string(&self, path: &str) -> String {
        match self.find(path) {
            Some(entry) => entry.permission_string(),
            None => String::from("----------"),
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
