//! Append-only byte arena backing all file content.
//!
//! ```text
//! ┌────────────┬───────────┬──────────────┬──────────────────────────────┐
//! │ /welcome   │ /readme   │ (orphaned)   │            free              │
//! └────────────┴───────────┴──────────────┴──────────────────────────────┘
//! 0                                       ^ used                 capacity
//! ```
//!
//! Space is handed out by advancing `used`. Nothing is ever given back
//! short of [`DataArena::reset`].

use alloc::vec;
use alloc::vec::Vec;

use crate::entry::Extent;
use crate::error::{FsError, FsResult};

/// Single contiguous byte buffer with a bump cursor.
#[derive(Clone, Debug)]
pub struct DataArena {
    data: Vec<u8>,
    used: usize,
}

impl DataArena {
    /// Create a zeroed arena of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            used: 0,
        }
    }

    /// Total size in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes handed out so far.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Bytes still available.
    pub fn free(&self) -> usize {
        self.data.len() - self.used
    }

    /// Whether `length` more bytes can be reserved.
    pub fn can_reserve(&self, length: usize) -> bool {
        length <= self.free()
    }

    /// Bump-allocate `length` bytes.
    pub fn reserve(&mut self, length: usize) -> FsResult<Extent> {
        if !self.can_reserve(length) {
            return Err(FsError::OutOfSpace);
        }
        let extent = Extent::new(self.used, length);
        self.used += length;
        Ok(extent)
    }

    /// Copy `bytes` into the arena at `offset`.
    ///
    /// Only the arena bounds are checked. Keeping the range inside the
    /// caller's own extent is the caller's job; a range that runs past it
    /// overwrites whatever lies beyond.
    pub fn write_at(&mut self, offset: usize, bytes: &[u8]) -> FsResult<()> {
        let end = offset.checked_add(bytes.len()).ok_or(FsError::OutOfSpace)?;
        if end > self.data.len() {
            return Err(FsError::OutOfSpace);
        }
        self.data[offset..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Copy up to `length` bytes at `offset` into `dest`.
    ///
    /// Returns the number of bytes copied: `min(length, dest.len())`,
    /// further clamped to the arena end.
    pub fn read_at(&self, offset: usize, length: usize, dest: &mut [u8]) -> usize {
        let start = offset.min(self.data.len());
        let count = length.min(dest.len()).min(self.data.len() - start);
        dest[..count].copy_from_slice(&self.data[start..start + count]);
        count
    }

    /// Borrow `length` bytes at `offset`, clamped to the arena end.
    pub fn slice(&self, offset: usize, length: usize) -> &[u8] {
        let start = offset.min(self.data.len());
        let end = start.saturating_add(length).min(self.data.len());
        &self.data[start..end]
    }

    /// Forget every reservation and zero the buffer.
    pub fn reset(&mut self) {
        self.data.fill(0);
        self.used = 0;
    }
}
