//! Usage figures derived from the entry table and arena.

use serde::{Deserialize, Serialize};

/// Filesystem statistics snapshot.
///
/// Computed on demand; nothing here is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsStats {
    /// Live entries, root included
    pub entry_count: usize,
    /// Live file entries
    pub file_count: usize,
    /// Live directory entries, root included
    pub directory_count: usize,
    /// Arena bytes handed out, orphaned extents included
    pub bytes_used: usize,
    /// Arena bytes still available
    pub bytes_free: usize,
}

impl FsStats {
    /// Total arena size.
    pub fn capacity(&self) -> usize {
        self.bytes_used + self.bytes_free
    }

    /// Used share of the arena in percent (0-100).
    pub fn usage_percent(&self) -> usize {
        let capacity = self.capacity();
        if capacity == 0 {
            return 0;
        }
        (self.bytes_used * 100) / capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_and_percent() {
        let stats = FsStats {
            entry_count: 3,
            file_count: 2,
            directory_count: 1,
            bytes_used: 250,
            bytes_free: 750,
        };
        assert_eq!(stats.capacity(), 1000);
        assert_eq!(stats.usage_percent(), 25);
    }

    #[test]
    fn test_empty_arena() {
        assert_eq!(FsStats::default().usage_percent(), 0);
    }
}
