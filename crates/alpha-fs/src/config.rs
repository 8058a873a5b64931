//! Capacity limits and write behavior of a filesystem instance.

use serde::{Deserialize, Serialize};

/// Maximum number of live entries, root included.
pub const MAX_ENTRIES: usize = 256;

/// Maximum content length of a single file (16 KB).
pub const MAX_FILE_SIZE: usize = 16 * 1024;

/// Total data arena size (4 MB).
pub const ARENA_CAPACITY: usize = MAX_ENTRIES * MAX_FILE_SIZE;

/// Maximum stored path length in bytes.
pub const MAX_PATH_LEN: usize = 127;

/// Permission bits given to every new entry.
pub const DEFAULT_PERMISSIONS: u16 = 0o755;

/// What a write does when new content outgrows the entry's reserved extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPolicy {
    /// Reserve a fresh extent and move the entry there. The old extent is
    /// orphaned; the arena never reclaims space.
    #[default]
    Relocate,

    /// Write past the end of the existing extent, overwriting whatever
    /// follows it in the arena.
    InPlace,
}

/// Filesystem configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsConfig {
    /// Entry table capacity
    pub max_entries: usize,

    /// Per-file size limit in bytes
    pub max_file_size: usize,

    /// Data arena size in bytes
    pub arena_capacity: usize,

    /// Stored path length limit in bytes
    pub max_path_len: usize,

    /// Growth behavior for writes to existing files
    pub growth: GrowthPolicy,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            max_entries: MAX_ENTRIES,
            max_file_size: MAX_FILE_SIZE,
            arena_capacity: ARENA_CAPACITY,
            max_path_len: MAX_PATH_LEN,
            growth: GrowthPolicy::Relocate,
        }
    }
}

impl FsConfig {
    /// Replace the growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Replace the entry table capacity.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Replace the arena size.
    pub fn with_arena_capacity(mut self, arena_capacity: usize) -> Self {
        self.arena_capacity = arena_capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = FsConfig::default();
        assert_eq!(config.max_entries, 256);
        assert_eq!(config.max_file_size, 16384);
        assert_eq!(config.arena_capacity, 4 * 1024 * 1024);
        assert_eq!(config.max_path_len, 127);
        assert_eq!(config.growth, GrowthPolicy::Relocate);
    }

    #[test]
    fn test_builders() {
        let config = FsConfig::default()
            .with_growth(GrowthPolicy::InPlace)
            .with_max_entries(8)
            .with_arena_capacity(64);
        assert_eq!(config.growth, GrowthPolicy::InPlace);
        assert_eq!(config.max_entries, 8);
        assert_eq!(config.arena_capacity, 64);
        assert_eq!(config.max_file_size, MAX_FILE_SIZE);
    }
}
