//! In-memory filesystem: an entry table over a shared byte arena.
//!
//! One `RamFs` value owns all filesystem state. Nothing is global, so
//! independent instances (one per test, say) coexist freely.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use tracing::{debug, trace, warn};

use crate::arena::DataArena;
use crate::bootstrap;
use crate::config::{FsConfig, GrowthPolicy};
use crate::directory::{direct_children, display_name, has_descendants, write_listing};
use crate::entry::{Entry, EntryKind, Extent, Permissions};
use crate::error::{FsError, FsResult};
use crate::path::{self, ROOT, SEPARATOR};
use crate::service::FsService;
use crate::stats::FsStats;
use crate::table::EntryTable;

/// In-memory filesystem.
pub struct RamFs {
    config: FsConfig,
    table: EntryTable,
    arena: DataArena,
    /// Tick counter standing in for wall-clock time
    tick: u64,
}

impl Default for RamFs {
    fn default() -> Self {
        Self::new()
    }
}

impl RamFs {
    /// Create a filesystem holding only `/`, with default limits.
    pub fn new() -> Self {
        Self::with_config(FsConfig::default())
    }

    /// Create a filesystem holding only `/`.
    pub fn with_config(config: FsConfig) -> Self {
        // Root must always fit.
        let table = EntryTable::new(config.max_entries.max(1), config.max_path_len.max(1));
        let arena = DataArena::new(config.arena_capacity);

        let mut fs = Self {
            config,
            table,
            arena,
            tick: 0,
        };
        fs.install_root();
        fs
    }

    /// Create a filesystem with the standard directory skeleton and
    /// fixture files.
    pub fn with_skeleton() -> FsResult<Self> {
        let mut fs = Self::new();
        bootstrap::seed(&mut fs)?;
        Ok(fs)
    }

    /// Active configuration.
    pub fn config(&self) -> &FsConfig {
        &self.config
    }

    /// Read-only view of the entry table.
    pub fn table(&self) -> &EntryTable {
        &self.table
    }

    /// Read-only view of the data arena.
    pub fn arena(&self) -> &DataArena {
        &self.arena
    }

    /// Current tick value.
    pub fn now(&self) -> u64 {
        self.tick
    }

    /// Drop all entries and content and start over with only `/`.
    ///
    /// This is the only way arena space is ever recovered.
    pub fn reinitialize(&mut self) {
        debug!(
            entries = self.table.len(),
            used = self.arena.used(),
            "reinitializing filesystem"
        );
        self.table.clear();
        self.arena.reset();
        self.tick = 0;
        self.install_root();
    }

    fn install_root(&mut self) {
        let tick = self.next_tick();
        let offset = self.arena.used();
        if let Err(e) = self.table.create(String::from(ROOT), true, offset, tick) {
            warn!(error = %e, "failed to install root directory");
        }
    }

    /// Advance the tick counter and return the new value.
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Tick the next mutation will carry. The counter only moves once the
    /// table accepts the entry.
    fn upcoming_tick(&self) -> u64 {
        self.tick + 1
    }

    /// Canonical form of a caller-supplied path.
    fn canonical(path: &str) -> FsResult<String> {
        if path.is_empty() {
            return Err(FsError::InvalidPath);
        }
        Ok(path::normalize(path))
    }

    fn lookup(&self, path: &str) -> Option<&Entry> {
        let path = Self::canonical(path).ok()?;
        self.table.find(&path)
    }

    /// Write into an existing file, relocating or spilling when the content
    /// outgrows its extent.
    fn overwrite(&mut self, path: &str, extent: Extent, bytes: &[u8]) -> FsResult<()> {
        let len = bytes.len();
        let target = if extent.fits(len) {
            extent
        } else {
            match self.config.growth {
                GrowthPolicy::Relocate => {
                    let fresh = self.arena.reserve(len)?;
                    debug!(
                        path = %path,
                        from = extent.offset,
                        to = fresh.offset,
                        len,
                        "relocating file to a larger extent"
                    );
                    fresh
                }
                GrowthPolicy::InPlace => {
                    warn!(
                        path = %path,
                        offset = extent.offset,
                        reserved = extent.length,
                        len,
                        "write runs past reserved extent; following bytes are overwritten"
                    );
                    Extent::new(extent.offset, len)
                }
            }
        };

        self.arena.write_at(target.offset, bytes)?;

        let tick = self.next_tick();
        let entry = self.table.find_mut(path).ok_or(FsError::NotFound)?;
        entry.size = len;
        entry.extent = target;
        entry.modified_tick = tick;
        Ok(())
    }

    /// Create a file and give it a fresh extent holding `bytes`.
    fn write_new(&mut self, path: String, bytes: &[u8]) -> FsResult<()> {
        let len = bytes.len();
        if !self.arena.can_reserve(len) {
            return Err(FsError::OutOfSpace);
        }

        let tick = self.upcoming_tick();
        let offset = self.arena.used();
        let entry = self.table.create(path, false, offset, tick)?;
        self.tick = tick;
        let extent = self.arena.reserve(len)?;
        self.arena.write_at(extent.offset, bytes)?;
        entry.size = len;
        entry.extent = extent;

        debug!(path = %entry.path, offset = extent.offset, len, "created file");
        Ok(())
    }

    fn child_names(&self, dir: &str) -> FsResult<Vec<String>> {
        let dir = Self::canonical(dir)?;
        match self.table.find(&dir) {
            Some(entry) if entry.is_directory => {}
            Some(_) => return Err(FsError::NotADirectory),
            None => return Err(FsError::NotFound),
        }

        let prefix = path::child_prefix(&dir);
        Ok(direct_children(&self.table, &prefix)
            .map(display_name)
            .collect())
    }
}

impl FsService for RamFs {
    fn create(&mut self, path: &str, is_directory: bool) -> FsResult<()> {
        let path = Self::canonical(path)?;
        let tick = self.upcoming_tick();
        let offset = self.arena.used();
        let entry = self.table.create(path, is_directory, offset, tick)?;
        self.tick = tick;

        debug!(path = %entry.path, is_directory, "created entry");
        Ok(())
    }

    fn create_dir_all(&mut self, path: &str) -> FsResult<()> {
        let path = Self::canonical(path)?;

        let mut current = String::with_capacity(path.len());
        for segment in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
            current.push(SEPARATOR);
            current.push_str(segment);

            match self.table.find(&current) {
                Some(entry) if entry.is_directory => {}
                Some(_) => return Err(FsError::NotADirectory),
                None => self.create(&current, true)?,
            }
        }
        Ok(())
    }

    fn write(&mut self, path: &str, bytes: &[u8]) -> FsResult<()> {
        let path = Self::canonical(path)?;
        if bytes.len() > self.config.max_file_size {
            return Err(FsError::TooLarge);
        }

        match self.table.find(&path).map(|e| (e.is_directory, e.extent)) {
            Some((true, _)) => Err(FsError::CannotWriteDirectory),
            Some((false, extent)) => self.overwrite(&path, extent, bytes),
            None => self.write_new(path, bytes),
        }
    }

    fn read(&self, path: &str, buf: &mut [u8]) -> FsResult<usize> {
        let entry = self.lookup(path).ok_or(FsError::NotFound)?;
        if entry.is_directory {
            return Err(FsError::IsDirectory);
        }
        Ok(self.arena.read_at(entry.extent.offset, entry.size, buf))
    }

    fn read_to_vec(&self, path: &str) -> FsResult<Vec<u8>> {
        let mut content = vec![0; self.size_of(path)];
        let count = self.read(path, &mut content)?;
        content.truncate(count);
        Ok(content)
    }

    fn delete(&mut self, path: &str) -> FsResult<()> {
        let path = Self::canonical(path)?;
        if path == ROOT {
            return Err(FsError::CannotDeleteRoot);
        }

        let is_directory = self
            .table
            .find(&path)
            .map(|e| e.is_directory)
            .ok_or(FsError::NotFound)?;
        if is_directory && has_descendants(&self.table, &path::child_prefix(&path)) {
            return Err(FsError::DirectoryNotEmpty);
        }

        let removed = self.table.delete(&path)?;
        debug!(
            path = %removed.path,
            orphaned = removed.extent.length,
            "deleted entry"
        );
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    fn size_of(&self, path: &str) -> usize {
        self.lookup(path).map(|e| e.size).unwrap_or(0)
    }

    fn kind_of(&self, path: &str) -> &'static str {
        self.lookup(path)
            .map(Entry::kind)
            .unwrap_or(EntryKind::Unknown)
            .as_str()
    }

    fn permissions_of(&self, path: &str) -> String {
        let path = Self::canonical(path).unwrap_or_default();
        self.table.permission_string(&path)
    }

    fn stat(&self, path: &str) -> FsResult<Entry> {
        self.lookup(path).cloned().ok_or(FsError::NotFound)
    }

    fn set_permissions(&mut self, path: &str, mode: u16) -> FsResult<()> {
        let path = Self::canonical(path)?;
        if !self.table.exists(&path) {
            return Err(FsError::NotFound);
        }

        let tick = self.next_tick();
        let entry = self.table.find_mut(&path).ok_or(FsError::NotFound)?;
        entry.permissions = Permissions(mode & 0o777);
        entry.modified_tick = tick;
        Ok(())
    }

    fn list(&self, dir: &str) -> FsResult<Vec<String>> {
        self.child_names(dir)
    }

    fn list_into(&self, dir: &str, buf: &mut [u8]) -> FsResult<usize> {
        let names = self.child_names(dir)?;
        Ok(write_listing(&names, buf))
    }

    fn change_directory(&self, target: &str, cwd: &str) -> FsResult<String> {
        match target {
            ".." => return Ok(path::parent_of(cwd)),
            "." => return Ok(String::from(cwd)),
            _ => {}
        }

        let resolved = path::absolute(target, cwd);
        trace!(requested = target, cwd, resolved = %resolved, "resolving directory change");

        match self.table.find(&resolved) {
            Some(entry) if entry.is_directory => Ok(resolved),
            Some(_) => Err(FsError::NotADirectory),
            None => Err(FsError::NotFound),
        }
    }

    fn stats(&self) -> FsStats {
        let directory_count = self.table.iter().filter(|e| e.is_directory).count();
        FsStats {
            entry_count: self.table.len(),
            file_count: self.table.len() - directory_count,
            directory_count,
            bytes_used: self.arena.used(),
            bytes_free: self.arena.free(),
        }
    }
}

#[cfg(test)]
#[path = "ramfs_tests.rs"]
mod ramfs_tests;
