//! Service trait for the filesystem.
//!
//! Defines the operations callers (the shell) use. Every path argument is
//! canonicalized by the implementation; callers resolve relative paths
//! against their own working directory first.

use alloc::string::String;
use alloc::vec::Vec;

use crate::entry::Entry;
use crate::error::FsResult;
use crate::path;
use crate::stats::FsStats;

/// Filesystem service interface.
pub trait FsService {
    // ========== File Operations ==========

    /// Create an empty file or directory.
    fn create(&mut self, path: &str, is_directory: bool) -> FsResult<()>;

    /// Create a directory and every missing ancestor.
    fn create_dir_all(&mut self, path: &str) -> FsResult<()>;

    /// Replace a file's content, creating the file if needed.
    fn write(&mut self, path: &str, bytes: &[u8]) -> FsResult<()>;

    /// Copy a file's content into `buf`, returning the number of bytes copied.
    fn read(&self, path: &str, buf: &mut [u8]) -> FsResult<usize>;

    /// Read a file's entire content.
    fn read_to_vec(&self, path: &str) -> FsResult<Vec<u8>>;

    /// Remove a file or empty directory.
    fn delete(&mut self, path: &str) -> FsResult<()>;

    // ========== Metadata Operations ==========

    /// Check if a path exists.
    fn exists(&self, path: &str) -> bool;

    /// Content length, or zero for a missing path.
    fn size_of(&self, path: &str) -> usize;

    /// `file`, `directory`, or `unknown`.
    fn kind_of(&self, path: &str) -> &'static str;

    /// Rendered permission string.
    fn permissions_of(&self, path: &str) -> String;

    /// Copy of an entry's record.
    fn stat(&self, path: &str) -> FsResult<Entry>;

    /// Replace an entry's permission bits.
    fn set_permissions(&mut self, path: &str, mode: u16) -> FsResult<()>;

    // ========== Directory Operations ==========

    /// Names of the direct children of `dir`, directories suffixed with `/`,
    /// in storage order.
    fn list(&self, dir: &str) -> FsResult<Vec<String>>;

    /// Write the listing of `dir` into `buf` as newline-separated names
    /// followed by a NUL, returning the text length.
    fn list_into(&self, dir: &str, buf: &mut [u8]) -> FsResult<usize>;

    /// Resolve `target` against `cwd` and return the new working directory.
    fn change_directory(&self, target: &str, cwd: &str) -> FsResult<String>;

    /// Parent of a working directory; root's parent is root.
    fn parent_of(&self, cwd: &str) -> String {
        path::parent_of(cwd)
    }

    // ========== Statistics ==========

    /// Entry count and arena usage.
    fn stats(&self) -> FsStats;
}
