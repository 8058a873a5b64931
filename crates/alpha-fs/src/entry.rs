//! Entry records: one per file or directory.

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PERMISSIONS;

/// A region of the data arena reserved for one entry's content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    /// Byte offset into the arena
    pub offset: usize,
    /// Reserved length in bytes
    pub length: usize,
}

impl Extent {
    /// Create an extent.
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// One past the last reserved byte.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Whether `len` bytes fit without leaving the extent.
    pub fn fits(&self, len: usize) -> bool {
        len <= self.length
    }
}

/// Unix-style permission bits (owner/group/other `rwx`).
///
/// Stored and displayed only; nothing checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions(pub u16);

impl Default for Permissions {
    fn default() -> Self {
        Self(DEFAULT_PERMISSIONS)
    }
}

impl Permissions {
    /// Owner read/write only.
    pub const fn private() -> Self {
        Self(0o600)
    }

    /// Raw mode bits, masked to the nine permission bits.
    pub fn mode(&self) -> u16 {
        self.0 & 0o777
    }

    /// Render as `ls -l` does: type flag followed by three `rwx` triplets.
    pub fn render(&self, is_directory: bool) -> String {
        const FLAGS: [(u16, char); 9] = [
            (0o400, 'r'),
            (0o200, 'w'),
            (0o100, 'x'),
            (0o040, 'r'),
            (0o020, 'w'),
            (0o010, 'x'),
            (0o004, 'r'),
            (0o002, 'w'),
            (0o001, 'x'),
        ];

        let mut out = String::with_capacity(10);
        out.push(if is_directory { 'd' } else { '-' });
        for (bit, ch) in FLAGS {
            out.push(if self.0 & bit != 0 { ch } else { '-' });
        }
        out
    }
}

/// Kind of an entry as shown to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
    Unknown,
}

impl EntryKind {
    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Unknown => "unknown",
        }
    }
}

/// File or directory record.
///
/// The canonical `path` is the only durable identifier: table positions
/// move when other entries are deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Canonical absolute path
    pub path: String,
    /// Content length in bytes
    pub size: usize,
    /// Reserved arena region
    pub extent: Extent,
    /// Directory flag
    pub is_directory: bool,
    /// Tick at creation
    pub created_tick: u64,
    /// Tick at last content or metadata change
    pub modified_tick: u64,
    /// Permission bits
    pub permissions: Permissions,
}

impl Entry {
    /// Create an empty entry whose extent starts at `offset` with no space.
    pub fn new(path: String, is_directory: bool, offset: usize, tick: u64) -> Self {
        Self {
            path,
            size: 0,
            extent: Extent::new(offset, 0),
            is_directory,
            created_tick: tick,
            modified_tick: tick,
            permissions: Permissions::default(),
        }
    }

    /// Entry kind.
    pub fn kind(&self) -> EntryKind {
        if self.is_directory {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    /// Last path component.
    pub fn name(&self) -> &str {
        crate::path::base_name(&self.path)
    }

    /// Rendered permission string.
    pub fn permission_string(&self) -> String {
        self.permissions.render(self.is_directory)
    }
}
