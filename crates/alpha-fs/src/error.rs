//! Error types for the filesystem.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Errors from filesystem operations.
///
/// Every operation reports failure through one of these values; nothing
/// panics and nothing retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsError {
    /// An entry with this path already exists
    DuplicateExists,

    /// The entry table has no free slot
    TableFull,

    /// No entry with this path
    NotFound,

    /// `/` is never deletable
    CannotDeleteRoot,

    /// Read of a directory as if it were a file
    IsDirectory,

    /// Write of content into a directory
    CannotWriteDirectory,

    /// Content exceeds the per-file size limit
    TooLarge,

    /// The data arena cannot satisfy the reservation
    OutOfSpace,

    /// Path names a file where a directory is required
    NotADirectory,

    /// Directory still has live children
    DirectoryNotEmpty,

    /// Stored path exceeds the path length limit
    PathTooLong,

    /// Empty path string
    InvalidPath,
}

impl FsError {
    /// Whether this error comes from one of the fixed capacity limits.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::TableFull | Self::OutOfSpace | Self::TooLarge)
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::DuplicateExists => "file exists",
            Self::TableFull => "entry table full",
            Self::NotFound => "no such file or directory",
            Self::CannotDeleteRoot => "cannot delete root directory",
            Self::IsDirectory => "is a directory",
            Self::CannotWriteDirectory => "cannot write to a directory",
            Self::TooLarge => "file too large",
            Self::OutOfSpace => "no space left on device",
            Self::NotADirectory => "not a directory",
            Self::DirectoryNotEmpty => "directory not empty",
            Self::PathTooLong => "path too long",
            Self::InvalidPath => "invalid path",
        };
        f.write_str(msg)
    }
}

/// Result type alias for filesystem operations
pub type FsResult<T> = Result<T, FsError>;
