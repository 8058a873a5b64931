//! Error types for shell commands.

use alloc::string::String;
use core::fmt;

use alpha_fs::FsError;

/// Errors a built-in command can report.
///
/// The shell prints these in light red after the command name and carries
/// on with the next line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellError {
    /// A filesystem operation on `path` failed
    Fs {
        /// The path as the user typed it
        path: String,
        /// What the filesystem reported
        source: FsError,
    },

    /// Missing or malformed arguments
    Usage(&'static str),

    /// The session lacks the privilege for this
    PermissionDenied(&'static str),

    /// An argument could not be interpreted
    InvalidArgument(String),

    /// The console refused output
    Console,
}

impl ShellError {
    /// Filesystem error for `path`.
    pub fn fs(path: &str, source: FsError) -> Self {
        Self::Fs {
            path: String::from(path),
            source,
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fs { path, source } => write!(f, "{}: {}", path, source),
            Self::Usage(usage) => write!(f, "usage: {}", usage),
            Self::PermissionDenied(reason) => write!(f, "permission denied: {}", reason),
            Self::InvalidArgument(arg) => write!(f, "invalid argument: {}", arg),
            Self::Console => write!(f, "console write failed"),
        }
    }
}

impl From<fmt::Error> for ShellError {
    fn from(_: fmt::Error) -> Self {
        Self::Console
    }
}

/// Result type alias for shell commands
pub type ShellResult<T> = Result<T, ShellError>;
