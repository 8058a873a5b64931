//! Path string algorithms.
//!
//! Everything here is pure string manipulation with no filesystem state.
//! A canonical path always starts with `/`, never contains empty, `.` or
//! `..` segments, and never ends with `/` unless it is the root itself.

use alloc::string::String;
use alloc::vec::Vec;

/// Root directory path.
pub const ROOT: &str = "/";

/// Path separator.
pub const SEPARATOR: char = '/';

/// Canonicalize a path string.
///
/// Empty and `.` segments are dropped, `..` pops the last retained segment
/// (clamping at root), and the survivors are joined with single separators
/// behind a leading `/`. Relative input is treated as rooted.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }

    if segments.is_empty() {
        return String::from(ROOT);
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in segments {
        normalized.push(SEPARATOR);
        normalized.push_str(segment);
    }
    normalized
}

/// Resolve `path` against the working directory `cwd`.
pub fn absolute(path: &str, cwd: &str) -> String {
    if path.starts_with(SEPARATOR) {
        normalize(path)
    } else {
        let mut joined = String::with_capacity(cwd.len() + path.len() + 1);
        joined.push_str(cwd);
        joined.push(SEPARATOR);
        joined.push_str(path);
        normalize(&joined)
    }
}

/// Substring after the last `/`, or the whole path if there is none.
pub fn base_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Substring before the last `/`.
///
/// Returns `.` when the path has no separator and `/` when the only
/// separator is the leading one.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        None => ".",
        Some(0) => ROOT,
        Some(idx) => &path[..idx],
    }
}

/// Parent of a working directory. Trailing separators are ignored and the
/// parent of root is root.
pub fn parent_of(cwd: &str) -> String {
    let trimmed = cwd.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return String::from(ROOT);
    }
    match parent_dir(trimmed) {
        "." => String::from(ROOT),
        parent => String::from(parent),
    }
}

/// Directory path with exactly one trailing separator, used as the prefix
/// that every direct child's path starts with.
pub fn child_prefix(dir: &str) -> String {
    let mut prefix = normalize(dir);
    if !prefix.ends_with(SEPARATOR) {
        prefix.push(SEPARATOR);
    }
    prefix
}

/// Join a directory and a child name into a canonical path.
pub fn join(dir: &str, name: &str) -> String {
    let mut joined = child_prefix(dir);
    joined.push_str(name);
    normalize(&joined)
}

/// Whether `path` is the root directory after normalization.
pub fn is_root(path: &str) -> bool {
    normalize(path) == ROOT
}
