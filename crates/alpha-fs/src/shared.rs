//! Coarse-grained locking for shared use.
//!
//! Operations are not atomic with respect to each other (a write that
//! creates a file is a table insert followed by an arena reservation), so
//! concurrent callers go through one lock around the whole filesystem.

use spin::{Mutex, MutexGuard};

use crate::service::FsService;

/// A filesystem behind a single spin lock.
pub struct SharedFs<S> {
    inner: Mutex<S>,
}

impl<S: FsService> SharedFs<S> {
    /// Wrap a filesystem.
    pub const fn new(fs: S) -> Self {
        Self {
            inner: Mutex::new(fs),
        }
    }

    /// Acquire the lock.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Unwrap the filesystem.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}
