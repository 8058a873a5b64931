//! Alpha OS In-Memory Filesystem
//!
//! A hierarchical, permissioned file store with no backing block device:
//!
//! - **Path**: normalization, absolute paths, parent and base names
//! - **Table**: fixed-capacity entry records keyed by canonical path
//! - **Arena**: one append-only byte buffer holding all file content
//! - **Service**: `FsService` trait with file, directory and stats operations
//! - **RamFs**: the in-memory implementation
//! - **Bootstrap**: directory skeleton and fixture files seeded at boot
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         FsService (RamFs)                          │
//! │   create / write / read / delete      list / change_directory      │
//! │                              stats                                 │
//! └───────────────┬────────────────────────────────┬──────────────────┘
//!                 │                                │
//!                 ▼                                ▼
//! ┌───────────────────────────────┐  ┌────────────────────────────────┐
//! │          EntryTable            │  │           DataArena            │
//! │  path → size, extent, flags    │  │  [offset, offset+length) per   │
//! │  swap-delete, ≤ 256 entries    │  │  entry, bump cursor, 4 MB      │
//! └───────────────────────────────┘  └────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. **Paths are identity**: table positions move on delete; only the
//!    canonical path string names an entry across calls.
//! 2. **Append-only arena**: deleted or relocated content is never
//!    reclaimed; only [`RamFs::reinitialize`] resets the cursor.
//! 3. **Root is permanent**: `/` exists from construction and cannot be
//!    deleted.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod arena;
pub mod bootstrap;
pub mod config;
pub mod directory;
pub mod entry;
pub mod error;
pub mod path;
pub mod ramfs;
pub mod service;
pub mod shared;
pub mod stats;
pub mod table;

// Re-export main types
pub use arena::DataArena;
pub use config::{FsConfig, GrowthPolicy};
pub use entry::{Entry, EntryKind, Extent, Permissions};
pub use error::{FsError, FsResult};
pub use path::{absolute, base_name, normalize, parent_dir, parent_of};
pub use ramfs::RamFs;
pub use service::FsService;
pub use shared::SharedFs;
pub use stats::FsStats;
pub use table::EntryTable;
