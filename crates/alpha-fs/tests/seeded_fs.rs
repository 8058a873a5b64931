//! Seeded Filesystem Integration Tests
//!
//! Exercises the public API the way the shell does: a booted filesystem,
//! relative paths resolved against a working directory, and shared access.

use std::sync::Arc;
use std::thread;

use alpha_fs::{absolute, FsError, FsService, RamFs, SharedFs};

/// Boot, create a file in the user's home, then read it back.
#[test]
fn test_home_directory_workflow() {
    let mut fs = RamFs::with_skeleton().unwrap();
    let cwd = fs.change_directory("/home/user", "/").unwrap();

    let notes = absolute("notes.txt", &cwd);
    fs.write(&notes, b"buy milk").unwrap();

    assert_eq!(fs.read_to_vec("/home/user/notes.txt").unwrap(), b"buy milk");
    assert_eq!(fs.list(&cwd).unwrap(), ["notes.txt"]);

    let up = fs.change_directory("..", &cwd).unwrap();
    assert_eq!(up, "/home");
    assert_eq!(fs.list(&up).unwrap(), ["user/"]);
}

/// Deleted space stays consumed until reinitialization.
#[test]
fn test_arena_space_is_not_reclaimed() {
    let mut fs = RamFs::with_skeleton().unwrap();
    let before = fs.stats();

    fs.write("/tmp/scratch", &[7u8; 1024]).unwrap();
    fs.delete("/tmp/scratch").unwrap();

    let after = fs.stats();
    assert_eq!(after.entry_count, before.entry_count);
    assert_eq!(after.bytes_used, before.bytes_used + 1024);

    fs.reinitialize();
    assert_eq!(fs.stats().bytes_used, 0);
}

/// Stats serialize with the field names status tooling reads.
#[test]
fn test_stats_json_shape() {
    let fs = RamFs::with_skeleton().unwrap();
    let value = serde_json::to_value(fs.stats()).unwrap();

    for field in [
        "entry_count",
        "file_count",
        "directory_count",
        "bytes_used",
        "bytes_free",
    ] {
        assert!(value.get(field).is_some(), "missing {}", field);
    }
    assert_eq!(value["directory_count"], serde_json::json!(11));
    assert_eq!(value["file_count"], serde_json::json!(6));
}

/// Errors serialize as their variant names.
#[test]
fn test_error_json() {
    let json = serde_json::to_string(&FsError::DirectoryNotEmpty).unwrap();
    assert_eq!(json, "\"DirectoryNotEmpty\"");

    let back: FsError = serde_json::from_str("\"TableFull\"").unwrap();
    assert_eq!(back, FsError::TableFull);
}

/// Writers on several threads all land behind the shared lock.
#[test]
fn test_shared_fs_across_threads() {
    let shared = Arc::new(SharedFs::new(RamFs::with_skeleton().unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let path = format!("/tmp/worker{}", i);
                shared.with(|fs| fs.write(&path, path.as_bytes())).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let fs = shared.lock();
    let mut names = fs.list("/tmp").unwrap();
    names.sort();
    assert_eq!(names, ["worker0", "worker1", "worker2", "worker3"]);
    assert_eq!(fs.read_to_vec("/tmp/worker2").unwrap(), b"/tmp/worker2");
}
