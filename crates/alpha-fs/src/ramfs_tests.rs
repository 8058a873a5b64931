use super::*;
use crate::config::{ARENA_CAPACITY, MAX_ENTRIES, MAX_FILE_SIZE};
use alloc::format;
use alloc::string::ToString;

fn read_string(fs: &RamFs, path: &str) -> String {
    String::from_utf8(fs.read_to_vec(path).unwrap()).unwrap()
}

#[test]
fn test_new_has_only_root() {
    let fs = RamFs::new();

    assert_eq!(fs.table().len(), 1);
    assert!(fs.exists("/"));
    assert_eq!(fs.kind_of("/"), "directory");
    assert_eq!(fs.stat("/").unwrap().created_tick, 1);
    assert_eq!(fs.arena().used(), 0);
}

#[test]
fn test_write_read_roundtrip() {
    let mut fs = RamFs::new();

    fs.write("/hello.txt", b"Hello, World!").unwrap();
    let mut buf = [0u8; 64];
    let n = fs.read("/hello.txt", &mut buf).unwrap();

    assert_eq!(&buf[..n], b"Hello, World!");
    assert_eq!(fs.size_of("/hello.txt"), 13);
    assert_eq!(fs.kind_of("/hello.txt"), "file");
}

#[test]
fn test_read_truncates_to_buffer() {
    let mut fs = RamFs::new();
    fs.write("/f", b"abcdef").unwrap();

    let mut buf = [0u8; 4];
    assert_eq!(fs.read("/f", &mut buf).unwrap(), 4);
    assert_eq!(&buf, b"abcd");
}

#[test]
fn test_read_errors() {
    let mut fs = RamFs::new();
    fs.create("/dir", true).unwrap();

    let mut buf = [0u8; 8];
    assert_eq!(fs.read("/missing", &mut buf).unwrap_err(), FsError::NotFound);
    assert_eq!(fs.read("/dir", &mut buf).unwrap_err(), FsError::IsDirectory);
}

#[test]
fn test_create_rejects_duplicates() {
    let mut fs = RamFs::new();

    fs.create("/a", false).unwrap();
    assert_eq!(fs.create("/a", false).unwrap_err(), FsError::DuplicateExists);
    assert_eq!(fs.create("/a", true).unwrap_err(), FsError::DuplicateExists);
    assert_eq!(fs.create("/", true).unwrap_err(), FsError::DuplicateExists);
    assert_eq!(fs.table().len(), 2);
}

#[test]
fn test_paths_are_canonicalized() {
    let mut fs = RamFs::new();

    fs.create("/docs/", true).unwrap();
    assert!(fs.exists("/docs"));
    assert!(fs.exists("//docs//"));
    assert_eq!(fs.create("/docs", true).unwrap_err(), FsError::DuplicateExists);

    fs.write("/docs/./a.txt", b"x").unwrap();
    assert_eq!(fs.stat("/docs/a.txt").unwrap().path, "/docs/a.txt");
    assert_eq!(fs.create("", false).unwrap_err(), FsError::InvalidPath);
}

#[test]
fn test_write_size_boundary() {
    let mut fs = RamFs::new();
    let max = vec![b'a'; MAX_FILE_SIZE];
    let over = vec![b'b'; MAX_FILE_SIZE + 1];

    fs.write("/big", &max).unwrap();
    assert_eq!(fs.size_of("/big"), MAX_FILE_SIZE);

    assert_eq!(fs.write("/big", &over).unwrap_err(), FsError::TooLarge);
    assert_eq!(fs.size_of("/big"), MAX_FILE_SIZE);
    assert_eq!(fs.read_to_vec("/big").unwrap(), max);

    assert_eq!(fs.write("/new", &over).unwrap_err(), FsError::TooLarge);
    assert!(!fs.exists("/new"));
}

#[test]
fn test_write_to_directory_rejected() {
    let mut fs = RamFs::new();
    fs.create("/d", true).unwrap();

    assert_eq!(fs.write("/d", b"x").unwrap_err(), FsError::CannotWriteDirectory);
    assert_eq!(fs.write("/", b"x").unwrap_err(), FsError::CannotWriteDirectory);
}

#[test]
fn test_overwrite_in_extent_reuses_space() {
    let mut fs = RamFs::new();
    fs.write("/f", b"hello world").unwrap();
    let used = fs.arena().used();

    fs.write("/f", b"bye").unwrap();

    assert_eq!(fs.arena().used(), used);
    assert_eq!(read_string(&fs, "/f"), "bye");
    assert_eq!(fs.stat("/f").unwrap().extent.length, 11);
}

#[test]
fn test_growth_relocates_by_default() {
    let mut fs = RamFs::new();
    fs.write("/a", b"aaaa").unwrap();
    fs.write("/b", b"bbbb").unwrap();

    fs.write("/a", b"AAAAAAAA").unwrap();

    assert_eq!(read_string(&fs, "/a"), "AAAAAAAA");
    assert_eq!(read_string(&fs, "/b"), "bbbb");
    assert_eq!(fs.stat("/a").unwrap().extent.offset, 8);
    assert_eq!(fs.arena().used(), 16);
}

#[test]
fn test_in_place_growth_clobbers_neighbor() {
    let config = FsConfig::default().with_growth(GrowthPolicy::InPlace);
    let mut fs = RamFs::with_config(config);
    fs.write("/a", b"aaaa").unwrap();
    fs.write("/b", b"bbbb").unwrap();

    fs.write("/a", b"AAAAAAAA").unwrap();

    assert_eq!(read_string(&fs, "/a"), "AAAAAAAA");
    assert_eq!(read_string(&fs, "/b"), "AAAA");
    assert_eq!(fs.arena().used(), 8);
}

#[test]
fn test_empty_file_then_write() {
    let mut fs = RamFs::new();
    fs.create("/empty", false).unwrap();
    fs.write("/other", b"123").unwrap();

    fs.write("/empty", b"now full").unwrap();

    assert_eq!(read_string(&fs, "/empty"), "now full");
    assert_eq!(read_string(&fs, "/other"), "123");
}

#[test]
fn test_out_of_space() {
    let config = FsConfig::default().with_arena_capacity(10);
    let mut fs = RamFs::with_config(config);

    fs.write("/a", b"123456").unwrap();
    assert_eq!(fs.write("/b", b"12345").unwrap_err(), FsError::OutOfSpace);
    assert!(!fs.exists("/b"));
    assert_eq!(fs.write("/a", b"1234567").unwrap_err(), FsError::OutOfSpace);
    assert_eq!(read_string(&fs, "/a"), "123456");
    assert!(FsError::OutOfSpace.is_capacity());
}

#[test]
fn test_table_full() {
    let mut fs = RamFs::new();

    for i in 0..MAX_ENTRIES - 1 {
        fs.create(&format!("/f{}", i), false).unwrap();
    }
    assert_eq!(fs.table().len(), MAX_ENTRIES);
    assert_eq!(fs.create("/extra", false).unwrap_err(), FsError::TableFull);
    assert_eq!(fs.write("/extra", b"x").unwrap_err(), FsError::TableFull);

    // Duplicates are reported before capacity.
    assert_eq!(fs.create("/f0", false).unwrap_err(), FsError::DuplicateExists);
}

#[test]
fn test_delete_and_reuse_name() {
    let mut fs = RamFs::new();

    fs.create("/a", false).unwrap();
    fs.write("/a", b"hi").unwrap();
    let free = fs.stats().bytes_free;

    fs.delete("/a").unwrap();
    assert!(!fs.exists("/a"));

    fs.create("/a", false).unwrap();
    assert!(fs.exists("/a"));
    assert_eq!(fs.size_of("/a"), 0);
    assert_eq!(fs.stats().bytes_free, free);
}

#[test]
fn test_delete_errors() {
    let mut fs = RamFs::new();
    fs.create_dir_all("/home/user").unwrap();

    assert_eq!(fs.delete("/").unwrap_err(), FsError::CannotDeleteRoot);
    assert_eq!(fs.delete("/missing").unwrap_err(), FsError::NotFound);
    assert_eq!(fs.delete("/home").unwrap_err(), FsError::DirectoryNotEmpty);

    fs.delete("/home/user").unwrap();
    fs.delete("/home").unwrap();
    assert!(!fs.exists("/home"));
}

#[test]
fn test_delete_reorders_listing() {
    let mut fs = RamFs::new();
    for name in ["/a", "/b", "/c", "/d"] {
        fs.create(name, false).unwrap();
    }

    fs.delete("/b").unwrap();

    assert_eq!(fs.list("/").unwrap(), ["a", "d", "c"]);
}

#[test]
fn test_list_direct_children_only() {
    let mut fs = RamFs::new();
    fs.create_dir_all("/home/user").unwrap();
    fs.write("/home/user/notes.txt", b"n").unwrap();
    fs.write("/home/todo.txt", b"t").unwrap();

    assert_eq!(fs.list("/home").unwrap(), ["user/", "todo.txt"]);
    assert_eq!(fs.list("/home/").unwrap(), ["user/", "todo.txt"]);
    assert_eq!(fs.list("/").unwrap(), ["home/"]);
}

#[test]
fn test_list_errors() {
    let mut fs = RamFs::new();
    fs.write("/f", b"x").unwrap();

    assert_eq!(fs.list("/nope").unwrap_err(), FsError::NotFound);
    assert_eq!(fs.list("/f").unwrap_err(), FsError::NotADirectory);
    assert!(fs.list("/").unwrap().contains(&"f".to_string()));
}

#[test]
fn test_list_into_buffer() {
    let mut fs = RamFs::new();
    fs.create("/bin", true).unwrap();
    fs.write("/a.txt", b"x").unwrap();

    let mut buf = [0xffu8; 64];
    let len = fs.list_into("/", &mut buf).unwrap();
    assert_eq!(&buf[..len], b"bin/\na.txt");
    assert_eq!(buf[len], 0);

    let mut small = [0xffu8; 7];
    let len = fs.list_into("/", &mut small).unwrap();
    assert_eq!(&small[..len], b"bin/");
}

#[test]
fn test_change_directory_parent() {
    let fs = RamFs::with_skeleton().unwrap();

    assert_eq!(fs.change_directory("..", "/home/user").unwrap(), "/home");
    assert_eq!(fs.change_directory("..", "/home").unwrap(), "/");
    assert_eq!(fs.change_directory("..", "/").unwrap(), "/");
    assert_eq!(fs.parent_of("/home/user/"), "/home");
}

#[test]
fn test_change_directory_resolution() {
    let fs = RamFs::with_skeleton().unwrap();

    assert_eq!(fs.change_directory("user", "/home").unwrap(), "/home/user");
    assert_eq!(fs.change_directory("/etc", "/home").unwrap(), "/etc");
    assert_eq!(fs.change_directory("../etc", "/home").unwrap(), "/etc");
    assert_eq!(fs.change_directory(".", "/tmp").unwrap(), "/tmp");
    assert_eq!(fs.change_directory("/", "/tmp").unwrap(), "/");
}

#[test]
fn test_change_directory_errors() {
    let fs = RamFs::with_skeleton().unwrap();

    assert_eq!(
        fs.change_directory("nowhere", "/").unwrap_err(),
        FsError::NotFound
    );
    assert_eq!(
        fs.change_directory("/etc/passwd", "/").unwrap_err(),
        FsError::NotADirectory
    );
}

#[test]
fn test_create_dir_all() {
    let mut fs = RamFs::new();

    fs.create_dir_all("/a/b/c").unwrap();
    assert_eq!(fs.kind_of("/a"), "directory");
    assert_eq!(fs.kind_of("/a/b"), "directory");
    assert_eq!(fs.kind_of("/a/b/c"), "directory");

    // Existing components are fine.
    fs.create_dir_all("/a/b/d").unwrap();
    assert_eq!(fs.table().len(), 5);

    fs.write("/a/file", b"x").unwrap();
    assert_eq!(
        fs.create_dir_all("/a/file/sub").unwrap_err(),
        FsError::NotADirectory
    );
}

#[test]
fn test_permissions() {
    let mut fs = RamFs::new();
    fs.write("/f", b"x").unwrap();
    fs.create("/d", true).unwrap();

    assert_eq!(fs.permissions_of("/f"), "-rwxr-xr-x");
    assert_eq!(fs.permissions_of("/d"), "drwxr-xr-x");
    assert_eq!(fs.permissions_of("/missing"), "----------");

    let before = fs.stat("/f").unwrap().modified_tick;
    fs.set_permissions("/f", 0o640).unwrap();
    assert_eq!(fs.permissions_of("/f"), "-rw-r-----");
    assert!(fs.stat("/f").unwrap().modified_tick > before);

    assert_eq!(
        fs.set_permissions("/missing", 0o600).unwrap_err(),
        FsError::NotFound
    );
}

#[test]
fn test_ticks_advance() {
    let mut fs = RamFs::new();

    fs.create("/a", false).unwrap();
    fs.create("/b", false).unwrap();
    let a = fs.stat("/a").unwrap();
    let b = fs.stat("/b").unwrap();
    assert!(b.created_tick > a.created_tick);

    fs.write("/a", b"x").unwrap();
    let a2 = fs.stat("/a").unwrap();
    assert_eq!(a2.created_tick, a.created_tick);
    assert!(a2.modified_tick > b.created_tick);
}

#[test]
fn test_rejected_creates_keep_clock() {
    let mut fs = RamFs::with_config(FsConfig::default().with_max_entries(2));
    fs.create("/a", false).unwrap();
    let before = fs.now();

    assert_eq!(fs.create("/a", true).unwrap_err(), FsError::DuplicateExists);
    assert_eq!(fs.write("/b", b"x").unwrap_err(), FsError::TableFull);
    assert_eq!(fs.create("/b", false).unwrap_err(), FsError::TableFull);
    let long = format!("/{}", "n".repeat(200));
    fs.delete("/a").unwrap();
    assert_eq!(fs.write(&long, b"x").unwrap_err(), FsError::PathTooLong);
    assert_eq!(fs.now(), before);

    fs.create("/c", false).unwrap();
    assert_eq!(fs.stat("/c").unwrap().created_tick, before + 1);
}

#[test]
fn test_stats() {
    let mut fs = RamFs::new();
    fs.create_dir_all("/x/y").unwrap();
    fs.write("/x/y/f", b"12345").unwrap();

    let stats = fs.stats();
    assert_eq!(stats.entry_count, 4);
    assert_eq!(stats.directory_count, 3);
    assert_eq!(stats.file_count, 1);
    assert_eq!(stats.bytes_used, 5);
    assert_eq!(stats.bytes_free, ARENA_CAPACITY - 5);
}

#[test]
fn test_reinitialize() {
    let mut fs = RamFs::with_skeleton().unwrap();
    assert!(fs.arena().used() > 0);

    fs.reinitialize();

    assert_eq!(fs.table().len(), 1);
    assert!(fs.exists("/"));
    assert!(!fs.exists("/etc/passwd"));
    assert_eq!(fs.arena().used(), 0);
    assert_eq!(fs.now(), 1);
}

#[test]
fn test_skeleton_fixtures() {
    let fs = RamFs::with_skeleton().unwrap();

    assert!(fs.exists("/etc/passwd"));
    assert!(read_string(&fs, "/etc/passwd").contains("root:x:0:0"));
    assert_eq!(fs.permissions_of("/etc/shadow"), "-rw-------");
    assert_eq!(fs.kind_of("/home/user"), "directory");
}

#[test]
fn test_skeleton_root_listing() {
    let fs = RamFs::with_skeleton().unwrap();
    let names = fs.list("/").unwrap();

    for expected in [
        "bin/",
        "home/",
        "etc/",
        "tmp/",
        "usr/",
        "var/",
        "dev/",
        "proc/",
        "root/",
        "welcome.txt",
        "readme.txt",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {}", expected);
    }
    assert!(!names.iter().any(|n| n == "home/user/" || n == "user/"));
}

#[test]
fn test_seed_is_idempotent() {
    let mut fs = RamFs::with_skeleton().unwrap();
    let entries = fs.table().len();
    let used = fs.arena().used();

    bootstrap::seed(&mut fs).unwrap();

    assert_eq!(fs.table().len(), entries);
    assert_eq!(fs.arena().used(), used);
}

mod proptests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn write_then_read_returns_bytes(
            name in "[a-z]{1,12}",
            content in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let mut fs = RamFs::new();
            let path = format!("/{}", name);
            fs.write(&path, &content).unwrap();
            prop_assert_eq!(fs.read_to_vec(&path).unwrap(), content);
        }

        #[test]
        fn rewrites_keep_latest_content(
            writes in proptest::collection::vec(
                proptest::collection::vec(any::<u8>(), 0..256),
                1..8,
            ),
        ) {
            let mut fs = RamFs::new();
            fs.write("/f", b"anchor").unwrap();
            fs.write("/g", b"neighbor").unwrap();

            for content in &writes {
                fs.write("/f", content).unwrap();
            }

            let last: &Vec<u8> = writes.last().unwrap();
            prop_assert_eq!(&fs.read_to_vec("/f").unwrap(), last);
            prop_assert_eq!(fs.read_to_vec("/g").unwrap(), b"neighbor".to_vec());
        }
    }
}
