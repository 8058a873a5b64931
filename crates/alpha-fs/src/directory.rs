//! Directory listing over the flat entry table.
//!
//! There are no directory objects holding children. A directory's children
//! are the entries whose path starts with the directory path plus `/` and
//! has no further separator after that prefix.

use alloc::string::String;

use crate::entry::Entry;
use crate::path::SEPARATOR;
use crate::table::EntryTable;

/// Entries directly below the directory whose child prefix is `prefix`,
/// in storage order.
pub fn direct_children<'a>(
    table: &'a EntryTable,
    prefix: &'a str,
) -> impl Iterator<Item = &'a Entry> + 'a {
    table.iter().filter(move |entry| match entry.path.strip_prefix(prefix) {
        Some(rest) => !rest.is_empty() && !rest.contains(SEPARATOR),
        None => false,
    })
}

/// Whether any entry lives anywhere below `prefix`.
pub fn has_descendants(table: &EntryTable, prefix: &str) -> bool {
    table
        .iter()
        .any(|entry| entry.path.len() > prefix.len() && entry.path.starts_with(prefix))
}

/// Listing name of a child: its base name, directories suffixed with `/`.
pub fn display_name(entry: &Entry) -> String {
    let mut name = String::from(entry.name());
    if entry.is_directory {
        name.push(SEPARATOR);
    }
    name
}

/// Pack `names` into `buf` as newline-separated text ending in a NUL.
///
/// A name is written only if its base length plus two bytes (suffix and
/// separator) fits in what is left; the first name that does not fit ends
/// the listing. Returns the length of the text before the NUL. An empty
/// `buf` is left untouched.
pub fn write_listing(names: &[String], buf: &mut [u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }

    let mut offset = 0;
    for name in names {
        let base = name.trim_end_matches(SEPARATOR).len();
        if offset + base + 2 > buf.len() {
            break;
        }
        let bytes = name.as_bytes();
        buf[offset..offset + bytes.len()].copy_from_slice(bytes);
        offset += bytes.len();
        buf[offset] = b'\n';
        offset += 1;
    }

    if offset == 0 {
        buf[0] = 0;
        0
    } else {
        buf[offset - 1] = 0;
        offset - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sample() -> EntryTable {
        let mut table = EntryTable::new(16, 127);
        for (path, dir) in [
            ("/", true),
            ("/home", true),
            ("/home/user", true),
            ("/home/user/notes.txt", false),
            ("/readme.txt", false),
        ] {
            table.create(String::from(path), dir, 0, 1).unwrap();
        }
        table
    }

    #[test]
    fn test_direct_children_only() {
        let table = sample();
        let root: Vec<String> = direct_children(&table, "/").map(display_name).collect();
        assert_eq!(root, ["home/", "readme.txt"]);

        let home: Vec<String> = direct_children(&table, "/home/").map(display_name).collect();
        assert_eq!(home, ["user/"]);
    }

    #[test]
    fn test_has_descendants() {
        let table = sample();
        assert!(has_descendants(&table, "/home/"));
        assert!(has_descendants(&table, "/home/user/"));
        assert!(!has_descendants(&table, "/readme.txt/"));
    }

    #[test]
    fn test_write_listing() {
        let names = [String::from("bin/"), String::from("a.txt")];
        let mut buf = [0xffu8; 32];
        let len = write_listing(&names, &mut buf);
        assert_eq!(len, 10);
        assert_eq!(&buf[..len], b"bin/\na.txt");
        assert_eq!(buf[len], 0);
    }

    #[test]
    fn test_write_listing_truncates() {
        let names = [String::from("bin/"), String::from("a.txt")];
        let mut buf = [0xffu8; 8];
        let len = write_listing(&names, &mut buf);
        assert_eq!(&buf[..len], b"bin/");
        assert_eq!(buf[len], 0);
    }

    #[test]
    fn test_write_listing_degenerate_buffers() {
        let names = [String::from("toolong")];
        let mut tiny = [0xffu8; 2];
        assert_eq!(write_listing(&names, &mut tiny), 0);
        assert_eq!(tiny[0], 0);

        let mut empty: [u8; 0] = [];
        assert_eq!(write_listing(&names, &mut empty), 0);
    }
}
