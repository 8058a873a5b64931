//! Filesystem initialization on boot.
//!
//! Seeds the standard directory skeleton and a handful of fixture files.
//! The content is fixture data only; the paths are what callers rely on.

use tracing::debug;

use crate::error::FsResult;
use crate::service::FsService;

/// Directories created at boot, parents before children.
pub const SKELETON_DIRS: &[&str] = &[
    "/bin",
    "/home",
    "/home/user",
    "/etc",
    "/tmp",
    "/usr",
    "/var",
    "/dev",
    "/proc",
    "/root",
];

const WELCOME: &str = "Welcome to Alpha OS!\n\
\n\
This system keeps every file in memory:\n\
- a flat entry table keyed by full path\n\
- one append-only data arena for all content\n\
- nothing survives a reboot\n\
\n\
Type 'help' for available commands.\n\
Type 'root' to enter the root shell.\n";

const README: &str = "Alpha OS File System\n\
====================\n\
\n\
Commands:\n\
  ls [-l] [path]    list directory contents\n\
  cd <path>         change directory (.. and absolute paths work)\n\
  pwd               print working directory\n\
  mkdir [-p] <dir>  create a directory\n\
  touch <file>      create an empty file\n\
  write <file> ...  replace a file's content\n\
  cat <file>        show file content\n\
  rm <path>         remove a file or empty directory\n\
  tree [path]       show the directory tree\n\
  stat              filesystem statistics\n";

const VERSION: &str = "Alpha OS v1.0\n\
Kernel: AlphaKernel\n\
Shell: AlphaShell v2.0\n";

const MOTD: &str = "Welcome to Alpha OS.\n\
A small operating system for learning.\n\
Type 'root' for administrative access.\n";

const PASSWD: &str = "# Alpha OS user database\n\
root:x:0:0:root:/root:/bin/sh\n\
user:x:1000:1000:user:/home/user:/bin/sh\n";

const SHADOW: &str = "# Alpha OS shadow file\n\
root:*:0:0:99999:7:::\n\
user:*:0:0:99999:7:::\n";

/// Fixture files as `(path, content, mode)`.
pub const FIXTURE_FILES: &[(&str, &str, u16)] = &[
    ("/welcome.txt", WELCOME, 0o644),
    ("/readme.txt", README, 0o644),
    ("/etc/version", VERSION, 0o644),
    ("/etc/motd", MOTD, 0o644),
    ("/etc/passwd", PASSWD, 0o644),
    ("/etc/shadow", SHADOW, 0o600),
];

/// Seed `fs` with the skeleton and fixtures.
///
/// Paths that already exist are left as they are.
pub fn seed<S: FsService + ?Sized>(fs: &mut S) -> FsResult<()> {
    for dir in SKELETON_DIRS {
        fs.create_dir_all(dir)?;
    }

    for (path, content, mode) in FIXTURE_FILES {
        if fs.exists(path) {
            continue;
        }
        fs.write(path, content.as_bytes())?;
        fs.set_permissions(path, *mode)?;
    }

    debug!(
        directories = SKELETON_DIRS.len(),
        files = FIXTURE_FILES.len(),
        "seeded filesystem"
    );
    Ok(())
}
