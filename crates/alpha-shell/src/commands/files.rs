//! File system commands.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use alpha_fs::{parent_dir, path, FsError, FsService};

use super::Builtin;
use crate::console::{Color, Console};
use crate::error::{ShellError, ShellResult};
use crate::parse::{split_redirect, Redirect};
use crate::shell::Shell;

/// Names per row in the short `ls` form.
const LS_COLUMNS: usize = 4;

/// Column width in the short `ls` form.
const LS_WIDTH: usize = 20;

/// Deepest level `tree` descends to.
const MAX_TREE_DEPTH: usize = 32;

/// Argument at `index`, or the command's usage error.
fn required<'a>(args: &[&'a str], index: usize, builtin: Builtin) -> ShellResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(ShellError::Usage(builtin.usage()))
}

fn name_color(name: &str) -> Color {
    if name.ends_with('/') {
        Color::LightBlue
    } else {
        Color::LightGrey
    }
}

/// Fail unless the parent of canonical path `path` is an existing directory.
fn ensure_parent<S: FsService>(fs: &S, path: &str, shown: &str) -> ShellResult<()> {
    match fs.kind_of(parent_dir(path)) {
        "directory" => Ok(()),
        "file" => Err(ShellError::fs(shown, FsError::NotADirectory)),
        _ => Err(ShellError::fs(shown, FsError::NotFound)),
    }
}

fn success(out: &mut dyn Console, args: core::fmt::Arguments<'_>) -> ShellResult<()> {
    out.fg(Color::LightGreen);
    out.write_fmt(args)?;
    out.write_char('\n')?;
    out.reset_color();
    Ok(())
}

/// Replace or extend a file's content, creating it inside an existing
/// directory if needed.
fn store<S: FsService>(
    shell: &mut Shell<S>,
    target: &str,
    text: &str,
    append: bool,
) -> ShellResult<()> {
    let path = shell.resolve(target);
    let err = |e| ShellError::fs(target, e);

    let mut content = Vec::new();
    match shell.fs.kind_of(&path) {
        "directory" => return Err(err(FsError::IsDirectory)),
        "file" if append => content = shell.fs.read_to_vec(&path).map_err(err)?,
        "file" => {}
        _ => ensure_parent(&shell.fs, &path, target)?,
    }
    content.extend_from_slice(text.as_bytes());

    shell.fs.write(&path, &content).map_err(err)
}

pub(crate) fn ls<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let mut long = false;
    let mut target = None;
    for arg in &args[1..] {
        match *arg {
            "-l" => long = true,
            other => target = Some(other),
        }
    }

    let dir = shell.resolve(target.unwrap_or("."));
    let names = shell
        .fs
        .list(&dir)
        .map_err(|e| ShellError::fs(target.unwrap_or(&dir), e))?;

    if names.is_empty() {
        writeln!(out, "Directory is empty")?;
        return Ok(());
    }

    if long {
        writeln!(out, "total {} entries in {}:", names.len(), dir)?;
        for name in &names {
            let full = path::join(&dir, name);
            out.fg(name_color(name));
            writeln!(
                out,
                "{} {:>8} {}",
                shell.fs.permissions_of(&full),
                shell.fs.size_of(&full),
                name
            )?;
        }
    } else {
        for (i, name) in names.iter().enumerate() {
            out.fg(name_color(name));
            write!(out, "{:<width$}", name, width = LS_WIDTH)?;
            if (i + 1) % LS_COLUMNS == 0 {
                writeln!(out)?;
            }
        }
        if names.len() % LS_COLUMNS != 0 {
            writeln!(out)?;
        }
    }
    out.reset_color();
    Ok(())
}

pub(crate) fn cd<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    _out: &mut dyn Console,
) -> ShellResult<()> {
    let next = match args.get(1).copied() {
        None | Some("~") => {
            let home = shell.home();
            shell
                .fs
                .change_directory(home, path::ROOT)
                .map_err(|e| ShellError::fs(home, e))?
        }
        Some(target) => shell
            .fs
            .change_directory(target, &shell.cwd)
            .map_err(|e| ShellError::fs(target, e))?,
    };
    shell.cwd = next;
    Ok(())
}

pub(crate) fn pwd<S: FsService>(
    shell: &mut Shell<S>,
    _args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    out.fg(Color::LightBlue);
    writeln!(out, "{}", shell.cwd)?;
    out.reset_color();
    Ok(())
}

pub(crate) fn cat<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let target = required(args, 1, Builtin::Cat)?;
    let bytes = shell
        .fs
        .read_to_vec(&shell.resolve(target))
        .map_err(|e| ShellError::fs(target, e))?;

    let text = String::from_utf8_lossy(&bytes);
    out.write_str(&text)?;
    if !text.is_empty() && !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

pub(crate) fn mkdir<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let parents = args[1..].contains(&"-p");
    let target = args[1..]
        .iter()
        .copied()
        .find(|a| *a != "-p")
        .ok_or(ShellError::Usage(Builtin::Mkdir.usage()))?;
    let path = shell.resolve(target);
    let err = |e| ShellError::fs(target, e);

    if parents {
        shell.fs.create_dir_all(&path).map_err(err)?;
    } else {
        ensure_parent(&shell.fs, &path, target)?;
        shell.fs.create(&path, true).map_err(err)?;
    }
    success(out, format_args!("Directory '{}' created", target))
}

pub(crate) fn touch<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let target = required(args, 1, Builtin::Touch)?;
    let path = shell.resolve(target);

    ensure_parent(&shell.fs, &path, target)?;
    shell
        .fs
        .create(&path, false)
        .map_err(|e| ShellError::fs(target, e))?;
    success(out, format_args!("File '{}' created", target))
}

pub(crate) fn rm<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let target = required(args, 1, Builtin::Rm)?;
    let full = shell.resolve(target);

    // The working directory and its ancestors must stay resolvable.
    let holds_cwd = shell.cwd == full || shell.cwd.starts_with(&path::child_prefix(&full));
    if full != path::ROOT && holds_cwd {
        return Err(ShellError::InvalidArgument(format!(
            "'{}' contains the current directory",
            target
        )));
    }

    shell
        .fs
        .delete(&full)
        .map_err(|e| ShellError::fs(target, e))?;
    success(out, format_args!("'{}' removed", target))
}

pub(crate) fn chmod<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let mode_arg = required(args, 1, Builtin::Chmod)?;
    let target = required(args, 2, Builtin::Chmod)?;

    let mode = u16::from_str_radix(mode_arg, 8)
        .ok()
        .filter(|m| *m <= 0o777)
        .ok_or_else(|| ShellError::InvalidArgument(String::from(mode_arg)))?;

    let path = shell.resolve(target);
    shell
        .fs
        .set_permissions(&path, mode)
        .map_err(|e| ShellError::fs(target, e))?;
    success(
        out,
        format_args!("'{}' is now {}", target, shell.fs.permissions_of(&path)),
    )
}

pub(crate) fn write<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let target = required(args, 1, Builtin::Write)?;
    if args.len() < 3 {
        return Err(ShellError::Usage(Builtin::Write.usage()));
    }

    let mut text = args[2..].join(" ");
    text.push('\n');
    store(shell, target, &text, false)?;
    success(out, format_args!("Wrote {} bytes to '{}'", text.len(), target))
}

pub(crate) fn echo<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let rest = &args[1..];
    let (words, redirect) = split_redirect(rest);
    let mut text = rest[..words].join(" ");
    text.push('\n');

    match redirect {
        Redirect::None => out.write_str(&text)?,
        Redirect::Truncate(file) => store(shell, file, &text, false)?,
        Redirect::Append(file) => store(shell, file, &text, true)?,
    }
    Ok(())
}

pub(crate) fn tree<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let target = args.get(1).copied();
    let dir = shell.resolve(target.unwrap_or("."));
    if let Err(e) = shell.fs.list(&dir) {
        return Err(ShellError::fs(target.unwrap_or(&dir), e));
    }

    out.fg(Color::LightBlue);
    writeln!(out, "{}", dir)?;
    out.reset_color();

    let mut tally = Tally::default();
    let mut indent = String::new();
    draw_tree(&shell.fs, &dir, &mut indent, 1, out, &mut tally)?;
    writeln!(
        out,
        "\n{} directories, {} files",
        tally.directories, tally.files
    )?;
    Ok(())
}

#[derive(Default)]
struct Tally {
    directories: usize,
    files: usize,
}

fn draw_tree<S: FsService>(
    fs: &S,
    dir: &str,
    indent: &mut String,
    depth: usize,
    out: &mut dyn Console,
    tally: &mut Tally,
) -> ShellResult<()> {
    let names = fs.list(dir).map_err(|e| ShellError::fs(dir, e))?;
    let count = names.len();

    for (i, name) in names.iter().enumerate() {
        let last = i + 1 == count;
        write!(out, "{}{}", indent, if last { "└── " } else { "├── " })?;

        match name.strip_suffix('/') {
            Some(child) => {
                tally.directories += 1;
                out.fg(Color::LightBlue);
                writeln!(out, "{}", name)?;
                out.reset_color();

                if depth < MAX_TREE_DEPTH {
                    let mark = indent.len();
                    indent.push_str(if last { "    " } else { "│   " });
                    draw_tree(fs, &path::join(dir, child), indent, depth + 1, out, tally)?;
                    indent.truncate(mark);
                }
            }
            None => {
                tally.files += 1;
                writeln!(out, "{}", name)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn stat<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    if let Some(target) = args.get(1).copied() {
        return stat_entry(shell, target, out);
    }

    let stats = shell.fs.stats();
    out.fg(Color::LightBrown);
    writeln!(out, "Alpha OS File System Statistics")?;
    writeln!(out, "===============================")?;
    out.reset_color();
    writeln!(
        out,
        "Entries:         {} ({} files, {} directories)",
        stats.entry_count, stats.file_count, stats.directory_count
    )?;
    writeln!(
        out,
        "Used space:      {} bytes ({} KB)",
        stats.bytes_used,
        stats.bytes_used / 1024
    )?;
    writeln!(
        out,
        "Free space:      {} bytes ({} KB)",
        stats.bytes_free,
        stats.bytes_free / 1024
    )?;
    writeln!(
        out,
        "Total capacity:  {} bytes ({} KB)",
        stats.capacity(),
        stats.capacity() / 1024
    )?;
    writeln!(out, "Usage:           {}%", stats.usage_percent())?;
    Ok(())
}

fn stat_entry<S: FsService>(
    shell: &Shell<S>,
    target: &str,
    out: &mut dyn Console,
) -> ShellResult<()> {
    let entry = shell
        .fs
        .stat(&shell.resolve(target))
        .map_err(|e| ShellError::fs(target, e))?;

    writeln!(out, "  Path: {}", entry.path)?;
    writeln!(out, "  Type: {}", entry.kind().as_str())?;
    writeln!(out, "  Size: {} bytes", entry.size)?;
    writeln!(
        out,
        "Access: {} ({:04o})",
        entry.permission_string(),
        entry.permissions.mode()
    )?;
    writeln!(
        out,
        "Extent: offset {}, length {}",
        entry.extent.offset, entry.extent.length
    )?;
    writeln!(out, "Create: tick {}", entry.created_tick)?;
    writeln!(out, "Modify: tick {}", entry.modified_tick)?;
    Ok(())
}
