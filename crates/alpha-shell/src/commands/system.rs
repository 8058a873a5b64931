//! System and utility commands.

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use alpha_fs::FsService;

use super::{Builtin, Category};
use crate::console::{Color, Console};
use crate::error::{ShellError, ShellResult};
use crate::shell::Shell;

const OS_NAME: &str = "Alpha OS";
const OS_VERSION: &str = "1.0.0";
const KERNEL: &str = "AlphaKernel";
const SHELL: &str = "AlphaShell v2.0";

const BANNER: &[&str] = &[
    r"    _    _       _             ___  ____  ",
    r"   / \  | |_ __ | |__   __ _  / _ \/ ___| ",
    r"  / _ \ | | '_ \| '_ \ / _` || | | \___ \ ",
    r" / ___ \| | |_) | | | | (_| || |_| |___) |",
    r"/_/   \_\_| .__/|_| |_|\__,_| \___/|____/ ",
    r"          |_|                             ",
];

pub(crate) fn banner(out: &mut dyn Console) -> ShellResult<()> {
    out.fg(Color::LightCyan);
    for line in BANNER {
        writeln!(out, "{}", line)?;
    }
    out.reset_color();
    writeln!(out, "{} - a small operating system for learning", OS_NAME)?;
    writeln!(out, "Version {}\n", OS_VERSION)?;
    Ok(())
}

pub(crate) fn help<S: FsService>(
    _shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    if let Some(&name) = args.get(1) {
        let builtin = Builtin::lookup(name)
            .ok_or_else(|| ShellError::InvalidArgument(format!("unknown command '{}'", name)))?;
        out.fg(Color::LightBrown);
        writeln!(out, "Command: {}", builtin.name())?;
        out.reset_color();
        writeln!(out, "Description: {}", builtin.help())?;
        writeln!(out, "Usage: {}", builtin.usage())?;
        return Ok(());
    }

    out.fg(Color::LightBrown);
    writeln!(out, "Alpha OS Shell Commands")?;
    writeln!(out, "=======================")?;
    out.reset_color();

    for category in Category::ALL {
        writeln!(out, "\n{}:", category.title())?;
        for builtin in Builtin::ALL.iter().filter(|b| b.category() == category) {
            writeln!(out, "  {:<12} - {}", builtin.name(), builtin.help())?;
        }
    }
    writeln!(
        out,
        "\nTip: Use 'help <command>' for detailed information about a command"
    )?;
    Ok(())
}

pub(crate) fn info<S: FsService>(
    shell: &mut Shell<S>,
    _args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let stats = shell.fs.stats();

    out.fg(Color::LightCyan);
    writeln!(out, "Alpha OS System Information")?;
    writeln!(out, "===========================")?;
    out.reset_color();
    writeln!(out, "OS Name:         {}", OS_NAME)?;
    writeln!(out, "Version:         {}", OS_VERSION)?;
    writeln!(out, "Kernel:          {}", KERNEL)?;
    writeln!(out, "Shell:           {}", SHELL)?;
    writeln!(out, "Hostname:        {}", shell.hostname)?;
    writeln!(
        out,
        "File System:     {} files, {} directories, {} KB used",
        stats.file_count,
        stats.directory_count,
        stats.bytes_used / 1024
    )?;
    write!(out, "Current User:    {}", shell.user)?;
    if shell.is_root {
        out.fg(Color::LightRed);
        write!(out, " (ROOT)")?;
        out.reset_color();
    }
    writeln!(out)?;
    Ok(())
}

pub(crate) fn clear<S: FsService>(
    _shell: &mut Shell<S>,
    _args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    out.clear();
    Ok(())
}

fn operand(arg: &str) -> ShellResult<i64> {
    arg.parse()
        .map_err(|_| ShellError::InvalidArgument(String::from(arg)))
}

/// Evaluate `a op b` with checked integer arithmetic.
pub(crate) fn evaluate(a: i64, op: &str, b: i64) -> ShellResult<i64> {
    let result = match op {
        "+" => a.checked_add(b),
        "-" => a.checked_sub(b),
        "*" | "x" => a.checked_mul(b),
        "/" | "%" if b == 0 => {
            return Err(ShellError::InvalidArgument(String::from("division by zero")))
        }
        "/" => a.checked_div(b),
        "%" => a.checked_rem(b),
        other => {
            return Err(ShellError::InvalidArgument(format!(
                "unknown operator '{}'",
                other
            )))
        }
    };
    result.ok_or_else(|| ShellError::InvalidArgument(String::from("overflow")))
}

pub(crate) fn calc<S: FsService>(
    _shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let [_, a, op, b] = args else {
        return Err(ShellError::Usage(Builtin::Calc.usage()));
    };

    let (a, b) = (operand(a)?, operand(b)?);
    let result = evaluate(a, op, b)?;

    out.fg(Color::LightGreen);
    writeln!(out, "{} {} {} = {}", a, op, b, result)?;
    out.reset_color();
    Ok(())
}

pub(crate) fn halt<S: FsService>(
    _shell: &mut Shell<S>,
    _args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    out.fg(Color::LightRed);
    writeln!(out, "System halted.")?;
    out.reset_color();
    Ok(())
}
