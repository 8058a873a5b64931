//! User session commands.

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use alpha_fs::FsService;
use tracing::warn;

use super::Builtin;
use crate::console::{Color, Console};
use crate::error::{ShellError, ShellResult};
use crate::shell::{Pending, Shell};

pub(crate) fn whoami<S: FsService>(
    shell: &mut Shell<S>,
    _args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    if shell.is_root {
        out.fg(Color::LightRed);
        writeln!(out, "{} (root privileges)", shell.user)?;
    } else {
        out.fg(Color::LightGreen);
        writeln!(out, "{}", shell.user)?;
    }
    out.reset_color();
    Ok(())
}

pub(crate) fn hostname<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    match args.get(1) {
        None => {
            out.fg(Color::LightCyan);
            writeln!(out, "{}", shell.hostname)?;
        }
        Some(_) if !shell.is_root => {
            return Err(ShellError::PermissionDenied(
                "only root can change hostname",
            ));
        }
        Some(name) => {
            shell.hostname = String::from(*name);
            out.fg(Color::LightGreen);
            writeln!(out, "Hostname set to: {}", shell.hostname)?;
        }
    }
    out.reset_color();
    Ok(())
}

/// Start the two-step root login; the next line is the password.
pub(crate) fn root<S: FsService>(
    shell: &mut Shell<S>,
    _args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    if shell.is_root {
        out.fg(Color::LightBrown);
        writeln!(out, "Already in root shell")?;
        out.reset_color();
        return Ok(());
    }

    out.fg(Color::LightRed);
    writeln!(out, "Entering root shell...")?;
    write!(out, "Password: ")?;
    out.reset_color();
    shell.pending = Some(Pending::RootPassword);
    Ok(())
}

/// Check the password line that follows `root`.
pub(crate) fn finish_root_login<S: FsService>(
    shell: &mut Shell<S>,
    password: &str,
    out: &mut dyn Console,
) -> ShellResult<()> {
    // The password was typed after a prompt with no newline.
    writeln!(out)?;
    out.fg(Color::LightRed);

    if shell.config.accepts_root_password(password) {
        shell.enter_root();
        writeln!(out, "*** ROOT SHELL ACTIVATED ***")?;
        writeln!(out, "You now have administrative privileges.")?;
        writeln!(out, "Type 'exit' to return to user shell.")?;
    } else {
        warn!(user = %shell.user, "root login rejected");
        writeln!(out, "Access denied. Incorrect password.")?;
    }

    out.reset_color();
    Ok(())
}

pub(crate) fn exit<S: FsService>(
    shell: &mut Shell<S>,
    _args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    if !shell.is_root {
        writeln!(out, "Not in root shell")?;
        return Ok(());
    }

    shell.leave_root();
    out.fg(Color::LightGreen);
    writeln!(out, "Exited root shell. Returned to user mode.")?;
    out.reset_color();
    Ok(())
}

pub(crate) fn su<S: FsService>(
    shell: &mut Shell<S>,
    args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    let Some(&target) = args.get(1) else {
        return Err(ShellError::Usage(Builtin::Su.usage()));
    };

    if target == "root" {
        root(shell, args, out)
    } else if target == "user" || target == shell.config.user {
        if shell.is_root {
            exit(shell, args, out)
        } else {
            writeln!(out, "Already {}", shell.user)?;
            Ok(())
        }
    } else {
        Err(ShellError::InvalidArgument(format!(
            "unknown user '{}' (available: root, {})",
            target, shell.config.user
        )))
    }
}

pub(crate) fn history<S: FsService>(
    shell: &mut Shell<S>,
    _args: &[&str],
    out: &mut dyn Console,
) -> ShellResult<()> {
    out.fg(Color::LightBrown);
    writeln!(out, "Command History")?;
    writeln!(out, "===============")?;
    out.reset_color();

    if shell.history.is_empty() {
        writeln!(out, "No commands in history")?;
        return Ok(());
    }
    for (number, line) in shell.history.iter() {
        writeln!(out, "{:>3}  {}", number, line)?;
    }
    Ok(())
}
