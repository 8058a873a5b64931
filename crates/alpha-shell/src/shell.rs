//! The command loop's state machine.
//!
//! A [`Shell`] owns the filesystem it operates on, the working directory,
//! the user session and the history. Hosts feed it one line at a time with
//! [`Shell::execute`] and render its prompt between lines.

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write};

use alpha_fs::{absolute, FsService};
use tracing::{debug, warn};

use crate::commands::{self, Builtin};
use crate::config::ShellConfig;
use crate::console::{Color, Console};
use crate::error::{ShellError, ShellResult};
use crate::history::History;
use crate::parse;

/// What the host should do after a line has been executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print the next prompt and keep reading
    Continue,
    /// Stop the command loop
    Halt,
}

/// Input the shell is waiting for instead of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pending {
    /// The next line is the root password
    RootPassword,
}

/// Interactive command shell over a filesystem.
pub struct Shell<S> {
    pub(crate) fs: S,
    pub(crate) config: ShellConfig,
    /// Canonical absolute working directory
    pub(crate) cwd: String,
    pub(crate) user: String,
    pub(crate) is_root: bool,
    pub(crate) hostname: String,
    pub(crate) history: History,
    pub(crate) pending: Option<Pending>,
}

impl<S: FsService> Shell<S> {
    /// Create a shell with default settings, starting in `/`.
    pub fn new(fs: S) -> Self {
        Self::with_config(fs, ShellConfig::default())
    }

    pub fn with_config(fs: S, config: ShellConfig) -> Self {
        Self {
            fs,
            cwd: String::from("/"),
            user: config.user.clone(),
            is_root: false,
            hostname: config.hostname.clone(),
            history: History::new(config.history_size),
            pending: None,
            config,
        }
    }

    // ========== Accessors ==========

    pub fn fs(&self) -> &S {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut S {
        &mut self.fs
    }

    /// Give back the filesystem.
    pub fn into_fs(self) -> S {
        self.fs
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Current working directory.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Name of the session user.
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the next line will be taken as a password.
    pub fn awaiting_password(&self) -> bool {
        self.pending == Some(Pending::RootPassword)
    }

    // ========== Prompt ==========

    /// Startup banner and hints.
    pub fn greet(&self, out: &mut dyn Console) -> ShellResult<()> {
        commands::banner(out)?;
        out.fg(Color::LightGreen);
        writeln!(out, "Alpha Shell v2.0 initialized")?;
        out.reset_color();
        writeln!(
            out,
            "Type 'help' for available commands or 'info' for system information"
        )?;
        writeln!(out, "Type 'root' to enter root shell")?;
        Ok(())
    }

    /// Plain-text prompt, e.g. `user@alphaos:/home/user$ `.
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}{} ",
            self.user,
            self.hostname,
            self.short_dir(),
            self.sigil()
        )
    }

    /// Write the colored prompt. Nothing is written while a password is
    /// pending, since its own prompt is already on screen.
    pub fn render_prompt(&self, out: &mut dyn Console) -> fmt::Result {
        if self.awaiting_password() {
            return Ok(());
        }

        let accent = if self.is_root {
            Color::LightRed
        } else {
            Color::LightGreen
        };
        out.fg(accent);
        out.write_str(&self.user)?;
        out.fg(Color::White);
        out.write_char('@')?;
        out.fg(Color::LightCyan);
        out.write_str(&self.hostname)?;
        out.fg(Color::White);
        out.write_char(':')?;
        out.fg(Color::LightBlue);
        out.write_str(&self.short_dir())?;
        out.fg(accent);
        write!(out, "{} ", self.sigil())?;
        out.reset_color();
        Ok(())
    }

    fn sigil(&self) -> char {
        if self.is_root {
            '#'
        } else {
            '$'
        }
    }

    /// Working directory, shortened to its tail when wider than the
    /// configured prompt width.
    fn short_dir(&self) -> String {
        let width = self.config.prompt_width;
        let count = self.cwd.chars().count();
        if count <= width || width <= 3 {
            return self.cwd.clone();
        }
        let keep = width - 3;
        let tail: String = self.cwd.chars().skip(count - keep).collect();
        format!("...{}", tail)
    }

    // ========== Command loop ==========

    /// Run one line of input.
    ///
    /// Errors are reported on `out`; they never stop the loop.
    pub fn execute(&mut self, line: &str, out: &mut dyn Console) -> Outcome {
        let line = parse::clamp_line(line);

        if let Some(Pending::RootPassword) = self.pending.take() {
            if let Err(e) = commands::finish_root_login(self, line.trim(), out) {
                report(Builtin::Root.name(), &e, out);
            }
            return Outcome::Continue;
        }

        let args = parse::tokenize(line);
        let Some(&name) = args.first() else {
            return Outcome::Continue;
        };
        self.history.push(line.trim());

        let Some(builtin) = Builtin::lookup(name) else {
            warn!(command = name, "unknown command");
            if let Err(e) = self.report_unknown(name, out) {
                warn!(command = name, error = %e, "failed to report unknown command");
            }
            return Outcome::Continue;
        };

        debug!(command = name, argc = args.len(), cwd = %self.cwd, "dispatching command");
        match self.dispatch(builtin, &args, out) {
            Ok(outcome) => outcome,
            Err(e) => {
                report(name, &e, out);
                Outcome::Continue
            }
        }
    }

    fn dispatch(
        &mut self,
        builtin: Builtin,
        args: &[&str],
        out: &mut dyn Console,
    ) -> ShellResult<Outcome> {
        match builtin {
            Builtin::Ls => commands::ls(self, args, out)?,
            Builtin::Cd => commands::cd(self, args, out)?,
            Builtin::Pwd => commands::pwd(self, args, out)?,
            Builtin::Cat => commands::cat(self, args, out)?,
            Builtin::Mkdir => commands::mkdir(self, args, out)?,
            Builtin::Touch => commands::touch(self, args, out)?,
            Builtin::Rm => commands::rm(self, args, out)?,
            Builtin::Tree => commands::tree(self, args, out)?,
            Builtin::Chmod => commands::chmod(self, args, out)?,
            Builtin::Write => commands::write(self, args, out)?,
            Builtin::Stat => commands::stat(self, args, out)?,
            Builtin::Echo => commands::echo(self, args, out)?,
            Builtin::Whoami => commands::whoami(self, args, out)?,
            Builtin::Su => commands::su(self, args, out)?,
            Builtin::Root => commands::root(self, args, out)?,
            Builtin::Exit => commands::exit(self, args, out)?,
            Builtin::History => commands::history(self, args, out)?,
            Builtin::Hostname => commands::hostname(self, args, out)?,
            Builtin::Help => commands::help(self, args, out)?,
            Builtin::Info => commands::info(self, args, out)?,
            Builtin::Calc => commands::calc(self, args, out)?,
            Builtin::Clear => commands::clear(self, args, out)?,
            Builtin::Banner => commands::banner(out)?,
            Builtin::Halt => {
                commands::halt(self, args, out)?;
                return Ok(Outcome::Halt);
            }
        }
        Ok(Outcome::Continue)
    }

    fn report_unknown(&self, name: &str, out: &mut dyn Console) -> ShellResult<()> {
        out.fg(Color::LightRed);
        writeln!(out, "{}: command not found: {}", self.hostname, name)?;
        out.reset_color();
        writeln!(out, "Type 'help' for a list of available commands")?;
        Ok(())
    }

    // ========== Session helpers ==========

    /// Resolve a user-supplied path against the working directory.
    pub(crate) fn resolve(&self, path: &str) -> String {
        absolute(path, &self.cwd)
    }

    /// Home directory of the current session.
    pub(crate) fn home(&self) -> &str {
        if self.is_root {
            &self.config.root_home
        } else {
            &self.config.user_home
        }
    }

    /// Move to `dir`, or to `/` when it is not a directory.
    fn go_home(&mut self) {
        let home = String::from(self.home());
        self.cwd = match self.fs.change_directory(&home, "/") {
            Ok(dir) => dir,
            Err(e) => {
                warn!(home = %home, error = %e, "home directory missing");
                String::from("/")
            }
        };
    }

    pub(crate) fn enter_root(&mut self) {
        self.is_root = true;
        self.user = String::from("root");
        self.go_home();
        debug!("root session started");
    }

    pub(crate) fn leave_root(&mut self) {
        self.is_root = false;
        self.user = self.config.user.clone();
        self.go_home();
        debug!("root session ended");
    }
}

/// Print a command error in light red.
fn report(command: &str, error: &ShellError, out: &mut dyn Console) {
    out.fg(Color::LightRed);
    if writeln!(out, "{}: {}", command, error).is_err() {
        warn!(command, error = %error, "failed to report command error");
    }
    out.reset_color();
}
