//! Built-in command registry.
//!
//! Every command the shell understands is a [`Builtin`] variant. Lookup is
//! by exact name; dispatch happens in [`crate::shell`].

mod files;
mod session;
mod system;

pub(crate) use files::{cat, cd, chmod, echo, ls, mkdir, pwd, rm, stat, touch, tree, write};
pub(crate) use session::{exit, finish_root_login, history, hostname, root, su, whoami};
pub(crate) use system::{banner, calc, clear, halt, help, info};

/// Help listing groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Files,
    System,
    Session,
    Utility,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Files,
        Category::System,
        Category::Session,
        Category::Utility,
    ];

    /// Heading used by `help`.
    pub fn title(self) -> &'static str {
        match self {
            Category::Files => "File System Commands",
            Category::System => "System Commands",
            Category::Session => "User Management",
            Category::Utility => "Utility Commands",
        }
    }
}

/// A built-in command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    // === File system ===
    Ls,
    Cd,
    Pwd,
    Cat,
    Mkdir,
    Touch,
    Rm,
    Tree,
    Chmod,
    Write,

    // === System ===
    Clear,
    Info,
    Stat,
    Halt,

    // === Session ===
    Whoami,
    Su,
    Root,
    Exit,

    // === Utility ===
    Echo,
    Calc,
    History,
    Hostname,
    Banner,
    Help,
}

impl Builtin {
    /// Registration order, which is also `help` order within a category.
    pub const ALL: [Builtin; 24] = [
        Builtin::Ls,
        Builtin::Cd,
        Builtin::Pwd,
        Builtin::Mkdir,
        Builtin::Touch,
        Builtin::Write,
        Builtin::Cat,
        Builtin::Rm,
        Builtin::Chmod,
        Builtin::Tree,
        Builtin::Clear,
        Builtin::Info,
        Builtin::Stat,
        Builtin::Halt,
        Builtin::Whoami,
        Builtin::Su,
        Builtin::Root,
        Builtin::Exit,
        Builtin::Echo,
        Builtin::Calc,
        Builtin::History,
        Builtin::Hostname,
        Builtin::Banner,
        Builtin::Help,
    ];

    /// Look a command up by name.
    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Ls => "ls",
            Builtin::Cd => "cd",
            Builtin::Pwd => "pwd",
            Builtin::Cat => "cat",
            Builtin::Mkdir => "mkdir",
            Builtin::Touch => "touch",
            Builtin::Rm => "rm",
            Builtin::Tree => "tree",
            Builtin::Chmod => "chmod",
            Builtin::Write => "write",
            Builtin::Clear => "clear",
            Builtin::Info => "info",
            Builtin::Stat => "stat",
            Builtin::Halt => "halt",
            Builtin::Whoami => "whoami",
            Builtin::Su => "su",
            Builtin::Root => "root",
            Builtin::Exit => "exit",
            Builtin::Echo => "echo",
            Builtin::Calc => "calc",
            Builtin::History => "history",
            Builtin::Hostname => "hostname",
            Builtin::Banner => "banner",
            Builtin::Help => "help",
        }
    }

    /// One-line description.
    pub fn help(self) -> &'static str {
        match self {
            Builtin::Ls => "List directory contents",
            Builtin::Cd => "Change directory (supports .. for parent)",
            Builtin::Pwd => "Print working directory",
            Builtin::Cat => "Display file contents",
            Builtin::Mkdir => "Create directory",
            Builtin::Touch => "Create empty file",
            Builtin::Rm => "Remove file or empty directory",
            Builtin::Tree => "Show directory tree",
            Builtin::Chmod => "Change permission bits",
            Builtin::Write => "Replace file contents",
            Builtin::Clear => "Clear screen",
            Builtin::Info => "Show system information",
            Builtin::Stat => "File system statistics, or details of one entry",
            Builtin::Halt => "Stop the shell",
            Builtin::Whoami => "Current user",
            Builtin::Su => "Switch user",
            Builtin::Root => "Enter root shell",
            Builtin::Exit => "Exit root shell",
            Builtin::Echo => "Display text, optionally into a file",
            Builtin::Calc => "Integer calculator",
            Builtin::History => "Command history",
            Builtin::Hostname => "Display or set hostname",
            Builtin::Banner => "Display Alpha OS banner",
            Builtin::Help => "This help message",
        }
    }

    /// Usage synopsis.
    pub fn usage(self) -> &'static str {
        match self {
            Builtin::Ls => "ls [-l] [directory]",
            Builtin::Cd => "cd [directory]",
            Builtin::Pwd => "pwd",
            Builtin::Cat => "cat <file>",
            Builtin::Mkdir => "mkdir [-p] <directory>",
            Builtin::Touch => "touch <file>",
            Builtin::Rm => "rm <path>",
            Builtin::Tree => "tree [directory]",
            Builtin::Chmod => "chmod <octal-mode> <path>",
            Builtin::Write => "write <file> <text...>",
            Builtin::Clear => "clear",
            Builtin::Info => "info",
            Builtin::Stat => "stat [path]",
            Builtin::Halt => "halt",
            Builtin::Whoami => "whoami",
            Builtin::Su => "su [root|user]",
            Builtin::Root => "root",
            Builtin::Exit => "exit",
            Builtin::Echo => "echo <text...> [> file | >> file]",
            Builtin::Calc => "calc <a> <op> <b>",
            Builtin::History => "history",
            Builtin::Hostname => "hostname [name]",
            Builtin::Banner => "banner",
            Builtin::Help => "help [command]",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Builtin::Ls
            | Builtin::Cd
            | Builtin::Pwd
            | Builtin::Cat
            | Builtin::Mkdir
            | Builtin::Touch
            | Builtin::Rm
            | Builtin::Tree
            | Builtin::Chmod
            | Builtin::Write => Category::Files,
            Builtin::Clear | Builtin::Info | Builtin::Stat | Builtin::Halt => Category::System,
            Builtin::Whoami | Builtin::Su | Builtin::Root | Builtin::Exit => Category::Session,
            Builtin::Echo
            | Builtin::Calc
            | Builtin::History
            | Builtin::Hostname
            | Builtin::Banner
            | Builtin::Help => Category::Utility,
        }
    }
}
