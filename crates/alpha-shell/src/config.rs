//! Shell configuration.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Maximum accepted command line length in bytes; longer input is cut.
pub const MAX_LINE_LEN: usize = 512;

/// Maximum number of tokens on a command line, command name included.
pub const MAX_ARGS: usize = 32;

/// Default number of remembered commands.
pub const HISTORY_SIZE: usize = 50;

/// Directories longer than this are shortened in the prompt.
pub const PROMPT_WIDTH: usize = 20;

/// Session and prompt settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Initial host name
    pub hostname: String,
    /// Name of the unprivileged user
    pub user: String,
    /// Home directory of the unprivileged user
    pub user_home: String,
    /// Home directory of root
    pub root_home: String,
    /// Passwords accepted by `root` and `su root`
    pub root_passwords: Vec<String>,
    /// History ring size
    pub history_size: usize,
    /// Prompt directory width before shortening
    pub prompt_width: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            hostname: String::from("alphaos"),
            user: String::from("user"),
            user_home: String::from("/home/user"),
            root_home: String::from("/root"),
            root_passwords: vec![String::from("root"), String::from("admin")],
            history_size: HISTORY_SIZE,
            prompt_width: PROMPT_WIDTH,
        }
    }
}

impl ShellConfig {
    /// Set the initial host name.
    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = String::from(hostname);
        self
    }

    /// Set the history ring size.
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Whether `candidate` is an accepted root password.
    pub fn accepts_root_password(&self, candidate: &str) -> bool {
        self.root_passwords.iter().any(|p| p == candidate)
    }
}
