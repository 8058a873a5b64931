//! Alpha OS Command Shell
//!
//! The interactive front end to the in-memory filesystem:
//!
//! - **Parse**: line clamping, whitespace tokenizing, `>`/`>>` redirection
//! - **Commands**: the built-in command registry and handlers
//! - **Shell**: working directory, user session, prompt and dispatch
//! - **History**: ring of recent command lines
//! - **Console**: abstract colored text sink implemented by hosts
//!
//! The shell is generic over [`alpha_fs::FsService`] and writes only to a
//! [`Console`], so it runs the same on bare metal and in host tests.
//!
//! ```text
//!   host loop ──line──▶ Shell::execute ──▶ Builtin handler ──▶ FsService
//!       ▲                                        │
//!       └──────────── Console (colored text) ◀───┘
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod history;
pub mod parse;
pub mod shell;

pub use commands::{Builtin, Category};
pub use config::ShellConfig;
pub use console::{BufferConsole, Color, Console};
pub use error::{ShellError, ShellResult};
pub use history::History;
pub use parse::tokenize;
pub use shell::{Outcome, Shell};
