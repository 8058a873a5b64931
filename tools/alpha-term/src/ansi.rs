//! ANSI escape rendering of the VGA palette.

use std::fmt;
use std::io::{self, Write};

use alpha_shell::{Color, Console};

/// SGR color offset for a VGA color, before adding the 30/40 or 90/100 base.
fn sgr_offset(color: Color) -> u8 {
    // VGA orders the low colors blue-green-cyan-red, ANSI red-green-yellow-blue.
    match color.index() % 8 {
        0 => 0,
        1 => 4,
        2 => 2,
        3 => 6,
        4 => 1,
        5 => 5,
        6 => 3,
        _ => 7,
    }
}

/// Foreground SGR code.
pub fn fg_code(color: Color) -> u8 {
    let base = if color.is_bright() { 90 } else { 30 };
    base + sgr_offset(color)
}

/// Background SGR code.
pub fn bg_code(color: Color) -> u8 {
    let base = if color.is_bright() { 100 } else { 40 };
    base + sgr_offset(color)
}

/// Console writing ANSI-colored text to any byte sink.
pub struct AnsiConsole<W: io::Write> {
    inner: W,
}

impl<W: io::Write> AnsiConsole<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Restore the terminal's own colors.
    pub fn reset_terminal(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\x1b[0m")
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> fmt::Write for AnsiConsole<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl<W: io::Write> Console for AnsiConsole<W> {
    fn set_color(&mut self, fg: Color, bg: Color) {
        let _ = write!(self.inner, "\x1b[{};{}m", fg_code(fg), bg_code(bg));
    }

    fn clear(&mut self) {
        let _ = self.inner.write_all(b"\x1b[2J\x1b[H");
    }
}
