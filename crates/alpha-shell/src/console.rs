//! Console sink the shell writes to.
//!
//! The shell never touches a screen directly. Hosts implement [`Console`]
//! for whatever renders text: a VGA text buffer, a serial line, or an ANSI
//! terminal. [`BufferConsole`] records output in memory.

use alloc::string::String;
use core::fmt;

/// The 16 VGA text-mode colors.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

impl Color {
    /// All colors in palette order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGrey,
        Color::DarkGrey,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightMagenta,
        Color::LightBrown,
        Color::White,
    ];

    /// Palette index (0-15).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the high-intensity colors (8-15).
    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }
}

/// Default foreground.
pub const DEFAULT_FG: Color = Color::LightGrey;
/// Default background.
pub const DEFAULT_BG: Color = Color::Black;

/// Text output with color control.
pub trait Console: fmt::Write {
    /// Set the color used for text written after this call.
    fn set_color(&mut self, fg: Color, bg: Color);

    /// Clear the screen.
    fn clear(&mut self);

    /// Set the foreground over the default background.
    fn fg(&mut self, fg: Color) {
        self.set_color(fg, DEFAULT_BG);
    }

    /// Restore the default colors.
    fn reset_color(&mut self) {
        self.set_color(DEFAULT_FG, DEFAULT_BG);
    }
}

/// In-memory console that keeps plain text and the current colors.
#[derive(Clone, Debug)]
pub struct BufferConsole {
    text: String,
    fg: Color,
    bg: Color,
    clears: usize,
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferConsole {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            clears: 0,
        }
    }

    /// Text written since the last clear or take.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the recorded text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        core::mem::take(&mut self.text)
    }

    /// Current `(foreground, background)`.
    pub fn colors(&self) -> (Color, Color) {
        (self.fg, self.bg)
    }

    /// Number of times the screen was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl fmt::Write for BufferConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl Console for BufferConsole {
    fn set_color(&mut self, fg: Color, bg: Color) {
        self.fg = fg;
        self.bg = bg;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_palette_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index() as usize, i);
        }
        assert!(!Color::LightGrey.is_bright());
        assert!(Color::LightRed.is_bright());
    }

    #[test]
    fn test_buffer_console() {
        let mut console = BufferConsole::new();
        write!(console, "hello {}", 42).unwrap();
        console.fg(Color::LightRed);
        assert_eq!(console.text(), "hello 42");
        assert_eq!(console.colors(), (Color::LightRed, Color::Black));

        console.reset_color();
        assert_eq!(console.colors(), (DEFAULT_FG, DEFAULT_BG));

        console.clear();
        assert_eq!(console.text(), "");
        assert_eq!(console.clears(), 1);
    }
}
