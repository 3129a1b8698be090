//! Constant ANSI escape sequences and SGR writers.

use crate::color::Rgb;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Clear from cursor to end of line.
pub const CLEAR_LINE_RIGHT: &str = "\x1b[K";

/// Clear the whole screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Write an absolute cursor position sequence (0-indexed input, CUP is
/// 1-indexed on the wire).
pub fn write_cursor_position<W: Write>(out: &mut W, row: u16, col: u16) -> io::Result<()> {
    write!(out, "\x1b[{};{}H", row + 1, col + 1)
}

/// Write a 24-bit foreground color sequence.
pub fn write_fg_color<W: Write>(out: &mut W, color: Rgb) -> io::Result<()> {
    write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Write a 24-bit background color sequence.
pub fn write_bg_color<W: Write>(out: &mut W, color: Rgb) -> io::Result<()> {
    write!(out, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Write SGR codes enabling the given attributes.
pub fn write_attributes<W: Write>(out: &mut W, attrs: TextAttributes) -> io::Result<()> {
    if attrs.contains(TextAttributes::BOLD) {
        out.write_all(b"\x1b[1m")?;
    }
    if attrs.contains(TextAttributes::DIM) {
        out.write_all(b"\x1b[2m")?;
    }
    if attrs.contains(TextAttributes::ITALIC) {
        out.write_all(b"\x1b[3m")?;
    }
    if attrs.contains(TextAttributes::UNDERLINE) {
        out.write_all(b"\x1b[4m")?;
    }
    if attrs.contains(TextAttributes::INVERSE) {
        out.write_all(b"\x1b[7m")?;
    }
    Ok(())
}
