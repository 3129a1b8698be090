//! Terminal-backed surface with buffered ANSI output.

use crate::ansi::sequences;
use crate::error::{Error, Result};
use crate::grid::{GridSize, Position};
use crate::style::Style;
use crate::surface::Surface;
use crate::terminal;
use std::io::Write;
use unicode_width::UnicodeWidthChar;

/// A [`Surface`] that writes ANSI escape sequences to any [`Write`] sink.
///
/// Output for a single call is assembled in an internal buffer and flushed
/// once, so a styled run (SGR, text, reset) always reaches the terminal as
/// one unit and color state cannot leak if a write fails partway.
pub struct AnsiSurface<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    size: GridSize,
    cursor: Position,
}

impl<W: Write> AnsiSurface<W> {
    /// Create a surface with explicit grid dimensions.
    pub fn new(writer: W, size: GridSize) -> Result<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(Error::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            writer,
            buffer: Vec::with_capacity(1024),
            size,
            cursor: Position::default(),
        })
    }

    /// Create a surface sized from the controlling terminal.
    pub fn from_terminal(writer: W) -> Result<Self> {
        let (width, height) = terminal::terminal_size()?;
        Self::new(writer, GridSize::new(width, height))
    }

    /// Consume the surface, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Clear the screen and home both the terminal cursor and the tracked
    /// one. Call this before the first edit so the internal grid model and
    /// the real terminal agree on where (0, 0) is.
    pub fn clear(&mut self) -> Result<()> {
        self.buffer.extend_from_slice(sequences::CLEAR_SCREEN.as_bytes());
        self.cursor = Position::default();
        self.flush_buffer()
    }

    fn flush_buffer(&mut self) -> Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()?;
        Ok(())
    }

    /// Advance the tracked cursor over `text`, wrapping at the right edge
    /// and pinning at the last row (the terminal itself scrolls; the model
    /// clamps, matching the grid math used for jumps).
    fn advance(&mut self, text: &str) {
        let width = self.size.width;
        let last_row = self.size.height - 1;
        for c in text.chars() {
            match c {
                '\r' => self.cursor.col = 0,
                '\n' => self.cursor.row = (self.cursor.row + 1).min(last_row),
                _ => {
                    let w = UnicodeWidthChar::width(c).unwrap_or(0) as u16;
                    self.cursor.col += w;
                    while self.cursor.col >= width {
                        self.cursor.col -= width;
                        self.cursor.row = (self.cursor.row + 1).min(last_row);
                    }
                }
            }
        }
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    fn size(&self) -> GridSize {
        self.size
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) -> Result<()> {
        let pos = self.size.position_of(i64::from(pos.to_offset(self.size.width)));
        // Writing into the Vec buffer cannot fail; only the flush can.
        let _ = sequences::write_cursor_position(&mut self.buffer, pos.row, pos.col);
        self.cursor = pos;
        self.flush_buffer()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.buffer.extend_from_slice(text.as_bytes());
        self.advance(text);
        self.flush_buffer()
    }

    fn write_styled(&mut self, text: &str, style: Style) -> Result<()> {
        if style.is_none() {
            return self.write(text);
        }
        let _ = sequences::write_attributes(&mut self.buffer, style.attrs);
        if let Some(fg) = style.fg {
            let _ = sequences::write_fg_color(&mut self.buffer, fg);
        }
        if let Some(bg) = style.bg {
            let _ = sequences::write_bg_color(&mut self.buffer, bg);
        }
        self.buffer.extend_from_slice(text.as_bytes());
        self.buffer.extend_from_slice(sequences::RESET.as_bytes());
        self.advance(text);
        self.flush_buffer()
    }
}
