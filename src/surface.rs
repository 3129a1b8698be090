//! The styled text sink the editor draws through.

use crate::error::Result;
use crate::grid::{GridSize, Position};
use crate::style::Style;

/// A bounded grid of character cells the editor can write styled text into.
///
/// Implementations track a current cursor position; plain writes advance it
/// linearly across the grid (wrapping at the right edge), `\r` returns to
/// column 0 and `\n` moves down one row. Positions handed to
/// [`set_cursor`](Self::set_cursor) are expected to already be clamped
/// through [`GridSize::position_of`].
///
/// A styled write is a scoped unit: the style must be fully reset before the
/// call returns, success or failure, so no color state leaks into later
/// output.
pub trait Surface {
    /// The grid dimensions.
    fn size(&self) -> GridSize;

    /// The current cursor position.
    fn cursor(&self) -> Position;

    /// Move the cursor to an absolute position.
    fn set_cursor(&mut self, pos: Position) -> Result<()>;

    /// Write unstyled text at the cursor, advancing it.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Write styled text at the cursor, advancing it. The style is reset
    /// before returning.
    fn write_styled(&mut self, text: &str, style: Style) -> Result<()>;

    /// Move the cursor by a linear cell delta, clamped into the grid.
    fn move_cursor_by(&mut self, delta: i64) -> Result<()> {
        let size = self.size();
        let offset = i64::from(self.cursor().to_offset(size.width)) + delta;
        self.set_cursor(size.position_of(offset))
    }
}
