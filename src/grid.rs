//! Linear offset to (column, row) conversion on a bounded grid.
//!
//! The editor reasons about the screen as a single run of `width * height`
//! character cells. Every cursor jump goes through [`GridSize::position_of`],
//! which clamps the linear offset into the grid before splitting it, so a
//! computed position can never land outside the terminal even while ghost
//! text extends past the end of the buffer.

/// Terminal grid dimensions in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl GridSize {
    /// Create a new grid size.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cells(self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Clamp a linear offset into `[0, cells - 1]`.
    #[must_use]
    pub fn clamp_offset(self, offset: i64) -> u32 {
        let max = i64::from(self.cells().saturating_sub(1));
        offset.clamp(0, max) as u32
    }

    /// Convert a linear offset to a grid position, clamping out-of-range
    /// offsets (negative or past the last cell) into the grid first.
    ///
    /// A zero-sized grid has no cells to address; every offset maps to the
    /// origin.
    #[must_use]
    pub fn position_of(self, offset: i64) -> Position {
        if self.width == 0 || self.height == 0 {
            return Position::default();
        }
        let clamped = self.clamp_offset(offset);
        Position {
            col: (clamped % u32::from(self.width)) as u16,
            row: (clamped / u32::from(self.width)) as u16,
        }
    }
}

/// A (column, row) position on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Column (x), zero-based.
    pub col: u16,
    /// Row (y), zero-based.
    pub row: u16,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Convert back to a linear offset for a grid of the given width.
    #[must_use]
    pub const fn to_offset(self, width: u16) -> u32 {
        self.row as u32 * width as u32 + self.col as u32
    }
}
