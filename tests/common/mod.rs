//! Shared test doubles: a scripted key source and an in-memory cell grid.
#![allow(dead_code)] // Not every test binary uses every helper.

use ghostline::{Error, GridSize, KeyEvent, KeySource, Position, Result, Style, Surface};
use std::collections::VecDeque;
use std::io;

/// Key source that replays a fixed script, then reports EOF.
pub struct ScriptedKeys {
    queue: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            queue: keys.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        self.queue.pop_front().ok_or_else(|| {
            Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "script ended"))
        })
    }
}

/// An in-memory terminal grid that stores one styled char per cell, so tests
/// can assert on exactly what ended up on screen and with what style.
pub struct GridSurface {
    size: GridSize,
    cursor: Position,
    cells: Vec<(char, Style)>,
}

impl GridSurface {
    pub fn new(width: u16, height: u16) -> Self {
        let size = GridSize::new(width, height);
        Self {
            size,
            cursor: Position::default(),
            cells: vec![(' ', Style::NONE); size.cells() as usize],
        }
    }

    fn put(&mut self, c: char, style: Style) {
        match c {
            '\r' => self.cursor.col = 0,
            '\n' => {
                self.cursor.row = (self.cursor.row + 1).min(self.size.height - 1);
            }
            _ => {
                let offset = self.cursor.to_offset(self.size.width) as usize;
                let last = self.cells.len() - 1;
                self.cells[offset.min(last)] = (c, style);
                self.cursor = self
                    .size
                    .position_of(i64::from(self.cursor.to_offset(self.size.width)) + 1);
            }
        }
    }

    /// The contents of one row, with trailing blanks trimmed.
    pub fn row_text(&self, row: u16) -> String {
        let start = row as usize * self.size.width as usize;
        let text: String = self.cells[start..start + self.size.width as usize]
            .iter()
            .map(|(c, _)| *c)
            .collect();
        text.trim_end().to_string()
    }

    /// The style stored at (col, row).
    pub fn style_at(&self, col: u16, row: u16) -> Style {
        self.cells[Position::new(col, row).to_offset(self.size.width) as usize].1
    }
}

impl Surface for GridSurface {
    fn size(&self) -> GridSize {
        self.size
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) -> Result<()> {
        self.cursor = self.size.position_of(i64::from(pos.to_offset(self.size.width)));
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.put(c, Style::NONE);
        }
        Ok(())
    }

    fn write_styled(&mut self, text: &str, style: Style) -> Result<()> {
        for c in text.chars() {
            self.put(c, style);
        }
        Ok(())
    }
}
