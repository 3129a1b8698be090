//! The line editor event loop.
//!
//! [`LineEditor`] owns the two terminal-side collaborators (a key source and
//! a surface) and drives one [`EditSession`] per [`edit`](LineEditor::edit)
//! call. All mutable editing state lives in the session value, so two
//! editors never share buffers or suggestion lists.
//!
//! # Render protocol
//!
//! The screen invariant: everything to the right of the cursor always equals
//! `text[cursor..]` followed by the active ghost suggestion, padded with
//! enough spaces to overwrite whatever the previous frame left behind. Every
//! mutating transition repaints that region in one pass and then re-derives
//! the visible cursor from the logical cursor through the grid model, so the
//! cursor ends up at the edit point even though trailing cells were just
//! rewritten.

use crate::buffer::InputBuffer;
use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::input::{KeyCode, KeySource};
use crate::style::Style;
use crate::suggest::{SuggestionProvider, SuggestionState};
use crate::surface::Surface;
use crate::word;

/// Per-call editing state: the buffer, the suggestion list, and how much
/// ghost text the previous frame rendered.
#[derive(Debug, Default)]
struct EditSession {
    buffer: InputBuffer,
    suggestions: SuggestionState,
    prev_ghost_len: usize,
}

impl EditSession {
    fn new() -> Self {
        Self::default()
    }
}

/// Interactive single-line editor with ghost autocomplete.
pub struct LineEditor<K: KeySource, S: Surface> {
    keys: K,
    surface: S,
    ghost_style: Style,
}

impl<K: KeySource, S: Surface> LineEditor<K, S> {
    /// Create an editor over the given key source and surface.
    pub fn new(keys: K, surface: S) -> Self {
        Self {
            keys,
            surface,
            ghost_style: Style::ghost(),
        }
    }

    /// Replace the style ghost suggestions are rendered in.
    #[must_use]
    pub fn with_ghost_style(mut self, style: Style) -> Self {
        self.ghost_style = style;
        self
    }

    /// Access the surface (mainly for writing output between edits).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the editor, returning its collaborators.
    pub fn into_parts(self) -> (K, S) {
        (self.keys, self.surface)
    }

    /// Run one edit session: write the prompt, process keys until Enter,
    /// and return the committed line.
    ///
    /// Transient key-read failures are retried without mutating any state;
    /// fatal ones abort the session. Provider failures only ever clear the
    /// suggestion list.
    pub fn edit<P: SuggestionProvider>(&mut self, prompt: &str, provider: &mut P) -> Result<String> {
        self.surface.write(prompt)?;

        let mut session = EditSession::new();
        session.suggestions.recompute(provider, "");
        self.refresh(&mut session, 0, 0)?;

        loop {
            let key = match self.keys.next_key() {
                Ok(key) => key,
                Err(e) if e.is_transient() => {
                    emit_log(LogLevel::Debug, &format!("retrying key read: {e}"));
                    continue;
                }
                Err(e) => return Err(e),
            };

            match key.code {
                KeyCode::Backspace => {
                    let len = word::backward_unit_len(
                        session.buffer.chars(),
                        session.buffer.cursor(),
                        key.is_word_wise(),
                    );
                    if len == 0 {
                        continue;
                    }
                    let cursor = session.buffer.cursor() - len;
                    session.buffer.remove_range(cursor, len);
                    session.buffer.set_cursor(cursor);
                    session.suggestions.recompute(provider, &session.buffer.text());
                    self.surface.move_cursor_by(-(len as i64))?;
                    self.refresh(&mut session, cursor, len)?;
                }
                KeyCode::Delete => {
                    let cursor = session.buffer.cursor();
                    let len = word::forward_unit_len(session.buffer.chars(), cursor, key.is_word_wise());
                    if len == 0 {
                        continue;
                    }
                    session.buffer.remove_range(cursor, len);
                    session.suggestions.recompute(provider, &session.buffer.text());
                    self.refresh(&mut session, cursor, len)?;
                }
                KeyCode::Left => {
                    let len = word::backward_unit_len(
                        session.buffer.chars(),
                        session.buffer.cursor(),
                        key.is_word_wise(),
                    );
                    if len == 0 {
                        continue;
                    }
                    session.buffer.set_cursor(session.buffer.cursor() - len);
                    self.surface.move_cursor_by(-(len as i64))?;
                }
                KeyCode::Right => {
                    let len = word::forward_unit_len(
                        session.buffer.chars(),
                        session.buffer.cursor(),
                        key.is_word_wise(),
                    );
                    if len == 0 {
                        continue;
                    }
                    session.buffer.set_cursor(session.buffer.cursor() + len);
                    self.surface.move_cursor_by(len as i64)?;
                }
                KeyCode::Home => {
                    let delta = session.buffer.cursor() as i64;
                    if delta != 0 {
                        session.buffer.set_cursor(0);
                        self.surface.move_cursor_by(-delta)?;
                    }
                }
                KeyCode::End => {
                    let delta = (session.buffer.len() - session.buffer.cursor()) as i64;
                    if delta != 0 {
                        session.buffer.set_cursor(session.buffer.len());
                        self.surface.move_cursor_by(delta)?;
                    }
                }
                KeyCode::Up => {
                    session.suggestions.cycle_previous();
                    let cursor = session.buffer.cursor();
                    self.refresh(&mut session, cursor, 0)?;
                }
                KeyCode::Down => {
                    session.suggestions.cycle_next();
                    let cursor = session.buffer.cursor();
                    self.refresh(&mut session, cursor, 0)?;
                }
                KeyCode::Tab => {
                    let ghost = session.suggestions.active_text().to_string();
                    if ghost.is_empty() {
                        continue;
                    }
                    let from = session.buffer.cursor();
                    session.buffer.insert_at(from, &ghost);
                    session.buffer.set_cursor(from + ghost.chars().count());
                    session.suggestions.recompute(provider, &session.buffer.text());
                    self.refresh(&mut session, from, 0)?;
                }
                KeyCode::Enter => {
                    return self.finish(&mut session);
                }
                _ => {
                    if let Some(c) = key.printable_char() {
                        let from = session.buffer.cursor();
                        let mut utf8 = [0u8; 4];
                        session.buffer.insert_at(from, c.encode_utf8(&mut utf8));
                        session.buffer.set_cursor(from + 1);
                        session.suggestions.recompute(provider, &session.buffer.text());
                        self.refresh(&mut session, from, 0)?;
                    }
                    // Everything else (Esc, unsupported keys) is ignored.
                }
            }
        }
    }

    /// Repaint `text[from..]` plus the ghost and blanking pad, then place
    /// the visible cursor at the logical cursor.
    ///
    /// The screen cursor must already sit at the screen position of buffer
    /// index `from`. `vacated` is how many cells a deletion freed at the
    /// end of the line; ghost-only repaints pass 0 so the pad is exactly
    /// `prev_ghost - new_ghost`.
    fn refresh(&mut self, session: &mut EditSession, from: usize, vacated: usize) -> Result<()> {
        let origin = self.surface.cursor();
        let size = self.surface.size();

        let tail = session.buffer.text_from(from);
        if !tail.is_empty() {
            self.surface.write(&tail)?;
        }

        let ghost = session.suggestions.active_text().to_string();
        let ghost_len = ghost.chars().count();
        if !ghost.is_empty() {
            self.surface.write_styled(&ghost, self.ghost_style)?;
        }

        let pad = session.prev_ghost_len.saturating_sub(ghost_len) + vacated;
        if pad > 0 {
            self.surface.write(&" ".repeat(pad))?;
        }
        session.prev_ghost_len = ghost_len;

        let target = i64::from(origin.to_offset(size.width)) + session.buffer.cursor() as i64
            - from as i64;
        self.surface.set_cursor(size.position_of(target))
    }

    /// Commit the line: blank the remaining ghost, move past the content,
    /// and emit a newline.
    fn finish(&mut self, session: &mut EditSession) -> Result<String> {
        let origin = self.surface.cursor();
        let size = self.surface.size();

        let tail = session.buffer.text_from(session.buffer.cursor());
        if !tail.is_empty() {
            self.surface.write(&tail)?;
        }
        if session.prev_ghost_len > 0 {
            self.surface.write(&" ".repeat(session.prev_ghost_len))?;
            session.prev_ghost_len = 0;
        }

        let end = i64::from(origin.to_offset(size.width))
            + (session.buffer.len() - session.buffer.cursor()) as i64;
        self.surface.set_cursor(size.position_of(end))?;
        self.surface.write("\r\n")?;

        Ok(session.buffer.text())
    }
}
