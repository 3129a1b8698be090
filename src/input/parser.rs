//! ANSI sequence parser for terminal key input.
//!
//! Parses raw bytes from the terminal into [`KeyEvent`]s. Supports:
//! - Standard VT sequences (arrows, Home/End, Delete)
//! - CSI sequences with `1;N` modifier encoding
//! - SS3 sequences (application cursor keys)
//! - Control characters and UTF-8 input
//!
//! Keys outside the editor's vocabulary parse to [`KeyCode::Unsupported`]
//! rather than failing, so one stray function key never derails the stream.

// Parser has many match arms for different terminal sequences
#![allow(clippy::match_same_arms)]
// Self is used for consistency with other methods even when not needed
#![allow(clippy::unused_self)]
// Result wrapping is for consistency in the parsing API
#![allow(clippy::unnecessary_wraps)]

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape sequence (need more bytes).
    Incomplete,
    /// Unrecognized escape sequence. The payload is the full sequence so
    /// callers can skip past it.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 in input.
    InvalidUtf8,
}

/// Result of parsing input: the event and the number of bytes consumed.
pub type ParseResult = Result<(KeyEvent, usize), ParseError>;

/// Stateless byte-stream key parser.
#[derive(Clone, Debug, Default)]
pub struct InputParser;

impl InputParser {
    /// Create a new input parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse bytes into a key event.
    ///
    /// Returns the event and number of bytes consumed. Call repeatedly with
    /// the remaining buffer until `Err(ParseError::Empty)` or
    /// `Err(ParseError::Incomplete)` is returned.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let first = input[0];

        match first {
            // Escape sequence
            0x1b => self.parse_escape(input),
            // Enter (CR or LF) and Tab before the generic Ctrl+letter range
            b'\r' | b'\n' => Ok((KeyEvent::key(KeyCode::Enter), 1)),
            b'\t' => Ok((KeyEvent::key(KeyCode::Tab), 1)),
            // Ctrl+Backspace in most terminals
            0x08 => Ok((KeyEvent::with_ctrl(KeyCode::Backspace), 1)),
            0x00 => Ok((KeyEvent::key(KeyCode::Unsupported), 1)),
            // Remaining Ctrl+A through Ctrl+Z
            0x01..=0x1a => {
                let c = (first - 1 + b'a') as char;
                Ok((KeyEvent::new(KeyCode::Char(c), KeyModifiers::CTRL), 1))
            }
            0x7f => Ok((KeyEvent::key(KeyCode::Backspace), 1)),
            // Regular characters (ASCII)
            0x20..=0x7e => Ok((KeyEvent::char(first as char), 1)),
            // UTF-8 sequences
            0x80..=0xff => self.parse_utf8(input),
            _ => Ok((KeyEvent::key(KeyCode::Unsupported), 1)),
        }
    }

    /// Parse an escape sequence.
    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        if input.len() == 1 {
            // Could be just Escape or start of sequence
            return Err(ParseError::Incomplete);
        }

        match input[1] {
            // CSI sequence: ESC [
            b'[' => self.parse_csi(input),
            // SS3 sequence: ESC O (application cursor keys)
            b'O' => self.parse_ss3(input),
            // Alt+Backspace
            0x7f => Ok((
                KeyEvent::new(KeyCode::Backspace, KeyModifiers::ALT),
                2,
            )),
            // Alt+key: ESC <char>
            0x20..=0x7e => {
                let c = input[1] as char;
                Ok((KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT), 2))
            }
            // Double escape
            0x1b => Ok((KeyEvent::key(KeyCode::Esc), 1)),
            _ => Ok((KeyEvent::key(KeyCode::Esc), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ ...).
    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        // Find the final byte (0x40-0x7e)
        let mut end = 2;
        while end < input.len() {
            let b = input[end];
            if (0x40..=0x7e).contains(&b) {
                break;
            }
            end += 1;
        }

        if end >= input.len() {
            return Err(ParseError::Incomplete);
        }

        let final_byte = input[end];
        let params = &input[2..end];

        let parsed = match final_byte {
            b'A' => self.parse_modified_key(params, KeyCode::Up, end + 1),
            b'B' => self.parse_modified_key(params, KeyCode::Down, end + 1),
            b'C' => self.parse_modified_key(params, KeyCode::Right, end + 1),
            b'D' => self.parse_modified_key(params, KeyCode::Left, end + 1),
            b'H' => self.parse_modified_key(params, KeyCode::Home, end + 1),
            b'F' => self.parse_modified_key(params, KeyCode::End, end + 1),
            b'Z' => Ok((
                KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT),
                end + 1,
            )),

            // Tilde sequences: ESC [ <number> ~
            b'~' => self.parse_tilde_key(params, end + 1),

            _ => Err(ParseError::UnrecognizedSequence(Vec::new())),
        };

        // Any sequence-level failure carries the complete sequence: callers
        // skip exactly its length, so one stray key never shifts the rest of
        // the stream out of alignment.
        parsed.map_err(|_| ParseError::UnrecognizedSequence(input[..=end].to_vec()))
    }

    /// Parse a key with modifiers from CSI params.
    fn parse_modified_key(&self, params: &[u8], base_key: KeyCode, consumed: usize) -> ParseResult {
        let modifiers = if params.is_empty() {
            KeyModifiers::empty()
        } else {
            self.parse_modifiers(params)?
        };
        Ok((KeyEvent::new(base_key, modifiers), consumed))
    }

    /// Parse modifiers from CSI parameter bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidUtf8`] if the parameter bytes are not valid UTF-8.
    fn parse_modifiers(&self, params: &[u8]) -> Result<KeyModifiers, ParseError> {
        // Format: 1;N where N encodes modifiers
        // N = 1 + (shift ? 1 : 0) + (alt ? 2 : 0) + (ctrl ? 4 : 0)
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let parts: Vec<&str> = s.split(';').collect();
        if parts.len() >= 2 {
            if let Ok(n) = parts[1].parse::<u8>() {
                let n = n.saturating_sub(1);
                let mut mods = KeyModifiers::empty();
                if n & 1 != 0 {
                    mods |= KeyModifiers::SHIFT;
                }
                if n & 2 != 0 {
                    mods |= KeyModifiers::ALT;
                }
                if n & 4 != 0 {
                    mods |= KeyModifiers::CTRL;
                }
                return Ok(mods);
            }
        }
        Ok(KeyModifiers::empty())
    }

    /// Parse tilde key sequences (Home, End, Delete, and keys the editor
    /// does not use).
    fn parse_tilde_key(&self, params: &[u8], consumed: usize) -> ParseResult {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let parts: Vec<&str> = s.split(';').collect();
        let num: u8 = parts.first().and_then(|p| p.parse().ok()).unwrap_or(0);

        let modifiers = if parts.len() >= 2 {
            self.parse_modifiers(params)?
        } else {
            KeyModifiers::empty()
        };

        let code = match num {
            1 | 7 => KeyCode::Home,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            // Insert, PageUp/PageDown, function keys
            2 | 5 | 6 | 11..=34 => KeyCode::Unsupported,
            // The caller replaces the payload with the full sequence.
            _ => return Err(ParseError::UnrecognizedSequence(Vec::new())),
        };

        Ok((KeyEvent::new(code, modifiers), consumed))
    }

    /// Parse SS3 sequences (ESC O ...).
    fn parse_ss3(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        let code = match input[2] {
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'M' => KeyCode::Enter,
            b'P'..=b'S' => KeyCode::Unsupported,
            _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
        };

        Ok((KeyEvent::key(code), 3))
    }

    /// Parse a UTF-8 encoded character.
    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let len = match input[0] {
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => return Err(ParseError::InvalidUtf8),
        };

        if input.len() < len {
            return Err(ParseError::Incomplete);
        }

        match std::str::from_utf8(&input[..len]) {
            Ok(s) => {
                let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;
                Ok((KeyEvent::char(c), len))
            }
            Err(_) => Err(ParseError::InvalidUtf8),
        }
    }
}
