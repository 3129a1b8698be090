//! Key input: event types, byte-stream parsing, and the key-event source
//! collaborator.

pub mod keyboard;
pub mod parser;
pub mod reader;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, ParseError, ParseResult};
pub use reader::KeyReader;

use crate::error::Result;

/// A blocking source of key events.
///
/// [`next_key`](Self::next_key) blocks until a key is available. Transient
/// failures (interrupted reads, timeouts) should be returned as errors whose
/// [`Error::is_transient`](crate::Error::is_transient) is true; the editor
/// retries those without touching any state.
pub trait KeySource {
    /// Block until the next key event.
    fn next_key(&mut self) -> Result<KeyEvent>;
}
