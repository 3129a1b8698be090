//! Blocking key reader over any byte stream.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::input::KeySource;
use crate::input::keyboard::KeyEvent;
use crate::input::parser::{InputParser, ParseError};
use std::io::{self, Read};

/// Feeds a [`Read`] stream through the [`InputParser`], yielding one key
/// event per call.
///
/// Unrecognized or malformed escape sequences are consumed, logged, and
/// skipped; they never surface as errors. I/O errors pass straight through
/// so the caller can classify them as transient or fatal.
pub struct KeyReader<R: Read> {
    source: R,
    parser: InputParser,
    pending: Vec<u8>,
}

impl<R: Read> KeyReader<R> {
    /// Create a reader over the given byte stream.
    pub fn new(source: R) -> Self {
        Self {
            source,
            parser: InputParser::new(),
            pending: Vec::with_capacity(64),
        }
    }

    /// Consume the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.source
    }

    fn fill(&mut self) -> io::Result<()> {
        let mut chunk = [0u8; 64];
        let n = self.source.read(&mut chunk)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "key source closed",
            ));
        }
        self.pending.extend_from_slice(&chunk[..n]);
        Ok(())
    }
}

impl<R: Read> KeySource for KeyReader<R> {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            match self.parser.parse(&self.pending) {
                Ok((event, consumed)) => {
                    self.pending.drain(..consumed);
                    return Ok(event);
                }
                Err(ParseError::Empty | ParseError::Incomplete) => {
                    self.fill()?;
                }
                Err(ParseError::UnrecognizedSequence(seq)) => {
                    emit_log(
                        LogLevel::Debug,
                        &format!("skipping unrecognized sequence: {seq:02x?}"),
                    );
                    self.pending.drain(..seq.len());
                }
                Err(ParseError::InvalidUtf8) => {
                    emit_log(LogLevel::Debug, "skipping invalid UTF-8 byte");
                    self.pending.drain(..1);
                }
            }
        }
    }
}
