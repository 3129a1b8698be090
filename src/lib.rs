//! `ghostline` - Interactive single-line terminal editor with ghost autocomplete
//!
//! Renders live, muted "ghost" completion suffixes after the cursor while
//! supporting word-aware movement and deletion on a fixed-size terminal grid.
//! The editor consumes three collaborators: a blocking key-event source, a
//! styled text surface, and a caller-supplied suggestion provider.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(dead_code)] // Public API functions not yet used internally
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow grid::GridSize etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod buffer;
pub mod color;
pub mod editor;
pub mod error;
pub mod event;
pub mod grid;
pub mod input;
pub mod style;
pub mod suggest;
pub mod surface;
pub mod terminal;
pub mod word;

// Re-export core types at crate root
pub use buffer::InputBuffer;
pub use color::Rgb;
pub use editor::LineEditor;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use grid::{GridSize, Position};
pub use style::{Style, TextAttributes};
pub use suggest::{SuggestionProvider, SuggestionState, prefix_provider};
pub use surface::Surface;

// Re-export input types
pub use input::{InputParser, KeyCode, KeyEvent, KeyModifiers, KeyReader, KeySource};

// Re-export ANSI/terminal types
pub use ansi::AnsiSurface;
pub use terminal::{RawModeGuard, enable_raw_mode, is_tty, terminal_size};
