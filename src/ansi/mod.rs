//! ANSI escape sequences and a terminal-backed [`Surface`].
//!
//! [`Surface`]: crate::surface::Surface

mod output;
mod sequences;

pub use output::AnsiSurface;
pub use sequences::{
    CLEAR_LINE_RIGHT, CLEAR_SCREEN, CURSOR_HIDE, CURSOR_SHOW, RESET, write_attributes, write_bg_color,
    write_cursor_position, write_fg_color,
};
