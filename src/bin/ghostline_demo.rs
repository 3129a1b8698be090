//! Interactive demo: a prompt with ghost completions over a small
//! command vocabulary. Tab accepts, Up/Down cycle, Ctrl+Backspace
//! deletes a word, Enter commits, an empty line exits.

use ghostline::{
    AnsiSurface, KeyReader, LineEditor, LogLevel, Surface, enable_raw_mode, is_tty,
    prefix_provider, set_log_callback,
};
use std::io;
use std::process::ExitCode;

const VOCABULARY: &[&str] = &[
    "checkout", "cherry-pick", "clone", "commit", "config", "fetch", "merge", "pull", "push",
    "rebase", "remote", "reset", "restore", "revert", "stash", "status", "switch",
];

fn run() -> ghostline::Result<String> {
    let mut surface = AnsiSurface::from_terminal(io::stdout())?;
    surface.clear()?;
    let keys = KeyReader::new(io::stdin());
    let mut editor = LineEditor::new(keys, surface);
    let mut provider = prefix_provider(VOCABULARY.iter().copied());

    loop {
        let line = editor.edit("git> ", &mut provider)?;
        if line.is_empty() {
            return Ok(line);
        }
        editor.surface_mut().write(&format!("read: {line:?}\r\n"))?;
    }
}

fn main() -> ExitCode {
    if !is_tty(&io::stdin()) {
        eprintln!("ghostline_demo: stdin is not a terminal");
        return ExitCode::FAILURE;
    }

    set_log_callback(|level, message| {
        if level >= LogLevel::Warn {
            eprintln!("[{level:?}] {message}");
        }
    });

    let _raw = match enable_raw_mode() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("ghostline_demo: failed to enter raw mode: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ghostline_demo: {e}");
            ExitCode::FAILURE
        }
    }
}
