//! Log callback system.
//!
//! ghostline never writes diagnostics to the terminal it is editing on;
//! applications register a callback to receive them instead.

use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks, ordered least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log event to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_callback() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        // The callback is process-global and other tests log through it
        // concurrently, so only react to this test's own message.
        set_log_callback(move |level, msg| {
            if msg == "hello" {
                assert_eq!(level, LogLevel::Warn);
                called_clone.store(true, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Warn, "hello");
        assert!(called.load(Ordering::SeqCst));
    }
}
