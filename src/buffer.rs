//! The edited line and its cursor.

/// A single editable line with a cursor.
///
/// The cursor is a character offset with the invariant
/// `0 <= cursor <= len()`, maintained across every operation. Range
/// violations are controller bugs, not user input, and panic immediately.
#[derive(Clone, Debug, Default)]
pub struct InputBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl InputBuffer {
    /// Create an empty buffer with the cursor at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The cursor position (character offset).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The buffer contents as a char slice.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The full buffer contents.
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// The buffer contents from `index` to the end.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    #[must_use]
    pub fn text_from(&self, index: usize) -> String {
        assert!(
            index <= self.chars.len(),
            "text_from index {index} exceeds buffer length {}",
            self.chars.len()
        );
        self.chars[index..].iter().collect()
    }

    /// Move the cursor to `index`.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn set_cursor(&mut self, index: usize) {
        assert!(
            index <= self.chars.len(),
            "cursor {index} exceeds buffer length {}",
            self.chars.len()
        );
        self.cursor = index;
    }

    /// Insert `s` at `index`. The cursor is not moved; callers that want the
    /// cursor past the insertion call [`set_cursor`](Self::set_cursor).
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert_at(&mut self, index: usize, s: &str) {
        assert!(
            index <= self.chars.len(),
            "insert index {index} exceeds buffer length {}",
            self.chars.len()
        );
        self.chars.splice(index..index, s.chars());
        debug_assert!(self.cursor <= self.chars.len());
    }

    /// Remove `len` characters starting at `index`. If the cursor was inside
    /// or after the removed range it is pulled back so the invariant holds.
    ///
    /// # Panics
    /// Panics if `index + len > len()`.
    pub fn remove_range(&mut self, index: usize, len: usize) {
        assert!(
            index + len <= self.chars.len(),
            "remove range {index}..{} exceeds buffer length {}",
            index + len,
            self.chars.len()
        );
        self.chars.drain(index..index + len);
        if self.cursor > self.chars.len() {
            self.cursor = self.chars.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_text() {
        let mut buf = InputBuffer::new();
        buf.insert_at(0, "hello");
        buf.insert_at(5, " world");
        buf.insert_at(5, ",");
        assert_eq!(buf.text(), "hello, world");
        assert_eq!(buf.len(), 12);
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_remove_range() {
        let mut buf = InputBuffer::new();
        buf.insert_at(0, "hello world");
        buf.set_cursor(11);
        buf.remove_range(5, 6);
        assert_eq!(buf.text(), "hello");
        // Cursor pulled back to the new length.
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_text_from() {
        let mut buf = InputBuffer::new();
        buf.insert_at(0, "abcdef");
        assert_eq!(buf.text_from(3), "def");
        assert_eq!(buf.text_from(6), "");
    }

    #[test]
    fn test_cursor_invariant_after_edits() {
        let mut buf = InputBuffer::new();
        buf.insert_at(0, "abc");
        buf.set_cursor(3);
        buf.insert_at(3, "def");
        assert!(buf.cursor() <= buf.len());
        buf.remove_range(0, 6);
        assert!(buf.cursor() <= buf.len());
    }

    #[test]
    #[should_panic(expected = "remove range")]
    fn test_remove_out_of_range_panics() {
        let mut buf = InputBuffer::new();
        buf.insert_at(0, "abc");
        buf.remove_range(1, 5);
    }

    #[test]
    #[should_panic(expected = "insert index")]
    fn test_insert_out_of_range_panics() {
        let mut buf = InputBuffer::new();
        buf.insert_at(1, "x");
    }

    #[test]
    #[should_panic(expected = "cursor")]
    fn test_set_cursor_out_of_range_panics() {
        let mut buf = InputBuffer::new();
        buf.set_cursor(1);
    }

    #[test]
    fn test_multibyte_chars_count_as_one() {
        let mut buf = InputBuffer::new();
        buf.insert_at(0, "héllo");
        assert_eq!(buf.len(), 5);
        buf.remove_range(1, 1);
        assert_eq!(buf.text(), "hllo");
    }
}
