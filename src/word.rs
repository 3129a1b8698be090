//! Word-unit length scanning for word-aware movement and deletion.
//!
//! A word-unit is the span a whole-word operation affects: a run of word
//! characters (alphanumeric or `_`), or exactly one non-word character, plus
//! the whitespace between it and the cursor. Character-wise operations use a
//! unit length of 1.

/// Whether a character counts as part of a word.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Length of the unit immediately left of `cursor`.
///
/// Returns 0 only when `cursor` is 0. With `word_wise` unset the unit is a
/// single character; otherwise it is the trailing whitespace run before the
/// cursor plus the word run (or one non-word character) before that.
#[must_use]
pub fn backward_unit_len(chars: &[char], cursor: usize, word_wise: bool) -> usize {
    let cursor = cursor.min(chars.len());
    if cursor == 0 {
        return 0;
    }
    if !word_wise {
        return 1;
    }

    let mut idx = cursor;
    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    if idx > 0 {
        if is_word_char(chars[idx - 1]) {
            while idx > 0 && is_word_char(chars[idx - 1]) {
                idx -= 1;
            }
        } else {
            // No word run: take exactly one non-word character.
            idx -= 1;
        }
    }
    cursor - idx
}

/// Length of the unit immediately right of `cursor`.
///
/// Symmetric to [`backward_unit_len`]: leading whitespace run after the
/// cursor, then a word run or a single non-word character. Returns 0 only at
/// the end of the buffer.
#[must_use]
pub fn forward_unit_len(chars: &[char], cursor: usize, word_wise: bool) -> usize {
    let cursor = cursor.min(chars.len());
    if cursor == chars.len() {
        return 0;
    }
    if !word_wise {
        return 1;
    }

    let mut idx = cursor;
    while idx < chars.len() && chars[idx].is_whitespace() {
        idx += 1;
    }
    if idx < chars.len() {
        if is_word_char(chars[idx]) {
            while idx < chars.len() && is_word_char(chars[idx]) {
                idx += 1;
            }
        } else {
            idx += 1;
        }
    }
    idx - cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_char_wise_units() {
        let text = chars("hello");
        assert_eq!(backward_unit_len(&text, 3, false), 1);
        assert_eq!(forward_unit_len(&text, 3, false), 1);
        assert_eq!(backward_unit_len(&text, 0, false), 0);
        assert_eq!(forward_unit_len(&text, 5, false), 0);
    }

    #[test]
    fn test_backward_word() {
        // "hello world" with cursor at the end: the unit is "world".
        let text = chars("hello world");
        assert_eq!(backward_unit_len(&text, 11, true), 5);
        // Cursor after "hello ": the unit is "hello" plus the space.
        assert_eq!(backward_unit_len(&text, 6, true), 6);
    }

    #[test]
    fn test_forward_word_over_whitespace() {
        // "foo  bar" with cursor after "foo": unit covers both spaces and "bar".
        let text = chars("foo  bar");
        assert_eq!(forward_unit_len(&text, 3, true), 5);
    }

    #[test]
    fn test_single_non_word_char() {
        let text = chars("foo ++");
        assert_eq!(backward_unit_len(&text, 6, true), 1);
        // From before the punctuation, forward takes only one of them.
        assert_eq!(forward_unit_len(&text, 4, true), 1);
        // Whitespace then punctuation: one space + one '+'.
        assert_eq!(forward_unit_len(&text, 3, true), 2);
    }

    #[test]
    fn test_whitespace_only_runs() {
        let text = chars("   ");
        assert_eq!(backward_unit_len(&text, 3, true), 3);
        assert_eq!(forward_unit_len(&text, 0, true), 3);
    }

    #[test]
    fn test_underscores_are_word_chars() {
        let text = chars("snake_case x");
        assert_eq!(backward_unit_len(&text, 10, true), 10);
        assert_eq!(forward_unit_len(&text, 0, true), 10);
    }

    #[test]
    fn test_at_boundaries() {
        let text = chars("abc");
        assert_eq!(backward_unit_len(&text, 0, true), 0);
        assert_eq!(forward_unit_len(&text, 3, true), 0);
        // Out-of-range cursors are treated as the buffer end.
        assert_eq!(forward_unit_len(&text, 10, true), 0);
        assert_eq!(backward_unit_len(&text, 10, true), 3);
    }

    #[test]
    fn test_always_at_least_one_when_available() {
        let text = chars("a +_9 é!");
        for cursor in 1..=text.len() {
            assert!(backward_unit_len(&text, cursor, true) >= 1);
        }
        for cursor in 0..text.len() {
            assert!(forward_unit_len(&text, cursor, true) >= 1);
        }
    }
}
