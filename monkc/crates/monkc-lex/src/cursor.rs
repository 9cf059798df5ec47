//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains the two-index
//! position state the lexer scans with: `position` is the byte under
//! examination and `read_position` is the next byte to load. The current
//! byte is cached and becomes the sentinel `0` once the buffer is
//! exhausted.

use crate::ascii::EOF_BYTE;

/// A cursor over the source buffer.
///
/// Construction loads the first byte, so a fresh cursor already points at
/// the start of the input.
///
/// # Example
///
/// ```
/// use monkc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let");
/// assert_eq!(cursor.current(), b'l');
/// cursor.advance();
/// assert_eq!(cursor.current(), b'e');
/// assert!(cursor.peek_is(b't'));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte index of the current byte.
    position: usize,

    /// Byte index of the next byte to load (always `position + 1`).
    read_position: usize,

    /// The byte at `position`, or `EOF_BYTE` past the end.
    ch: u8,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor primed on the first byte of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            ch: EOF_BYTE,
        };
        cursor.advance();
        cursor
    }

    /// Returns the byte at the cursor, or `0` if the buffer is exhausted.
    #[inline]
    pub fn current(&self) -> u8 {
        self.ch
    }

    /// Moves one byte forward.
    ///
    /// Loads the byte at `read_position` (or the sentinel when there is
    /// none), then shifts both indices by one. This is the only method that
    /// moves the cursor.
    ///
    /// ```
    /// use monkc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// cursor.advance();
    /// assert_eq!(cursor.current(), 0);
    /// cursor.advance();
    /// assert_eq!(cursor.current(), 0);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        self.ch = self
            .source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_BYTE);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Returns true if the byte after the current one equals `expected`.
    ///
    /// Never consumes anything. Looking past the end of the buffer is a
    /// non-match.
    ///
    /// ```
    /// use monkc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!");
    /// assert!(!cursor.peek_is(b'='));
    /// ```
    #[inline]
    pub fn peek_is(&self, expected: u8) -> bool {
        self.source.as_bytes().get(self.read_position) == Some(&expected)
    }

    /// Returns true while the current byte is not the sentinel.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.ch != EOF_BYTE
    }

    /// Advances while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.ch) {
            self.advance();
        }
    }

    /// Returns the byte position of the current byte.
    ///
    /// Once the buffer is exhausted this keeps growing by one per advance.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte position of the next byte to load.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Returns the source from `start` up to (not including) the current
    /// position.
    ///
    /// Callers only pass starts of ASCII runs that the cursor has scanned
    /// past, so both ends sit on character boundaries inside the buffer.
    ///
    /// ```
    /// use monkc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("five = 5");
    /// let start = cursor.position();
    /// cursor.eat_while(|b| b.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "five");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_primes_first_byte() {
        let cursor = Cursor::new("xyz");
        assert_eq!(cursor.current(), b'x');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_position(), 1);
        assert!(cursor.has_more());
    }

    #[test]
    fn test_new_on_empty_source_is_exhausted() {
        let cursor = Cursor::new("");
        assert_eq!(cursor.current(), 0);
        assert!(!cursor.has_more());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_moves_both_indices() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        assert_eq!(cursor.current(), b'b');
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_position(), 2);
    }

    #[test]
    fn test_advance_past_end_keeps_sentinel() {
        let mut cursor = Cursor::new("a");
        for _ in 0..5 {
            cursor.advance();
            assert_eq!(cursor.current(), 0);
            assert!(!cursor.has_more());
        }
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_peek_is_does_not_consume() {
        let cursor = Cursor::new("==");
        assert!(cursor.peek_is(b'='));
        assert!(cursor.peek_is(b'='));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_peek_is_at_end_is_false() {
        let mut cursor = Cursor::new("=");
        assert!(!cursor.peek_is(b'='));
        cursor.advance();
        assert!(!cursor.peek_is(b'='));
        assert!(!cursor.peek_is(0));
    }

    #[test]
    fn test_eat_while_stops_at_sentinel() {
        let mut cursor = Cursor::new("123");
        cursor.eat_while(|b| b.is_ascii_digit());
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.slice_from(0), "123");
    }

    #[test]
    fn test_multibyte_bytes_are_visited_one_at_a_time() {
        let mut cursor = Cursor::new("é");
        assert_eq!(cursor.current(), 0xC3);
        cursor.advance();
        assert_eq!(cursor.current(), 0xA9);
        cursor.advance();
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn test_interior_nul_looks_like_sentinel() {
        let mut cursor = Cursor::new("a\0b");
        cursor.advance();
        assert!(!cursor.has_more());
        cursor.advance();
        assert_eq!(cursor.current(), b'b');
    }
}
