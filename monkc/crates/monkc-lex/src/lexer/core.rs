//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::iter::FusedIterator;

use monkc_util::Span;
use tracing::{debug, trace};

use crate::ascii::{is_digit, is_letter, is_whitespace, EOF_BYTE};
use crate::cursor::Cursor;
use crate::token::Token;

/// Lexer for the Monkey programming language.
///
/// The lexer owns a [`Cursor`] over the input and hands out one token per
/// call to [`Lexer::next_token`]. It never fails: bytes that start no
/// lexeme become [`Token::Illegal`], and an exhausted input keeps yielding
/// [`Token::EndOfInput`].
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Set once the iterator has seen end of input.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer positioned on the first byte of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then applies the first matching rule: a
    /// single-byte punctuator or operator, `=`/`==`, `!`/`!=`, an
    /// identifier or keyword, an integer, end of input, or an illegal
    /// byte.
    ///
    /// ```
    /// use monkc_lex::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x != 10");
    /// assert_eq!(lexer.next_token(), Token::Identifier("x"));
    /// assert_eq!(lexer.next_token(), Token::NotEqual);
    /// assert_eq!(lexer.next_token(), Token::IntegerLiteral("10"));
    /// assert_eq!(lexer.next_token(), Token::EndOfInput);
    /// assert_eq!(lexer.next_token(), Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.token_start = self.cursor.position();

        let token = match self.cursor.current() {
            b'{' => Token::LSquirly,
            b'}' => Token::RSquirly,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b',' => Token::Comma,
            b';' => Token::Semicolon,
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'/' => Token::Slash,
            b'*' => Token::Asterisk,
            b'<' => Token::LessThan,
            b'>' => Token::GreaterThan,
            b'!' => self.lex_bang(),
            b'=' => self.lex_equals(),
            // Scans stop on the first byte they reject, so no trailing advance.
            c if is_letter(c) => return self.lex_identifier(),
            c if is_digit(c) => return self.lex_number(),
            EOF_BYTE => Token::EndOfInput,
            c => {
                trace!(byte = c, offset = self.token_start, "illegal byte");
                Token::Illegal
            },
        };

        self.cursor.advance();
        token
    }

    /// Returns the next token together with its byte span.
    pub fn next_spanned(&mut self) -> (Token<'a>, Span) {
        let token = self.next_token();
        (token, self.span())
    }

    /// Returns true while the current byte is not the end-of-input
    /// sentinel.
    ///
    /// Pending whitespace counts: `"  "` reports more tokens until the
    /// lexer has skipped it and returned [`Token::EndOfInput`].
    pub fn has_more_tokens(&self) -> bool {
        self.cursor.has_more()
    }

    /// Returns the byte span of the most recently returned token.
    ///
    /// Both ends are clamped to the input length, so the span of
    /// [`Token::EndOfInput`] is the empty range at the end of input.
    pub fn span(&self) -> Span {
        let len = self.cursor.source().len();
        let start = self.token_start.min(len);
        let end = self.cursor.position().min(len).max(start);
        Span::new(start, end)
    }

    /// Skips spaces, tabs, newlines and carriage returns.
    pub(crate) fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// Returns the byte position of the current byte.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting position of the most recent token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Lexes the remaining input into a vector ending with
    /// [`Token::EndOfInput`].
    ///
    /// ```
    /// use monkc_lex::{Lexer, Token};
    ///
    /// let tokens = Lexer::new("fn()").tokenize();
    /// assert_eq!(
    ///     tokens,
    ///     vec![Token::Function, Token::LParen, Token::RParen, Token::EndOfInput]
    /// );
    /// ```
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            tokens.push(token);
            if token.is_end() {
                break;
            }
        }
        debug!(count = tokens.len(), "tokenized input");
        tokens
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_end() {
            self.finished = true;
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).collect()
    }

    #[test]
    fn test_single_byte_punctuators() {
        assert_eq!(
            lex_all("=+(){},;"),
            vec![
                Token::Assign,
                Token::Plus,
                Token::LParen,
                Token::RParen,
                Token::LSquirly,
                Token::RSquirly,
                Token::Comma,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_empty_input_repeats_end() {
        let mut lexer = Lexer::new("");
        assert!(!lexer.has_more_tokens());
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), Token::EndOfInput);
        }
    }

    #[test]
    fn test_whitespace_only() {
        let mut lexer = Lexer::new(" \t\r\n ");
        assert!(lexer.has_more_tokens());
        assert_eq!(lexer.next_token(), Token::EndOfInput);
        assert!(!lexer.has_more_tokens());
    }

    #[test]
    fn test_has_more_tokens_tracks_sentinel() {
        let mut lexer = Lexer::new("a");
        assert!(lexer.has_more_tokens());
        assert_eq!(lexer.next_token(), Token::Identifier("a"));
        assert!(!lexer.has_more_tokens());
    }

    #[test]
    fn test_illegal_byte_is_consumed() {
        let mut lexer = Lexer::new("@5");
        assert_eq!(lexer.next_token(), Token::Illegal);
        assert_eq!(lexer.span(), Span::new(0, 1));
        assert_eq!(lexer.next_token(), Token::IntegerLiteral("5"));
    }

    #[test]
    fn test_non_ascii_yields_one_illegal_per_byte() {
        assert_eq!(lex_all("é"), vec![Token::Illegal, Token::Illegal]);
    }

    #[test]
    fn test_interior_nul_reads_as_end_then_resumes() {
        let mut lexer = Lexer::new("a\0b");
        assert_eq!(lexer.next_token(), Token::Identifier("a"));
        assert!(!lexer.has_more_tokens());
        assert_eq!(lexer.next_token(), Token::EndOfInput);
        assert_eq!(lexer.next_token(), Token::Identifier("b"));
        assert_eq!(lexer.next_token(), Token::EndOfInput);
    }

    #[test]
    fn test_iterator_stops_at_first_end_and_stays_stopped() {
        let mut lexer = Lexer::new("a\0b");
        assert_eq!(lexer.next(), Some(Token::Identifier("a")));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_tokenize_includes_end() {
        assert_eq!(Lexer::new("").tokenize(), vec![Token::EndOfInput]);
        assert_eq!(
            Lexer::new("5;").tokenize(),
            vec![Token::IntegerLiteral("5"), Token::Semicolon, Token::EndOfInput]
        );
    }

    #[test]
    fn test_spans() {
        let mut lexer = Lexer::new("let five = 55;");
        let spans: Vec<_> = std::iter::from_fn(|| {
            let (token, span) = lexer.next_spanned();
            (!token.is_end()).then_some(span)
        })
        .collect();
        assert_eq!(
            spans,
            vec![
                Span::new(0, 3),
                Span::new(4, 8),
                Span::new(9, 10),
                Span::new(11, 13),
                Span::new(13, 14),
            ]
        );
    }

    #[test]
    fn test_end_span_is_clamped() {
        let mut lexer = Lexer::new("x ");
        lexer.next_token();
        for _ in 0..3 {
            let (token, span) = lexer.next_spanned();
            assert_eq!(token, Token::EndOfInput);
            assert_eq!(span, Span::new(2, 2));
        }
    }

    #[test]
    fn test_accessors() {
        let mut lexer = Lexer::new("  ab");
        assert_eq!(lexer.source(), "  ab");
        assert_eq!(lexer.position(), 0);
        lexer.next_token();
        assert_eq!(lexer.token_start(), 2);
        assert_eq!(lexer.position(), 4);
    }
}
