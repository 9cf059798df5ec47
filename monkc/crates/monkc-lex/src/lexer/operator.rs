//! Two-byte operator lexing.
//!
//! Single-byte operators are dispatched directly in `core`. The `=` and `!`
//! bytes need one byte of lookahead to tell `==` and `!=` apart.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes assign or equals.
    ///
    /// Handles: `=`, `==`
    ///
    /// On `==` the cursor moves onto the second byte; the caller's
    /// trailing advance consumes it.
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        if self.cursor.peek_is(b'=') {
            self.cursor.advance();
            Token::Equal
        } else {
            Token::Assign
        }
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token<'a> {
        if self.cursor.peek_is(b'=') {
            self.cursor.advance();
            Token::NotEqual
        } else {
            Token::Bang
        }
    }
}
