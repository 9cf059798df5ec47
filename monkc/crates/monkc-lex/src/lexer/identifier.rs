//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use crate::ascii::is_letter;
use crate::token::{keyword_from_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of letters and underscores starting at the
    /// current byte, then checks the run against the reserved words. The
    /// cursor is left on the first byte after the run.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g., `Token::Let`) or
    /// `Token::Identifier(text)` borrowing the run from the source.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.eat_while(is_letter);

        let text = self.cursor.slice_from(start);

        keyword_from_ident(text).unwrap_or(Token::Identifier(text))
    }
}
