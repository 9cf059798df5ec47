//! Number literal lexing.
//!
//! This module handles lexing of decimal integer literals.

use crate::ascii::is_digit;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal.
    ///
    /// Consumes the maximal run of ASCII digits. The text is kept verbatim:
    /// there is no sign, radix prefix, separator or overflow check, so
    /// `007` and a hundred-digit run are both plain literals.
    ///
    /// # Returns
    ///
    /// `Token::IntegerLiteral(text)` borrowing the digits from the source.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.eat_while(is_digit);

        Token::IntegerLiteral(self.cursor.slice_from(start))
    }
}
