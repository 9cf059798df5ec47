//! Token definitions for the Monkey language.
//!
//! A [`Token`] is a small `Copy` value. Identifier and integer tokens borrow
//! their text straight from the source buffer, so producing a token never
//! allocates.

use std::fmt;

/// A lexical token produced by the lexer.
///
/// # Token Categories
///
/// - **Keywords**: `let`, `fn`, `if`, `else`, `return`, `true`, `false`
/// - **Operators**: `=`, `+`, `-`, `/`, `*`, `<`, `>`, `!`, `==`, `!=`
/// - **Delimiters**: `,`, `;`, `(`, `)`, `{`, `}`
/// - **Payload tokens**: identifiers and integer literals
/// - **Special**: end of input, illegal byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    // ========================================================================
    // KEYWORDS
    // ========================================================================
    /// `let`
    Let,
    /// `fn`
    Function,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,

    // ========================================================================
    // OPERATORS
    // ========================================================================
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `*`
    Asterisk,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `!`
    Bang,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,

    // ========================================================================
    // DELIMITERS
    // ========================================================================
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LSquirly,
    /// `}`
    RSquirly,

    // ========================================================================
    // PAYLOAD TOKENS
    // ========================================================================
    /// A maximal run of ASCII letters and underscores that is not a keyword.
    Identifier(&'a str),

    /// A maximal run of ASCII digits, kept as text. Leading zeros and
    /// values wider than any machine integer are preserved verbatim.
    IntegerLiteral(&'a str),

    // ========================================================================
    // SPECIAL
    // ========================================================================
    /// End of input. Returned again on every later call.
    EndOfInput,

    /// A byte no other rule accepts. The offending byte is consumed.
    Illegal,
}

/// Reserved words and the tokens they map to.
pub const KEYWORDS: [(&str, Token<'static>); 7] = [
    ("let", Token::Let),
    ("fn", Token::Function),
    ("if", Token::If),
    ("else", Token::Else),
    ("return", Token::Return),
    ("true", Token::True),
    ("false", Token::False),
];

/// Looks up a reserved word.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use monkc_lex::{keyword_from_ident, Token};
///
/// assert_eq!(keyword_from_ident("fn"), Some(Token::Function));
/// assert_eq!(keyword_from_ident("Let"), None);
/// assert_eq!(keyword_from_ident("letter"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Token<'static>> {
    match ident {
        "let" => Some(Token::Let),
        "fn" => Some(Token::Function),
        "if" => Some(Token::If),
        "else" => Some(Token::Else),
        "return" => Some(Token::Return),
        "true" => Some(Token::True),
        "false" => Some(Token::False),
        _ => None,
    }
}

impl<'a> Token<'a> {
    /// Returns the canonical upper-case name of the token kind.
    ///
    /// ```
    /// use monkc_lex::Token;
    ///
    /// assert_eq!(Token::Identifier("x").name(), "IDENT");
    /// assert_eq!(Token::NotEqual.name(), "NOT_EQ");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Token::Let => "LET",
            Token::Function => "FUNCTION",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::Return => "RETURN",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::Assign => "ASSIGN",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Slash => "SLASH",
            Token::Asterisk => "ASTERISK",
            Token::LessThan => "LT",
            Token::GreaterThan => "GT",
            Token::Bang => "BANG",
            Token::Equal => "EQ",
            Token::NotEqual => "NOT_EQ",
            Token::Comma => "COMMA",
            Token::Semicolon => "SEMICOLON",
            Token::LParen => "LPAREN",
            Token::RParen => "RPAREN",
            Token::LSquirly => "LBRACE",
            Token::RSquirly => "RBRACE",
            Token::Identifier(_) => "IDENT",
            Token::IntegerLiteral(_) => "INT",
            Token::EndOfInput => "EOF",
            Token::Illegal => "ILLEGAL",
        }
    }

    /// Returns the source text this token stands for.
    ///
    /// `None` for [`Token::EndOfInput`] and [`Token::Illegal`], which carry
    /// no text.
    pub fn lexeme(&self) -> Option<&'a str> {
        let text = match self {
            Token::Identifier(text) | Token::IntegerLiteral(text) => text,
            Token::Let => "let",
            Token::Function => "fn",
            Token::If => "if",
            Token::Else => "else",
            Token::Return => "return",
            Token::True => "true",
            Token::False => "false",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Slash => "/",
            Token::Asterisk => "*",
            Token::LessThan => "<",
            Token::GreaterThan => ">",
            Token::Bang => "!",
            Token::Equal => "==",
            Token::NotEqual => "!=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LSquirly => "{",
            Token::RSquirly => "}",
            Token::EndOfInput | Token::Illegal => return None,
        };
        Some(text)
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Let
                | Token::Function
                | Token::If
                | Token::Else
                | Token::Return
                | Token::True
                | Token::False
        )
    }

    /// Returns true for [`Token::EndOfInput`].
    pub fn is_end(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => f.write_str(text),
            None if self.is_end() => f.write_str("<eof>"),
            None => f.write_str("<illegal>"),
        }
    }
}
