//! monkc-lex - Lexical Analyzer for the Monkey Programming Language
//!
//! This crate provides the lexer (tokenizer) for Monkey. It transforms
//! source text into a stream of tokens that a parser can consume one at a
//! time.
//!
//! # Example Usage
//!
//! ```
//! use monkc_lex::{Lexer, Token};
//!
//! let source = "let x = 42;";
//! let mut lexer = Lexer::new(source);
//!
//! assert_eq!(lexer.next_token(), Token::Let);
//! assert_eq!(lexer.next_token(), Token::Identifier("x"));
//!
//! // Or iterate over the rest, stopping before end of input
//! let rest: Vec<Token> = lexer.collect();
//! assert_eq!(rest, vec![Token::Assign, Token::IntegerLiteral("42"), Token::Semicolon]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`ascii`] - Character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `let`, `fn`, `if`, `else`, `return`, `true`, `false`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_]+`. Digits never belong to an identifier.
//!
//! ## Literals
//!
//! - **Integer**: `[0-9]+`, kept as source text
//!
//! ## Operators
//!
//! `=`, `+`, `-`, `/`, `*`, `<`, `>`, `!`, `==`, `!=`
//!
//! ## Delimiters
//!
//! `(`, `)`, `{`, `}`, `,`, `;`
//!
//! ## Special
//!
//! - **EndOfInput**: repeated forever once the input is exhausted
//! - **Illegal**: any byte no rule accepts, one token per byte

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, KEYWORDS};
