//! Property tests for the lexer over arbitrary input.

use monkc_lex::{keyword_from_ident, Lexer, Token};
use proptest::prelude::*;

const LEXEMES: &[&str] = &[
    "let", "fn", "if", "else", "return", "true", "false", "=", "+", "-", "/", "*", "<", ">",
    "!", "==", "!=", ",", ";", "(", ")", "{", "}", "x", "add", "_tmp", "0", "42", "007",
];

proptest! {
    #[test]
    fn lexing_terminates_on_any_input(input in any::<String>()) {
        let tokens = Lexer::new(&input).tokenize();
        prop_assert!(tokens.len() <= input.len() + 1);
        prop_assert_eq!(tokens.last(), Some(&Token::EndOfInput));
    }

    #[test]
    fn end_of_input_is_sticky(input in "[^\\x00]{0,64}") {
        let mut lexer = Lexer::new(&input);
        while !lexer.next_token().is_end() {}
        for _ in 0..4 {
            prop_assert_eq!(lexer.next_token(), Token::EndOfInput);
            prop_assert!(!lexer.has_more_tokens());
        }
    }

    #[test]
    fn token_text_is_the_spanned_source(input in "[^\\x00]{0,128}") {
        let mut lexer = Lexer::new(&input);
        loop {
            let (token, span) = lexer.next_spanned();
            match token {
                Token::EndOfInput => break,
                Token::Illegal => {
                    prop_assert_eq!(span.len(), 1);
                },
                _ => {
                    prop_assert_eq!(token.lexeme(), input.get(span.range()));
                },
            }
        }
    }

    #[test]
    fn payloads_borrow_from_input(input in "[a-z0-9 ]{0,64}") {
        let range = input.as_ptr() as usize..input.as_ptr() as usize + input.len();
        for token in Lexer::new(&input) {
            if let Token::Identifier(text) | Token::IntegerLiteral(text) = token {
                prop_assert!(range.contains(&(text.as_ptr() as usize)));
            }
        }
    }

    #[test]
    fn letter_runs_are_one_token(input in "[a-zA-Z_]{1,50}") {
        let tokens: Vec<_> = Lexer::new(&input).collect();
        let expected = keyword_from_ident(&input).unwrap_or(Token::Identifier(&input));
        prop_assert_eq!(tokens, vec![expected]);
    }

    #[test]
    fn digit_runs_are_one_literal(input in "[0-9]{1,40}") {
        let tokens: Vec<_> = Lexer::new(&input).collect();
        prop_assert_eq!(tokens, vec![Token::IntegerLiteral(&input)]);
    }

    #[test]
    fn whitespace_does_not_change_tokens(
        words in prop::collection::vec(prop::sample::select(LEXEMES), 0..32),
        sep in "[ \\t\\r\\n]{1,4}",
    ) {
        let spaced = words.join(" ");
        let reseparated = words.join(sep.as_str());
        let a: Vec<_> = Lexer::new(&spaced).collect();
        let b: Vec<_> = Lexer::new(&reseparated).collect();
        prop_assert_eq!(a.len(), words.len());
        prop_assert_eq!(a, b);
    }
}
