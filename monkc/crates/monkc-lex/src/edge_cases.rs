//! Edge case tests for monkc-lex
