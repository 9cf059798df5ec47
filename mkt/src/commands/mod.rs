//! Command modules for the mkt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file; `common` holds the
//! lex-and-print loop they share.

pub mod common;

pub mod config;
pub mod repl;
pub mod tokens;

// Re-export command types and functions
pub use config::{run_config, ConfigArgs};
pub use repl::{run_repl, ReplArgs};
pub use tokens::{run_tokens, TokensArgs};
