//! Common types and utilities for mkt commands.
//!
//! Both `tokens` and `repl` lex a [`SourceFile`] and print one line per
//! token. The shared pieces live here: token formatting, illegal-byte
//! diagnostics and the lex-and-print loop itself.

use std::io::Write;

use monkc_lex::{Lexer, Token};
use monkc_util::diagnostic::{E_LEXER_ILLEGAL_CHAR, E_LEXER_INTERIOR_NUL, E_LEXER_NON_ASCII};
use monkc_util::{Handler, SourceFile, Span};
use serde::Serialize;
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::Result;

/// How a token stream is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Line format.
    pub format: OutputFormat,
    /// Prefix each token with `line:col`.
    pub spans: bool,
}

/// Counters for one lexed source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens printed, end of input excluded.
    pub tokens: usize,
    /// Illegal tokens among them.
    pub illegal: usize,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    lexeme: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

/// Format one token as an output line (without the newline).
///
/// `location` is the 1-based `(line, column)` of the token start and is
/// printed only when present.
pub fn format_token(
    token: &Token<'_>,
    location: Option<(usize, usize)>,
    format: OutputFormat,
) -> Result<String> {
    let body = match format {
        OutputFormat::Plain => format!("{}\t{}", token.name(), token),
        OutputFormat::Debug => format!("{:?}", token),
        OutputFormat::Json => {
            let record = TokenRecord {
                kind: token.name(),
                lexeme: token.lexeme(),
                line: location.map(|(line, _)| line),
                column: location.map(|(_, column)| column),
            };
            return Ok(serde_json::to_string(&record)?);
        },
    };

    Ok(match location {
        Some((line, column)) => format!("{}:{}\t{}", line, column, body),
        None => body,
    })
}

/// Render a byte for a message: `'@'` when printable, `\xNN` otherwise.
pub fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("\\x{:02X}", byte)
    }
}

/// Report an illegal token at `span` to `handler`.
fn report_illegal(file: &SourceFile, span: Span, handler: &Handler) {
    let Some(byte) = file.byte_at(span.start) else {
        return;
    };

    let builder = if byte.is_ascii() {
        handler
            .build_error(span, format!("illegal character {}", describe_byte(byte)))
            .code(E_LEXER_ILLEGAL_CHAR)
            .help("Monkey has no token starting with this character")
    } else {
        handler
            .build_error(span, format!("non-ASCII byte {}", describe_byte(byte)))
            .code(E_LEXER_NON_ASCII)
            .note("each byte of a multi-byte character is lexed separately")
    };
    builder.emit(handler);
}

/// Lex `file`, print every token to `out` and report problems to
/// `handler`.
///
/// A NUL byte inside the file makes the lexer return end of input early;
/// this is reported as a warning and lexing resumes after it.
pub fn lex_and_print(
    file: &SourceFile,
    options: PrintOptions,
    out: &mut impl Write,
    handler: &Handler,
) -> Result<LexSummary> {
    let source = file.content();
    let mut lexer = Lexer::new(source);
    let mut summary = LexSummary::default();

    loop {
        let (token, span) = lexer.next_spanned();
        let span = span.with_file_id(file.id());

        if token.is_end() {
            if span.start < source.len() {
                handler
                    .build_warning(span, "NUL byte inside source")
                    .code(E_LEXER_INTERIOR_NUL)
                    .note("the token stream ends here; lexing resumes after it")
                    .emit(handler);
                continue;
            }
            break;
        }

        if token == Token::Illegal {
            summary.illegal += 1;
            report_illegal(file, span, handler);
        }

        let location = options
            .spans
            .then(|| file.offset_to_line_col(span.start));
        writeln!(out, "{}", format_token(&token, location, options.format)?)?;
        summary.tokens += 1;
    }

    debug!(
        file = file.name(),
        tokens = summary.tokens,
        illegal = summary.illegal,
        "lexed source"
    );
    Ok(summary)
}
