//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The lexer itself never reports anything: it hands back `Illegal` tokens
//! and lets its caller decide. Drivers use the types here to turn those
//! tokens into located, human-readable messages.
//!
//! # Examples
//!
//! ```
//! use monkc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use monkc_util::span::{SourceFile, Span};
//!
//! let file = SourceFile::new(0, "t.mk", "let a = @;");
//! let handler = Handler::new();
//! DiagnosticBuilder::error("illegal character '@'")
//!     .code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
//!     .span(Span::new(8, 9))
//!     .emit(&handler);
//!
//! let rendered = handler.diagnostics()[0].render(&file);
//! assert!(rendered.starts_with("error[E1001]: illegal character '@'"));
//! assert!(rendered.contains("--> t.mk:1:9"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{E_LEXER_ILLEGAL_CHAR, E_LEXER_INTERIOR_NUL, E_LEXER_NON_ASCII};

use crate::span::{SourceFile, Span};
use std::cell::RefCell;
use std::fmt;
use tracing::debug;

/// Diagnostic severity level
///
/// ```
/// use monkc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Input the caller refuses to accept
    Error,
    /// Suspicious input that is still processed
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`]
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic against the file its span points into
    ///
    /// Layout:
    ///
    /// ```text
    /// error[E1001]: illegal character '@'
    ///  --> t.mk:1:9
    ///   1 | let a = @;
    ///     |         ^
    ///   = help: remove the character
    /// ```
    ///
    /// When no explicit snippet was attached, one is derived from the span.
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };

        let (line, col) = file.offset_to_line_col(self.span.start);
        out.push_str(&format!(" --> {}:{}:{}\n", file.name(), line, col));

        if self.snippets.is_empty() {
            if let Some(snippet) = SourceSnippet::from_span(file, self.span) {
                out.push_str(&snippet.format());
                out.push('\n');
            }
        } else {
            for snippet in &self.snippets {
                out.push_str(&snippet.format());
                out.push('\n');
            }
        }

        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics through a shared reference and
/// provides methods for querying their counts.
///
/// # Examples
///
/// ```
/// use monkc_util::diagnostic::{Diagnostic, Handler};
/// use monkc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("illegal character", Span::new(0, 1)));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        debug!(
            level = %diagnostic.level,
            span = %diagnostic.span,
            "{}",
            diagnostic.message
        );
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Start an error diagnostic at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Start a warning diagnostic at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Snapshot of every diagnostic reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain every diagnostic reported so far
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
        assert_eq!(format!("{}", Level::Note), "note");
        assert_eq!(format!("{}", Level::Help), "help");
        assert!(Level::Error.is_error());
        assert!(!Level::Warning.is_error());
    }

    #[test]
    fn test_diagnostic_builders() {
        let diag = Diagnostic::error("test", Span::DUMMY)
            .with_code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
            .with_note("note 1")
            .with_help("help 1");
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_ILLEGAL_CHAR));
        assert_eq!(diag.notes, vec!["note 1"]);
        assert_eq!(diag.helps, vec!["help 1"]);

        let warn = Diagnostic::warning("warning message", Span::DUMMY);
        assert_eq!(warn.level, Level::Warning);
    }

    #[test]
    fn test_diagnostic_display() {
        let plain = Diagnostic::error("bad input", Span::DUMMY);
        assert_eq!(plain.to_string(), "error: bad input");

        let coded = plain.with_code(DiagnosticCode::E_LEXER_NON_ASCII);
        assert_eq!(coded.to_string(), "error[E1002]: bad input");
    }

    #[test]
    fn test_render_derives_snippet_from_span() {
        let file = SourceFile::new(0, "t.mk", "let a = 1;\nlet b = @;");
        let diag = Diagnostic::error("illegal character '@'", Span::new(19, 20))
            .with_code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
            .with_help("remove the character");

        let rendered = diag.render(&file);
        let expected = "error[E1001]: illegal character '@'\n \
                        --> t.mk:2:9\n  \
                        2 | let b = @;\n    \
                        |         ^\n  \
                        = help: remove the character\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_uses_explicit_snippets() {
        let file = SourceFile::new(0, "t.mk", "abc");
        let diag = Diagnostic::warning("w", Span::new(0, 1))
            .with_note("n");
        let diag = Diagnostic {
            snippets: vec![SourceSnippet::new("custom", 1, 1, 2, Some("lbl"))],
            ..diag
        };
        let rendered = diag.render(&file);
        assert!(rendered.contains("custom"));
        assert!(rendered.contains("^ lbl"));
        assert!(!rendered.contains("abc"));
        assert!(rendered.ends_with("  = note: n\n"));
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(handler.is_empty());
        assert!(!handler.has_errors());

        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w", Span::DUMMY));

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_take_diagnostics() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));

        let taken = handler.take_diagnostics();
        assert_eq!(taken.len(), 1);
        assert!(handler.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_handler_build_error() {
        let handler = Handler::new();
        handler
            .build_error(Span::new(3, 4), "illegal character")
            .code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].span, Span::new(3, 4));
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_ILLEGAL_CHAR));
    }

    #[test]
    fn test_handler_build_warning() {
        let handler = Handler::new();
        handler
            .build_warning(Span::DUMMY, "stream ended early")
            .code(DiagnosticCode::E_LEXER_INTERIOR_NUL)
            .emit(&handler);

        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);
    }
}
