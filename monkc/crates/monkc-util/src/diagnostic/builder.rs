//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for the source line
//! excerpt printed under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Level, Span};
use crate::span::SourceFile;

/// A source code snippet for display in diagnostics
///
/// Contains the affected source line with a highlighted column range.
///
/// # Examples
///
/// ```
/// use monkc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let a = @;", 1, 9, 10, Some("here"));
/// assert!(snippet.format().contains("^ here"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Build a snippet for `span` from the file it points into
    ///
    /// Spans that cross a line break are clipped to their first line.
    /// Returns `None` if the span starts outside the file.
    ///
    /// ```
    /// use monkc_util::diagnostic::SourceSnippet;
    /// use monkc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new(0, "t.mk", "let a = 1;\nlet b = @;");
    /// let snippet = SourceSnippet::from_span(&file, Span::new(19, 20)).unwrap();
    /// assert_eq!(snippet.line, "let b = @;");
    /// assert_eq!(snippet.line_number, 2);
    /// assert_eq!(snippet.start_column, 9);
    /// ```
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        if span.start > file.content().len() {
            return None;
        }
        let (line_number, start_column) = file.offset_to_line_col(span.start);
        let line = file.line_at(line_number)?;
        let end_column = (start_column + span.len()).min(line.len() + 1);
        Some(Self {
            line: line.to_string(),
            line_number,
            start_column,
            end_column: end_column.max(start_column + 1),
            label: None,
        })
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line pointing to the
    /// highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Fluent builder for [`Diagnostic`]s
///
/// # Examples
///
/// ```
/// use monkc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Level};
/// use monkc_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("illegal character '@'")
///     .code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
///     .span(Span::new(8, 9))
///     .help("remove the character")
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Finish building without emitting
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Finish building and hand the diagnostic to `handler`
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}
