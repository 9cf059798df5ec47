//! Diagnostic codes for categorizing errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so drivers can print stable codes that users can
//! search for.
//!
//! # Examples
//!
//! ```
//! use monkc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_ILLEGAL_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// Code ranges: `1xxx` lexical analysis.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// ```
    /// use monkc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 7);
    /// assert_eq!(code.as_str(), "W0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Format as `{prefix}{number:04}`
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ANALYSIS (E1xxx)
    // =========================================================================

    /// A byte that starts no token (`@`, `#`, `$`, ...)
    pub const E_LEXER_ILLEGAL_CHAR: Self = Self::new("E", 1001);
    /// A byte outside the ASCII range
    pub const E_LEXER_NON_ASCII: Self = Self::new("E", 1002);
    /// A NUL byte inside the buffer, which ends the token stream early
    pub const E_LEXER_INTERIOR_NUL: Self = Self::new("E", 1003);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const E_LEXER_ILLEGAL_CHAR: DiagnosticCode = DiagnosticCode::E_LEXER_ILLEGAL_CHAR;
pub const E_LEXER_NON_ASCII: DiagnosticCode = DiagnosticCode::E_LEXER_NON_ASCII;
pub const E_LEXER_INTERIOR_NUL: DiagnosticCode = DiagnosticCode::E_LEXER_INTERIOR_NUL;
