//! monkc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared building blocks for the Monkey front end and the tools around it:
//!
//! - [`span`] - byte-range spans, per-file line tables and the source map
//! - [`diagnostic`] - leveled, coded diagnostics and the collecting handler
//! - [`error`] - error types for the fallible operations above
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. SPANS ARE OFFSETS
//!    A [`Span`] is only a byte range. Line and column numbers are computed
//!    lazily from a [`SourceFile`], so the lexer never pays for them.
//!
//! 2. REPORTING IS THE CALLER'S JOB
//!    Nothing in the lexer emits diagnostics. Drivers inspect tokens and
//!    build [`Diagnostic`]s with the types exported here.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
