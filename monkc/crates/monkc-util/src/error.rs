//! Core error types for monkc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Range splits a multi-byte character
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_map_error_display() {
        assert_eq!(
            SourceMapError::FileNotFound("FileId(3)".to_string()).to_string(),
            "File not found: FileId(3)"
        );
        assert_eq!(
            SourceMapError::InvalidSpan { start: 4, end: 2 }.to_string(),
            "Invalid span: start 4 > end 2"
        );
        assert_eq!(
            SourceMapError::SpanOutOfBounds {
                file_len: 3,
                span_start: 0,
                span_end: 9
            }
            .to_string(),
            "Span out of bounds: file has 3 bytes, span is 0..9"
        );
        assert_eq!(
            SourceMapError::NotCharBoundary { start: 1, end: 2 }.to_string(),
            "Span 1..2 is not on character boundaries"
        );
    }
}
