//! Error handling module for the mkt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use monkc_util::SourceMapError;
use thiserror::Error;

/// Main error type for the mkt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of mkt commands.
#[derive(Error, Debug)]
pub enum MktError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// One or more inputs contained bytes that start no token.
    #[error("{count} illegal token(s) in {}", display_files(.files))]
    IllegalInput { count: usize, files: Vec<PathBuf> },

    /// Error raised by the interactive line editor.
    #[error("REPL error: {0}")]
    Repl(String),

    /// Error when a span cannot be resolved against its source.
    #[error("Source error: {0}")]
    SourceMap(#[from] SourceMapError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn display_files(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|f| f.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using MktError.
pub type Result<T> = std::result::Result<T, MktError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = MktError::Config("unknown variant `xml`".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown variant `xml`");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = MktError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_illegal_input_display() {
        let err = MktError::IllegalInput {
            count: 3,
            files: vec![PathBuf::from("a.mk"), PathBuf::from("b.mk")],
        };
        assert_eq!(err.to_string(), "3 illegal token(s) in a.mk, b.mk");
    }

    #[test]
    fn test_repl_error_display() {
        let err = MktError::Repl("terminal closed".to_string());
        assert_eq!(err.to_string(), "REPL error: terminal closed");
    }

    #[test]
    fn test_source_map_error_conversion() {
        let err: MktError = SourceMapError::InvalidSpan { start: 2, end: 1 }.into();
        assert!(matches!(err, MktError::SourceMap(_)));
        assert_eq!(err.to_string(), "Source error: Invalid span: start 2 > end 1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let mkt_err: MktError = io_err.into();
        assert!(matches!(mkt_err, MktError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let mkt_err: MktError = json_err.into();
        assert!(matches!(mkt_err, MktError::Json(_)));
    }
}
