//! Error types for rowcheck.
//!
//! Two error classes never mix:
//!
//! - [`ParseError`] - the source could not be opened or read. Returned as the
//!   `Err` side of every parse call.
//! - [`crate::validation::ValidationError`] - a row was rejected by its schema.
//!   Carried inside [`crate::parser::ParseOutcome::Error`], never as `Err`.
//!
//! [`SchemaError`] covers building a schema (bad JSON Schema document,
//! unreadable schema file) before any parsing starts.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Resource Errors
// =============================================================================

/// The line source failed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source could not be opened (missing file, permission denied).
    #[error("Cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read (stream failure, invalid UTF-8).
    #[error("Cannot read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Schema Construction Errors
// =============================================================================

/// A schema could not be built.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The JSON Schema document is not a valid draft 7 schema.
    #[error("Invalid JSON schema: {0}")]
    InvalidSchema(String),

    /// The schema file is not valid JSON.
    #[error("Schema JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The schema file could not be read.
    #[error("Schema IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_names_path() {
        let err = ParseError::Open {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_read_error_names_line() {
        let err = ParseError::Read {
            line: 7,
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ),
        };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_schema_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SchemaError = json_err.into();
        assert!(err.to_string().starts_with("Schema JSON error"));
    }
}
