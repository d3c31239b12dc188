/*!
 * Error types for the fonetico application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 * The transcription engine itself is total over its input and defines no
 * errors; these types cover the vocabulary-file plumbing around it.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing or editing vocabulary CSV files
#[derive(Error, Debug)]
pub enum VocabError {
    /// Error when a CSV file has no header row
    #[error("CSV file is empty or has no header row")]
    MissingHeader,

    /// Error when a quoted field is never closed
    #[error("Unterminated quoted field starting near line {line}")]
    UnterminatedQuote {
        /// 1-based line where the open quote was seen
        line: usize,
    },

    /// Error when a record carries more fields than the header
    #[error("Record on line {line} has {found} fields, header has {expected}")]
    RaggedRecord {
        /// 1-based line of the offending record
        line: usize,
        /// Number of header columns
        expected: usize,
        /// Number of fields found
        found: usize,
    },

    /// Error when a named column cannot be found
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from vocabulary CSV processing
    #[error("Vocabulary error: {0}")]
    Vocab(#[from] VocabError),

    /// Error from configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
