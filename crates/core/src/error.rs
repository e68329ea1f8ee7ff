//! Error types for lexicon
//!
//! This module defines the error type shared by the engine-facing API.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Ordinary "nothing happened" outcomes (empty word, word not present) are
//! reported as `false` returns, not errors. Errors are reserved for I/O
//! failures, bad configuration, and caller contract violations.

use std::io;
use thiserror::Error;

/// Result type alias for lexicon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lexicon
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (vocabulary, corpus or config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A word source that may not be stored was supplied.
    ///
    /// This is a caller bug, not bad external data.
    #[error("Invalid word source: {0}")]
    InvalidSource(String),

    /// A requested line number is outside the supplied lines
    #[error("Line {line} out of range ({total} lines)")]
    LineOutOfRange {
        /// Requested line number
        line: usize,
        /// Number of lines available
        total: usize,
    },

    /// Invalid input (configuration values, parse failures)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An edit was logged after the action log was closed
    #[error("Action log is closed")]
    LogClosed,

    /// Other action log failure
    #[error("Durability error: {0}")]
    Durability(String),
}

impl Error {
    /// Create an invalid input error from a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Check if this error indicates a caller contract violation
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::InvalidSource(_))
    }
}
