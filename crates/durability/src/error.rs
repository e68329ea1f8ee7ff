//! Action log errors

use crate::record::RecordError;
use thiserror::Error;

/// Result type alias for action log operations
pub type ActionLogResult<T> = std::result::Result<T, ActionLogError>;

/// Action log errors
///
/// Malformed or inconsistent records found during replay are *not* errors;
/// they are reported through [`crate::ReplayStats`] and [`crate::ReplayIssue`].
#[derive(Debug, Error)]
pub enum ActionLogError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Append attempted after `close()`
    #[error("Action log is closed")]
    Closed,

    /// Strict record parse failure
    #[error("Malformed record: {0}")]
    Malformed(#[from] RecordError),
}

impl From<ActionLogError> for lexicon_core::Error {
    fn from(e: ActionLogError) -> Self {
        match e {
            ActionLogError::Io(io) => lexicon_core::Error::Io(io),
            ActionLogError::Closed => lexicon_core::Error::LogClosed,
            ActionLogError::Malformed(e) => lexicon_core::Error::Durability(e.to_string()),
        }
    }
}
