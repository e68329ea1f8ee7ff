//! Action log record format
//!
//! One record per line, three tab-separated UTF-8 fields:
//!
//! ```text
//! <sequence>\t<word>\t<symbol>\n
//! ```
//!
//! where `<symbol>` is `+` (add) or `-` (remove). The sequence column is
//! written for auditing only; replay trusts file order and never reads it.

use lexicon_core::WordAction;
use thiserror::Error;

/// Field separator within a record line
pub const FIELD_SEPARATOR: char = '\t';

/// Number of fields in a well-formed record
pub const FIELD_COUNT: usize = 3;

/// A single persisted vocabulary edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    /// Writer-assigned sequence number
    pub sequence: u64,
    /// Word the action applies to
    pub word: String,
    /// Add or remove
    pub action: WordAction,
}

impl ActionRecord {
    /// Create a new record
    pub fn new(sequence: u64, word: impl Into<String>, action: WordAction) -> Self {
        ActionRecord {
            sequence,
            word: word.into(),
            action,
        }
    }

    /// Encode as a log line, including the trailing newline
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}\n",
            self.sequence,
            self.word,
            self.action.symbol(),
            sep = FIELD_SEPARATOR
        )
    }
}

/// Why a log line could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Line did not split into exactly three fields
    #[error("expected 3 tab-separated fields, found {0}")]
    ColumnCount(usize),

    /// Action column was neither `+` nor `-`
    #[error("unknown action symbol {0:?}")]
    UnknownAction(String),

    /// Sequence column was not a non-negative integer
    #[error("invalid sequence number {0:?}")]
    InvalidSequence(String),
}

/// Split an already-trimmed line into `(sequence, word, action)`.
///
/// The sequence column is returned raw; replay ignores it, while
/// [`parse_record`] validates it.
pub(crate) fn split_fields(line: &str) -> Result<(&str, &str, WordAction), RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(RecordError::ColumnCount(fields.len()));
    }
    let action = WordAction::from_symbol(fields[2])
        .ok_or_else(|| RecordError::UnknownAction(fields[2].to_string()))?;
    Ok((fields[0], fields[1], action))
}

/// Parse a log line strictly, including the sequence column.
///
/// Surrounding whitespace (including the newline) is trimmed first.
pub fn parse_record(line: &str) -> Result<ActionRecord, RecordError> {
    let (sequence, word, action) = split_fields(line.trim())?;
    let sequence = sequence
        .parse::<u64>()
        .map_err(|_| RecordError::InvalidSequence(sequence.to_string()))?;
    Ok(ActionRecord::new(sequence, word, action))
}
