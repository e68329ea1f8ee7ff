//! Core types for lexicon
//!
//! This module defines the foundational types:
//! - LineNumber: Position of a line within a corpus fragment
//! - WordAction: Add/Remove events recorded in the action log
//! - WordSource: Provenance of a dictionary word (Origin / New / Unknown)
//! - MatchSpan: Half-open character range of a matched word within a line
//!
//! Words themselves are plain `String`s. Their length is always measured in
//! characters (Unicode scalar values), never in bytes; see [`word_len`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a line within a fragment.
pub type LineNumber = usize;

/// Length of a word in characters.
///
/// Dictionary buckets and match spans are keyed by this length, so a word
/// such as `"数据"` has length 2 even though it occupies 6 bytes.
#[inline]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

// ============================================================================
// WordAction
// ============================================================================

/// A vocabulary edit as recorded in the action log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordAction {
    /// Word was added to the dictionary
    Add,
    /// Word was removed from the dictionary
    Remove,
}

impl WordAction {
    /// Symbol written to the action log for this action.
    pub fn symbol(&self) -> &'static str {
        match self {
            WordAction::Add => "+",
            WordAction::Remove => "-",
        }
    }

    /// Parse an action log symbol. Anything other than `+` or `-` is rejected.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(WordAction::Add),
            "-" => Some(WordAction::Remove),
            _ => None,
        }
    }
}

impl fmt::Display for WordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// WordSource
// ============================================================================

/// Provenance of a dictionary word.
///
/// `Origin` words come from the base vocabulary, `New` words were introduced
/// through the action log. `Unknown` is only ever reported for words that were
/// never observed; it cannot be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordSource {
    /// Present in the base vocabulary
    Origin,
    /// Added after the base vocabulary was loaded
    New,
    /// Never observed
    Unknown,
}

impl WordSource {
    /// Numeric code used by external consumers (`0`, `1`, `-1`).
    pub fn code(&self) -> i8 {
        match self {
            WordSource::Origin => 0,
            WordSource::New => 1,
            WordSource::Unknown => -1,
        }
    }

    /// Whether this value may be stored for a word.
    pub fn is_assignable(&self) -> bool {
        !matches!(self, WordSource::Unknown)
    }

    /// Reject values that may not be stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] for `Unknown`.
    pub fn ensure_assignable(self) -> Result<Self> {
        if self.is_assignable() {
            Ok(self)
        } else {
            Err(Error::InvalidSource(self.to_string()))
        }
    }
}

impl TryFrom<i8> for WordSource {
    type Error = Error;

    fn try_from(code: i8) -> Result<Self> {
        match code {
            0 => Ok(WordSource::Origin),
            1 => Ok(WordSource::New),
            -1 => Ok(WordSource::Unknown),
            other => Err(Error::InvalidSource(format!("code {}", other))),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordSource::Origin => "origin",
            WordSource::New => "new",
            WordSource::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

// ============================================================================
// MatchSpan
// ============================================================================

/// Half-open character range `[start, end)` of one matched word in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchSpan {
    /// First character offset (inclusive)
    pub start: usize,
    /// Last character offset (exclusive)
    pub end: usize,
}

impl MatchSpan {
    /// Create a new span. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} > end {}", start, end);
        MatchSpan { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if two spans share at least one character
    pub fn overlaps(&self, other: &MatchSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<(usize, usize)> for MatchSpan {
    fn from((start, end): (usize, usize)) -> Self {
        MatchSpan::new(start, end)
    }
}

impl From<MatchSpan> for (usize, usize) {
    fn from(span: MatchSpan) -> Self {
        (span.start, span.end)
    }
}

impl fmt::Display for MatchSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
