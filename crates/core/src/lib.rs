//! Core types for lexicon
//!
//! This crate defines the foundational types used throughout the system:
//! - WordAction: Add/Remove events persisted in the action log
//! - WordSource: Word provenance (Origin / New / Unknown)
//! - MatchSpan: Half-open character range of a matched word
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{word_len, LineNumber, MatchSpan, WordAction, WordSource};
