//! Durability layer for lexicon
//!
//! This crate handles everything that touches disk:
//!
//! - Action log: append-only, tab-separated record of word add/remove events
//! - Durability modes: Standard (flush every append), Always (fsync every append)
//! - Replay: rebuild the vocabulary from base words + the action log
//! - Base vocabulary loading

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action_log; // Append-only writer
pub mod error; // ActionLogError
pub mod mode; // DurabilityMode
pub mod record; // Line format
pub mod replayer; // Replay logic
pub mod vocabulary; // Base vocabulary file

// === Re-exports ===
pub use action_log::ActionLog;
pub use error::{ActionLogError, ActionLogResult};
pub use mode::DurabilityMode;
pub use record::{parse_record, ActionRecord, RecordError};
pub use replayer::{ActionReplayer, ReplayIssue, ReplayIssueKind, ReplayOutcome, ReplayStats};
pub use vocabulary::{load_base_vocabulary, parse_base_vocabulary};
