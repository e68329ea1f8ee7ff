//! Dictionary maintenance and matching engine
//!
//! This crate builds on the core types and the action log:
//! - DictionaryStore: words grouped by character length
//! - Segmenter: forward maximum matching, single line and batch
//! - WordSourceTracker: Origin / New provenance
//! - LineIndex: word -> line numbers, patched incrementally
//! - Corpus: blank-line separated fragments of escaped text
//! - Annotator: the service context tying them together
//!
//! The annotator is the only component that knows about:
//! - Startup order (vocabulary, replay, dictionary, index)
//! - The edit pipeline (memory first, log last)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotator;
pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod line_index;
pub mod segmenter;
pub mod word_source;

pub use annotator::{Annotator, EditOutcome, SharedAnnotator};
pub use config::{LexiconConfig, CONFIG_FILE_NAME};
pub use corpus::{escape_html, Corpus, Fragment};
pub use dictionary::DictionaryStore;
pub use line_index::LineIndex;
pub use segmenter::{match_all, match_some, segment_line, LineMatch, MatchOutcome};
pub use word_source::WordSourceTracker;
