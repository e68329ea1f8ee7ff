//! Lexicon - dictionary maintenance and forward maximum matching
//!
//! Lexicon keeps a domain vocabulary (a base word list plus an append-only
//! log of add/remove edits), segments text lines against it by
//! longest-match-first, and maintains a reverse index from matched words to
//! the lines they occur on.
//!
//! # Quick Start
//!
//! ```ignore
//! use lexicon::{Annotator, LexiconConfig};
//!
//! let config = LexiconConfig::load_or_create(data_dir)?;
//! let mut annotator = Annotator::open(data_dir, &config)?;
//!
//! annotator.add_word("数据库")?;
//! let line = annotator.segment("分布式数据库系统");
//! ```
//!
//! # Architecture
//!
//! - `lexicon-core`: shared types and the error type
//! - `lexicon-durability`: action log writer, replay, vocabulary loading
//! - `lexicon-engine`: dictionary, segmenter, indexes and the [`Annotator`]

pub use lexicon_core::{word_len, Error, LineNumber, MatchSpan, Result, WordAction, WordSource};
pub use lexicon_durability::{
    load_base_vocabulary, ActionLog, ActionReplayer, DurabilityMode, ReplayIssue, ReplayIssueKind,
    ReplayOutcome, ReplayStats,
};
pub use lexicon_engine::{
    escape_html, match_all, match_some, segment_line, Annotator, Corpus, DictionaryStore,
    EditOutcome, Fragment, LexiconConfig, LineIndex, LineMatch, MatchOutcome, SharedAnnotator,
    WordSourceTracker, CONFIG_FILE_NAME,
};
