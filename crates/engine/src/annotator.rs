//! Annotator service context
//!
//! `Annotator` owns every piece of mutable state: the base vocabulary, the
//! length-bucketed dictionary, word provenance, the action log handle and the
//! reverse line index. It is built once, in a fixed order:
//!
//! 1. Base vocabulary
//! 2. Action log replay on top of it
//! 3. Dictionary and source tracker from the replayed word set
//! 4. Line index, on the first [`Annotator::match_lines`] call
//!
//! None of the owned structures synchronize internally. Front ends serving
//! concurrent requests wrap the annotator in a [`SharedAnnotator`].
//!
//! ## Edit ordering
//!
//! `add_word` and `remove_word` mutate the in-memory structures first and
//! append to the action log last. A crash between the two loses the edit on
//! restart. A failing step does not roll back earlier steps.

use crate::config::LexiconConfig;
use crate::dictionary::DictionaryStore;
use crate::line_index::LineIndex;
use crate::segmenter::{match_all, match_some, segment_line, LineMatch, MatchOutcome};
use crate::word_source::WordSourceTracker;
use lexicon_core::{LineNumber, Result, WordSource};
use lexicon_durability::{load_base_vocabulary, ActionLog};
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-step result of an add or remove edit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditOutcome {
    /// The dictionary changed (add: word admitted; remove: word was present)
    pub dictionary: bool,
    /// The source tracker changed
    pub source: bool,
    /// A record was appended to the action log
    pub logged: bool,
}

impl EditOutcome {
    /// Check if every step took effect
    pub fn is_complete(&self) -> bool {
        self.dictionary && self.source && self.logged
    }

    /// Check if no step took effect
    pub fn is_noop(&self) -> bool {
        !(self.dictionary || self.source || self.logged)
    }
}

/// Dictionary maintenance and matching service
pub struct Annotator {
    base_vocabulary: HashSet<String>,
    dictionary: DictionaryStore,
    sources: WordSourceTracker,
    action_log: ActionLog,
    line_index: LineIndex,
}

impl Annotator {
    /// Open the annotator for a data directory.
    ///
    /// A missing vocabulary file is treated as an empty base vocabulary. The
    /// action log is created if absent.
    ///
    /// # Errors
    ///
    /// I/O failures, an invalid durability mode, or a log that cannot be
    /// opened or replayed.
    pub fn open(data_dir: &Path, config: &LexiconConfig) -> Result<Self> {
        let durability_mode = config.durability_mode()?;
        let vocabulary_path = config.vocabulary_path(data_dir);
        let base_vocabulary = match load_base_vocabulary(&vocabulary_path) {
            Ok(words) => words,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    target: "lexicon::annotator",
                    path = %vocabulary_path.display(),
                    "Base vocabulary not found, starting empty"
                );
                HashSet::new()
            }
            Err(e) => return Err(e.into()),
        };
        let action_log = ActionLog::open(config.action_log_path(data_dir), durability_mode)?;
        Self::from_parts(base_vocabulary, action_log)
    }

    /// Build the annotator from an already loaded base vocabulary and an
    /// open action log. Replays the log.
    pub fn from_parts(base_vocabulary: HashSet<String>, mut action_log: ActionLog) -> Result<Self> {
        let replayed = action_log.replay(Some(&base_vocabulary))?;
        let sources = WordSourceTracker::from_replay(&replayed.words, &base_vocabulary);
        let dictionary = DictionaryStore::from_words(&replayed.words);

        info!(
            target: "lexicon::annotator",
            base_words = base_vocabulary.len(),
            words = dictionary.len(),
            new_words = sources.count(WordSource::New),
            records = replayed.stats.records_read,
            issues = replayed.issues.len(),
            "Annotator ready"
        );

        Ok(Self {
            base_vocabulary,
            dictionary,
            sources,
            action_log,
            line_index: LineIndex::new(),
        })
    }

    // ========================================================================
    // Edit pipeline
    // ========================================================================

    /// Add a word: dictionary, then source (`New` if unseen), then the log.
    ///
    /// # Errors
    ///
    /// Only a log write failure. Earlier steps stay applied.
    pub fn add_word(&mut self, word: &str) -> Result<EditOutcome> {
        let dictionary = self.dictionary.add(word);
        let source = self.sources.set_if_absent(word, WordSource::New)?;
        let logged = self.action_log.add_word(word)?;

        let outcome = EditOutcome {
            dictionary,
            source,
            logged,
        };
        debug!(target: "lexicon::annotator", word, ?outcome, "Word added");
        Ok(outcome)
    }

    /// Remove a word: dictionary, then source, then the log.
    ///
    /// The remove is logged even if the word was not present.
    ///
    /// # Errors
    ///
    /// Only a log write failure. Earlier steps stay applied.
    pub fn remove_word(&mut self, word: &str) -> Result<EditOutcome> {
        let dictionary = self.dictionary.remove(word);
        let source = self.sources.remove(word);
        let logged = self.action_log.remove_word(word)?;

        if !dictionary {
            warn!(target: "lexicon::annotator", word, "Remove of word not in dictionary");
        }

        let outcome = EditOutcome {
            dictionary,
            source,
            logged,
        };
        debug!(target: "lexicon::annotator", word, ?outcome, "Word removed");
        Ok(outcome)
    }

    /// Provenance of `word`
    pub fn word_source(&self, word: &str) -> WordSource {
        self.sources.get(word)
    }

    /// Overwrite the provenance of `word`.
    ///
    /// # Errors
    ///
    /// [`lexicon_core::Error::InvalidSource`] for `WordSource::Unknown`.
    pub fn force_source(&mut self, word: &str, source: WordSource) -> Result<()> {
        self.sources.force_set(word, source)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Segment one line against the current dictionary
    pub fn segment(&self, line: &str) -> LineMatch {
        segment_line(line, &self.dictionary)
    }

    /// Match every line and (re)initialize the line index from the result.
    pub fn match_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> MatchOutcome {
        let outcome = match_all(lines, &self.dictionary);
        self.line_index.initialize(&outcome.occurrences);
        debug!(
            target: "lexicon::annotator",
            lines = lines.len(),
            words = self.line_index.len(),
            "Line index initialized"
        );
        outcome
    }

    /// Match the requested lines and merge their occurrences into the index.
    ///
    /// # Errors
    ///
    /// [`lexicon_core::Error::LineOutOfRange`] for a line number past the
    /// end of `lines`; the index is left untouched.
    pub fn rematch_lines<S, I>(&mut self, lines: &[S], subset: I) -> Result<MatchOutcome>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = LineNumber>,
    {
        let outcome = match_some(lines, subset, &self.dictionary)?;
        self.line_index.merge_all(&outcome.occurrences);
        Ok(outcome)
    }

    /// Line numbers whose text contains `word` as a substring.
    ///
    /// These are the lines whose segmentation an edit of `word` can change.
    pub fn lines_containing<S: AsRef<str>>(lines: &[S], word: &str) -> Vec<LineNumber> {
        if word.is_empty() {
            return Vec::new();
        }
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.as_ref().contains(word))
            .map(|(line_number, _)| line_number)
            .collect()
    }

    /// Add a word, then re-match the lines that contain it.
    ///
    /// Re-matching only adds index entries. When `word` is longer than a
    /// word it now shadows on some line, the shorter word keeps listing that
    /// line even though segmentation no longer produces it there. Call
    /// [`Annotator::match_lines`] to rebuild an exact index.
    pub fn add_word_and_rematch<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        word: &str,
    ) -> Result<(EditOutcome, MatchOutcome)> {
        let edit = self.add_word(word)?;
        let affected = Self::lines_containing(lines, word);
        let outcome = self.rematch_lines(lines, affected)?;
        Ok((edit, outcome))
    }

    /// Remove a word, drop its index entry, then re-match the lines it
    /// occupied so shorter words it shadowed get indexed.
    pub fn remove_word_and_rematch<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        word: &str,
    ) -> Result<(EditOutcome, MatchOutcome)> {
        let previous: Vec<LineNumber> = self
            .line_index
            .lines(word)
            .map(|set| set.iter().copied().filter(|&l| l < lines.len()).collect())
            .unwrap_or_default();

        let edit = self.remove_word(word)?;
        if self.line_index.contains(word) {
            self.line_index.remove(word);
        }
        let outcome = self.rematch_lines(lines, previous)?;
        Ok((edit, outcome))
    }

    /// Indexed line numbers for `word`, ascending
    pub fn lines_for(&self, word: &str) -> Vec<LineNumber> {
        self.line_index.get(word)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Base vocabulary as loaded at startup
    pub fn base_vocabulary(&self) -> &HashSet<String> {
        &self.base_vocabulary
    }

    /// Current dictionary
    pub fn dictionary(&self) -> &DictionaryStore {
        &self.dictionary
    }

    /// Reverse line index
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Action log handle
    pub fn action_log(&self) -> &ActionLog {
        &self.action_log
    }

    /// Close the action log. Idempotent; later edits fail at the log step.
    pub fn close(&mut self) -> Result<()> {
        self.action_log.close()?;
        Ok(())
    }
}

// ============================================================================
// Shared handle
// ============================================================================

/// Clonable handle serializing all access to one [`Annotator`]
///
/// Uses `parking_lot::Mutex`, so a panic while holding the lock does not
/// poison it.
#[derive(Clone)]
pub struct SharedAnnotator {
    inner: Arc<Mutex<Annotator>>,
}

impl SharedAnnotator {
    /// Wrap an annotator
    pub fn new(annotator: Annotator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(annotator)),
        }
    }

    /// Open an annotator and wrap it
    pub fn open(data_dir: &Path, config: &LexiconConfig) -> Result<Self> {
        Annotator::open(data_dir, config).map(Self::new)
    }

    /// Lock for a sequence of operations
    pub fn lock(&self) -> MutexGuard<'_, Annotator> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access
    pub fn with<R>(&self, f: impl FnOnce(&mut Annotator) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`Annotator::add_word`]
    pub fn add_word(&self, word: &str) -> Result<EditOutcome> {
        self.inner.lock().add_word(word)
    }

    /// See [`Annotator::remove_word`]
    pub fn remove_word(&self, word: &str) -> Result<EditOutcome> {
        self.inner.lock().remove_word(word)
    }

    /// See [`Annotator::segment`]
    pub fn segment(&self, line: &str) -> LineMatch {
        self.inner.lock().segment(line)
    }

    /// See [`Annotator::word_source`]
    pub fn word_source(&self, word: &str) -> WordSource {
        self.inner.lock().word_source(word)
    }
}
