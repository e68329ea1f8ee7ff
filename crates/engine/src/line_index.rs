//! Reverse index from matched word to line numbers
//!
//! Built from the raw occurrence log of an initial full match, then patched
//! as lines are re-matched or words are removed. Unlike the raw log, each
//! entry is a set: a word occurring three times on line 4 is recorded once.
//!
//! The index is uninitialized until [`LineIndex::initialize`] runs. Patching
//! or querying before that is a no-op that logs an error.

use lexicon_core::LineNumber;
use rustc_hash::FxHashMap;
use std::collections::{BTreeSet, HashMap};

/// Word -> set of line numbers
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    /// `None` until the initial full match has been loaded
    entries: Option<FxHashMap<String, BTreeSet<LineNumber>>>,
}

impl LineIndex {
    /// Create an uninitialized index
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole index with the result of a full match.
    pub fn initialize(&mut self, occurrences: &HashMap<String, Vec<LineNumber>>) {
        let entries = occurrences
            .iter()
            .map(|(word, lines)| (word.clone(), lines.iter().copied().collect()))
            .collect();
        self.entries = Some(entries);
    }

    /// Check if [`LineIndex::initialize`] has run
    pub fn is_initialized(&self) -> bool {
        self.entries.is_some()
    }

    /// Union `lines` into the entry for `word`, creating it if needed.
    ///
    /// Returns `false` (and logs) if the index is uninitialized.
    pub fn merge<I>(&mut self, word: &str, lines: I) -> bool
    where
        I: IntoIterator<Item = LineNumber>,
    {
        let Some(entries) = self.entries.as_mut() else {
            tracing::error!(
                target: "lexicon::index",
                word,
                "Line index merge before initialization"
            );
            return false;
        };
        match entries.get_mut(word) {
            Some(existing) => existing.extend(lines),
            None => {
                entries.insert(word.to_string(), lines.into_iter().collect());
            }
        }
        true
    }

    /// Merge every word of a raw occurrence log.
    ///
    /// Returns `false` (and logs once) if the index is uninitialized.
    pub fn merge_all(&mut self, occurrences: &HashMap<String, Vec<LineNumber>>) -> bool {
        if !self.is_initialized() {
            tracing::error!(
                target: "lexicon::index",
                words = occurrences.len(),
                "Line index merge before initialization"
            );
            return false;
        }
        for (word, lines) in occurrences {
            self.merge(word, lines.iter().copied());
        }
        true
    }

    /// Delete the entry for `word`.
    ///
    /// Returns `false` (and logs) if the index is uninitialized or has no
    /// entry for the word.
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self
            .entries
            .as_mut()
            .is_some_and(|entries| entries.remove(word).is_some());
        if !removed {
            tracing::error!(
                target: "lexicon::index",
                word,
                initialized = self.is_initialized(),
                "Line index remove of missing word"
            );
        }
        removed
    }

    /// Line numbers for `word`, ascending.
    ///
    /// Returns an empty list (and logs) if the index is uninitialized or has
    /// no entry for the word.
    pub fn get(&self, word: &str) -> Vec<LineNumber> {
        match self.lines(word) {
            Some(lines) => lines.iter().copied().collect(),
            None => {
                tracing::error!(
                    target: "lexicon::index",
                    word,
                    initialized = self.is_initialized(),
                    "Line index lookup of missing word"
                );
                Vec::new()
            }
        }
    }

    /// Entry for `word` without logging on a miss
    pub fn lines(&self, word: &str) -> Option<&BTreeSet<LineNumber>> {
        self.entries.as_ref()?.get(word)
    }

    /// Check if `word` has an entry
    pub fn contains(&self, word: &str) -> bool {
        self.lines(word).is_some()
    }

    /// Number of indexed words (0 when uninitialized)
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, FxHashMap::len)
    }

    /// Check if no word is indexed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
