//! Word provenance tracking
//!
//! Classifies each word as `Origin` (from the base vocabulary) or `New`
//! (introduced through the action log). The first classification written for
//! a word sticks; only [`WordSourceTracker::force_set`] can overwrite it.

use lexicon_core::{Result, WordSource};
use rustc_hash::FxHashMap;
use std::collections::HashSet;

/// Per-word provenance map
#[derive(Debug, Clone, Default)]
pub struct WordSourceTracker {
    sources: FxHashMap<String, WordSource>,
}

impl WordSourceTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify replayed words: `Origin` if in `base`, else `New`.
    pub fn from_replay(words: &HashSet<String>, base: &HashSet<String>) -> Self {
        let mut tracker = Self::new();
        for word in words.iter().filter(|w| !w.is_empty()) {
            let source = if base.contains(word) {
                WordSource::Origin
            } else {
                WordSource::New
            };
            tracker.sources.insert(word.clone(), source);
        }
        tracker
    }

    /// Set the source only if the word has none yet.
    ///
    /// Returns `Ok(true)` if something was stored. The empty word is never
    /// stored.
    ///
    /// # Errors
    ///
    /// [`lexicon_core::Error::InvalidSource`] when `source` is `Unknown`.
    pub fn set_if_absent(&mut self, word: &str, source: WordSource) -> Result<bool> {
        let source = source.ensure_assignable()?;
        if word.is_empty() || self.sources.contains_key(word) {
            return Ok(false);
        }
        self.sources.insert(word.to_string(), source);
        Ok(true)
    }

    /// Overwrite the source unconditionally.
    ///
    /// # Errors
    ///
    /// [`lexicon_core::Error::InvalidSource`] when `source` is `Unknown`.
    pub fn force_set(&mut self, word: &str, source: WordSource) -> Result<()> {
        let source = source.ensure_assignable()?;
        if !word.is_empty() {
            self.sources.insert(word.to_string(), source);
        }
        Ok(())
    }

    /// Forget a word. Returns `false` if it had no entry.
    pub fn remove(&mut self, word: &str) -> bool {
        self.sources.remove(word).is_some()
    }

    /// Source of `word`, `Unknown` if never observed
    pub fn get(&self, word: &str) -> WordSource {
        self.sources.get(word).copied().unwrap_or(WordSource::Unknown)
    }

    /// Number of words with the given source
    pub fn count(&self, source: WordSource) -> usize {
        self.sources.values().filter(|s| **s == source).count()
    }

    /// Number of tracked words
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if no word is tracked
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
