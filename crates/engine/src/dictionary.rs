//! Length-bucketed dictionary
//!
//! Words are grouped by their character length so the segmenter can probe
//! one exact-length bucket per candidate length. Buckets are kept in a
//! `BTreeMap`, which gives the segmenter its descending length order for
//! free; membership inside a bucket is a hash lookup.
//!
//! Invariants:
//! - No bucket for length 0; the empty word is never admitted
//! - A word lives only in the bucket of its own length
//! - Buckets are never empty (removing the last word drops the bucket)

use lexicon_core::word_len;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Dictionary of known words grouped by length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryStore {
    buckets: BTreeMap<usize, FxHashSet<String>>,
}

impl DictionaryStore {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a word list, skipping empty words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.add(word.as_ref());
        }
        dictionary
    }

    /// Insert a word into the bucket for its length.
    ///
    /// Returns `false` only for the empty word. Re-adding a present word is
    /// a no-op that still returns `true`.
    pub fn add(&mut self, word: &str) -> bool {
        let len = word_len(word);
        if len == 0 {
            return false;
        }
        let bucket = self.buckets.entry(len).or_default();
        if !bucket.contains(word) {
            bucket.insert(word.to_string());
        }
        true
    }

    /// Remove a word.
    ///
    /// Returns `false` if there is no bucket for the word's length or the
    /// word is not in it.
    pub fn remove(&mut self, word: &str) -> bool {
        let len = word_len(word);
        let Some(bucket) = self.buckets.get_mut(&len) else {
            return false;
        };
        if !bucket.remove(word) {
            return false;
        }
        if bucket.is_empty() {
            self.buckets.remove(&len);
        }
        true
    }

    /// Lengths of the non-empty buckets, ascending.
    pub fn lengths(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.buckets.keys().copied()
    }

    /// Exact membership test within the bucket for `length`.
    pub fn contains(&self, length: usize, word: &str) -> bool {
        self.buckets
            .get(&length)
            .is_some_and(|bucket| bucket.contains(word))
    }

    /// Membership test that derives the length from the word
    pub fn contains_word(&self, word: &str) -> bool {
        self.contains(word_len(word), word)
    }

    /// Buckets whose length is at most `max_len`, longest first.
    ///
    /// This is the candidate order used by forward maximum matching.
    pub fn buckets_up_to(
        &self,
        max_len: usize,
    ) -> impl Iterator<Item = (usize, &FxHashSet<String>)> + '_ {
        self.buckets
            .range(..=max_len)
            .rev()
            .map(|(len, bucket)| (*len, bucket))
    }

    /// Words in the bucket for `length`, if any
    pub fn bucket(&self, length: usize) -> Option<&FxHashSet<String>> {
        self.buckets.get(&length)
    }

    /// Iterate all words (bucket order, then arbitrary order within a bucket)
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.values().flatten().map(String::as_str)
    }

    /// Total number of words
    pub fn len(&self) -> usize {
        self.buckets.values().map(FxHashSet::len).sum()
    }

    /// Check if the dictionary holds no words
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Length of the longest word, or 0 when empty
    pub fn max_word_len(&self) -> usize {
        self.buckets.keys().next_back().copied().unwrap_or(0)
    }
}

impl<S: AsRef<str>> FromIterator<S> for DictionaryStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for DictionaryStore {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}
