//! Forward maximum matching
//!
//! Greedy left-to-right segmentation against a [`DictionaryStore`]. At each
//! cursor position the longest dictionary word starting there wins; shorter
//! candidates at the same position are never tried once a longer one hits.
//! Characters that start no dictionary word are skipped one at a time.
//!
//! Offsets in [`MatchSpan`]s are character offsets, not byte offsets.
//!
//! Batch helpers:
//! - [`match_all`]: every line, line number = position in the slice
//! - [`match_some`]: only the requested line numbers
//!
//! Both return the raw occurrence log: a word matched twice on one line
//! contributes that line number twice. Deduplication happens in
//! [`crate::LineIndex`], not here.

use crate::dictionary::DictionaryStore;
use lexicon_core::{Error, LineNumber, MatchSpan, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Segmentation result for a single line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// Matched spans, left to right, non-overlapping
    pub spans: Vec<MatchSpan>,
    /// Matched words, parallel to `spans`
    pub words: Vec<String>,
}

impl LineMatch {
    /// Number of matched words
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate `(span, word)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (MatchSpan, &str)> + '_ {
        self.spans
            .iter()
            .copied()
            .zip(self.words.iter().map(String::as_str))
    }
}

/// Segment one line.
///
/// # Example
///
/// ```
/// use lexicon_engine::{segment_line, DictionaryStore};
///
/// let dictionary = DictionaryStore::from_words(["ab", "abc", "c"]);
/// let result = segment_line("abc", &dictionary);
/// assert_eq!(result.words, vec!["abc"]);
/// ```
pub fn segment_line(line: &str, dictionary: &DictionaryStore) -> LineMatch {
    // Byte offset of every char boundary, including the end of the line.
    let boundaries: Vec<usize> = line
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    let mut result = LineMatch::default();
    let mut pos = 0;

    while pos < char_count {
        let remaining = char_count - pos;
        let start = boundaries[pos];

        let hit = dictionary.buckets_up_to(remaining).find_map(|(len, bucket)| {
            let token = &line[start..boundaries[pos + len]];
            bucket.contains(token).then_some((len, token))
        });

        match hit {
            Some((len, token)) => {
                result.spans.push(MatchSpan::new(pos, pos + len));
                result.words.push(token.to_string());
                pos += len;
            }
            None => pos += 1,
        }
    }

    result
}

/// Result of matching several lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    /// Spans per processed line; every processed line has an entry, even
    /// when it matched nothing
    pub lines: BTreeMap<LineNumber, Vec<MatchSpan>>,
    /// Word -> line number of every occurrence, in scan order
    pub occurrences: HashMap<String, Vec<LineNumber>>,
}

impl MatchOutcome {
    fn record(&mut self, line_number: LineNumber, line_match: LineMatch) {
        for word in line_match.words {
            self.occurrences.entry(word).or_default().push(line_number);
        }
        self.lines.insert(line_number, line_match.spans);
    }

    /// Check if `line_number` was processed
    pub fn was_processed(&self, line_number: LineNumber) -> bool {
        self.lines.contains_key(&line_number)
    }

    /// Spans for a processed line
    pub fn spans(&self, line_number: LineNumber) -> Option<&[MatchSpan]> {
        self.lines.get(&line_number).map(Vec::as_slice)
    }

    /// Total number of matched words across all processed lines
    pub fn total_matches(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }
}

/// Segment every line. Line numbers are slice positions.
pub fn match_all<S: AsRef<str>>(lines: &[S], dictionary: &DictionaryStore) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for (line_number, line) in lines.iter().enumerate() {
        outcome.record(line_number, segment_line(line.as_ref(), dictionary));
    }
    outcome
}

/// Segment only the requested lines.
///
/// Lines are processed in the order given. A line requested twice is
/// segmented twice, so its occurrences appear twice in the raw log.
///
/// # Errors
///
/// [`Error::LineOutOfRange`] if any requested line number is not a valid
/// index into `lines`. Nothing is matched in that case.
pub fn match_some<S, I>(lines: &[S], subset: I, dictionary: &DictionaryStore) -> Result<MatchOutcome>
where
    S: AsRef<str>,
    I: IntoIterator<Item = LineNumber>,
{
    let subset: Vec<LineNumber> = subset.into_iter().collect();
    if let Some(&line) = subset.iter().find(|&&line| line >= lines.len()) {
        return Err(Error::LineOutOfRange {
            line,
            total: lines.len(),
        });
    }

    let mut outcome = MatchOutcome::default();
    for line_number in subset {
        let line = lines[line_number].as_ref();
        outcome.record(line_number, segment_line(line, dictionary));
    }
    Ok(outcome)
}
