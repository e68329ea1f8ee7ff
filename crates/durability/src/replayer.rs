//! Action log replay
//!
//! Reconstructs the current vocabulary by applying every logged action, in
//! file order, to a copy of the base vocabulary.
//!
//! # Replay Properties
//!
//! - **Deterministic**: Same log content and base set always produce the same words
//! - **Tolerant**: Malformed lines and removals of absent words are skipped and
//!   reported, never fatal
//! - **Ordered**: File order is temporal order; sequence numbers are not consulted
//!
//! # Usage
//!
//! ```ignore
//! let outcome = ActionReplayer::new(path).replay(Some(&base))?;
//! for issue in &outcome.issues {
//!     eprintln!("{}", issue);
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use lexicon_core::WordAction;

use crate::error::ActionLogResult;
use crate::record::{split_fields, RecordError};

/// Replay engine over one action log file
#[derive(Debug, Clone)]
pub struct ActionReplayer {
    path: PathBuf,
}

impl ActionReplayer {
    /// Create a replayer for the log at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ActionReplayer { path: path.into() }
    }

    /// Get the log path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replay the log on top of `base` (or an empty set).
    ///
    /// A missing log file replays to the base set unchanged.
    ///
    /// # Errors
    ///
    /// Only I/O failures while reading are errors. Bad records are counted in
    /// [`ReplayStats`] and listed in [`ReplayOutcome::issues`].
    pub fn replay(&self, base: Option<&HashSet<String>>) -> ActionLogResult<ReplayOutcome> {
        let mut outcome = ReplayOutcome {
            words: base.cloned().unwrap_or_default(),
            stats: ReplayStats::default(),
            issues: Vec::new(),
        };

        self.for_each_line(|line_number, line| {
            outcome.apply_line(line_number, line);
        })?;

        if outcome.stats.has_issues() {
            tracing::warn!(
                target: "lexicon::replay",
                path = %self.path.display(),
                malformed = outcome.stats.malformed_skipped,
                missing_removes = outcome.stats.missing_removes,
                "Action log replay skipped inconsistent records"
            );
        }
        tracing::debug!(
            target: "lexicon::replay",
            path = %self.path.display(),
            records = outcome.stats.records_read,
            words = outcome.words.len(),
            "Action log replayed"
        );

        Ok(outcome)
    }

    /// Highest parseable sequence number in the log, if any.
    pub fn max_sequence(&self) -> ActionLogResult<Option<u64>> {
        let mut max: Option<u64> = None;
        self.for_each_line(|_, line| {
            let Ok(line) = line else { return };
            let Ok((sequence, _, _)) = split_fields(line) else {
                return;
            };
            if let Ok(sequence) = sequence.parse::<u64>() {
                max = Some(max.map_or(sequence, |m| m.max(sequence)));
            }
        })?;
        Ok(max)
    }

    /// Visit every non-blank line, trimmed, with its 1-based line number.
    ///
    /// Lines that are not valid UTF-8 are passed as `Err(())`.
    fn for_each_line<F>(&self, mut visit: F) -> ActionLogResult<()>
    where
        F: FnMut(usize, Result<&str, ()>),
    {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            match std::str::from_utf8(&buf) {
                Ok(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        visit(line_number, Ok(text));
                    }
                }
                Err(_) => visit(line_number, Err(())),
            }
        }
        Ok(())
    }
}

/// Result of replaying an action log
#[derive(Debug, Clone, Default)]
pub struct ReplayOutcome {
    /// Resulting vocabulary
    pub words: HashSet<String>,
    /// Counters
    pub stats: ReplayStats,
    /// Every non-fatal problem encountered, in file order
    pub issues: Vec<ReplayIssue>,
}

impl ReplayOutcome {
    fn apply_line(&mut self, line_number: usize, line: Result<&str, ()>) {
        self.stats.records_read += 1;

        let line = match line {
            Ok(line) => line,
            Err(()) => {
                self.stats.malformed_skipped += 1;
                self.record_issue(line_number, ReplayIssueKind::InvalidUtf8);
                return;
            }
        };

        let (_, word, action) = match split_fields(line) {
            Ok(fields) => fields,
            Err(e) => {
                self.stats.malformed_skipped += 1;
                self.record_issue(line_number, ReplayIssueKind::Malformed(e));
                return;
            }
        };

        match action {
            WordAction::Add => {
                self.words.insert(word.to_string());
                self.stats.adds_applied += 1;
            }
            WordAction::Remove => {
                if self.words.remove(word) {
                    self.stats.removes_applied += 1;
                } else {
                    self.stats.missing_removes += 1;
                    self.record_issue(line_number, ReplayIssueKind::RemoveMissing(word.to_string()));
                }
            }
        }
    }

    fn record_issue(&mut self, line_number: usize, kind: ReplayIssueKind) {
        tracing::error!(
            target: "lexicon::replay",
            line = line_number,
            issue = %kind,
            "Skipping action log record"
        );
        self.issues.push(ReplayIssue { line_number, kind });
    }
}

/// Statistics from action log replay
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplayStats {
    /// Non-blank lines read
    pub records_read: usize,
    /// Add records applied
    pub adds_applied: usize,
    /// Remove records that deleted a word
    pub removes_applied: usize,
    /// Lines skipped because they could not be parsed
    pub malformed_skipped: usize,
    /// Remove records naming a word not in the working set
    pub missing_removes: usize,
}

impl ReplayStats {
    /// Create empty stats
    pub fn new() -> Self {
        ReplayStats::default()
    }

    /// Check if any records were applied
    pub fn has_records(&self) -> bool {
        self.adds_applied + self.removes_applied > 0
    }

    /// Check if any record was skipped or inconsistent
    pub fn has_issues(&self) -> bool {
        self.malformed_skipped + self.missing_removes > 0
    }
}

/// A non-fatal problem found during replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayIssue {
    /// 1-based line number within the log file
    pub line_number: usize,
    /// What went wrong
    pub kind: ReplayIssueKind,
}

impl fmt::Display for ReplayIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.kind)
    }
}

/// Kinds of replay problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayIssueKind {
    /// Wrong field count or unknown action symbol
    Malformed(RecordError),
    /// Line was not valid UTF-8
    InvalidUtf8,
    /// Remove of a word not present at that point of the replay
    RemoveMissing(String),
}

impl fmt::Display for ReplayIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayIssueKind::Malformed(e) => write!(f, "unknown format: {}", e),
            ReplayIssueKind::InvalidUtf8 => f.write_str("invalid UTF-8"),
            ReplayIssueKind::RemoveMissing(word) => {
                write!(f, "{:?} to be removed but not in word set", word)
            }
        }
    }
}
