//! Base vocabulary loading
//!
//! The base vocabulary is a UTF-8 text file with one word per line. Lines are
//! trimmed and blank lines skipped; order and duplicates do not matter.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the base vocabulary file at `path`.
pub fn load_base_vocabulary(path: &Path) -> std::io::Result<HashSet<String>> {
    let file = File::open(path)?;
    let words = parse_base_vocabulary(BufReader::new(file))?;
    tracing::info!(
        target: "lexicon::durability",
        path = %path.display(),
        words = words.len(),
        "Base vocabulary loaded"
    );
    Ok(words)
}

/// Parse a base vocabulary from any buffered reader.
pub fn parse_base_vocabulary<R: BufRead>(reader: R) -> std::io::Result<HashSet<String>> {
    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words.insert(word.to_string());
    }
    Ok(words)
}
