//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from a suite's main.rs.

#![allow(dead_code)]

use lexicon::{Annotator, LexiconConfig};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a word set from string literals.
pub fn words(list: &[&str]) -> HashSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Scratch data directory with the default file layout.
pub struct TestData {
    pub temp_dir: TempDir,
    pub config: LexiconConfig,
}

impl TestData {
    /// Empty data directory.
    pub fn new() -> Self {
        init_tracing();
        Self {
            temp_dir: TempDir::new().expect("temp dir"),
            config: LexiconConfig::default(),
        }
    }

    /// Data directory seeded with a base vocabulary.
    pub fn with_vocabulary(vocabulary: &[&str]) -> Self {
        let data = Self::new();
        data.write_vocabulary(vocabulary);
        data
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn action_log_path(&self) -> PathBuf {
        self.config.action_log_path(self.dir())
    }

    pub fn write_vocabulary(&self, vocabulary: &[&str]) {
        let content: String = vocabulary.iter().map(|w| format!("{}\n", w)).collect();
        std::fs::write(self.config.vocabulary_path(self.dir()), content).expect("write vocabulary");
    }

    pub fn write_corpus(&self, text: &str) {
        std::fs::write(self.config.corpus_path(self.dir()), text).expect("write corpus");
    }

    pub fn read_action_log(&self) -> String {
        std::fs::read_to_string(self.action_log_path()).unwrap_or_default()
    }

    pub fn open(&self) -> Annotator {
        Annotator::open(self.dir(), &self.config).expect("open annotator")
    }
}
