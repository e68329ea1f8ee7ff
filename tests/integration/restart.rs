//! Restart: replay rebuilds the same state from vocabulary plus log.

use crate::common::{words, TestData};
use lexicon::{ActionReplayer, WordSource};
use std::io::Write;

#[test]
fn appended_word_survives_restart() {
    let data = TestData::with_vocabulary(&["foo"]);
    {
        let mut annotator = data.open();
        annotator.add_word("bar").unwrap();
    }

    let annotator = data.open();
    assert!(annotator.dictionary().contains_word("bar"));
    assert_eq!(annotator.word_source("foo"), WordSource::Origin);
    assert_eq!(annotator.word_source("bar"), WordSource::New);
    assert_eq!(annotator.word_source("baz"), WordSource::Unknown);
}

#[test]
fn replay_twice_is_identical() {
    let data = TestData::with_vocabulary(&["a", "b", "c"]);
    {
        let mut annotator = data.open();
        annotator.add_word("d").unwrap();
        annotator.remove_word("a").unwrap();
        annotator.remove_word("zz").unwrap();
        annotator.add_word("a").unwrap();
        annotator.remove_word("b").unwrap();
        annotator.close().unwrap();
    }

    let base = words(&["a", "b", "c"]);
    let replayer = ActionReplayer::new(data.action_log_path());
    let first = replayer.replay(Some(&base)).unwrap();
    let second = replayer.replay(Some(&base)).unwrap();
    assert_eq!(first.words, second.words);
    assert_eq!(first.stats, second.stats);
    assert_eq!(first.words, words(&["a", "c", "d"]));
    assert_eq!(first.stats.missing_removes, 1);

    let reopened = data.open();
    let mut dictionary: Vec<&str> = reopened.dictionary().words().collect();
    dictionary.sort_unstable();
    assert_eq!(dictionary, vec!["a", "c", "d"]);
}

#[test]
fn damaged_log_lines_are_skipped_on_open() {
    let data = TestData::with_vocabulary(&["base"]);
    std::fs::write(
        data.action_log_path(),
        "0\tgood\t+\nnot a record\n1\tbad\t*\n\n2\tbase\t-\n3\ttorn",
    )
    .unwrap();

    let annotator = data.open();
    assert!(annotator.dictionary().contains_word("good"));
    assert!(!annotator.dictionary().contains_word("bad"));
    assert!(!annotator.dictionary().contains_word("base"));
    assert_eq!(annotator.dictionary().len(), 1);
    assert_eq!(annotator.action_log().next_sequence(), 3);
}

#[test]
fn edit_after_torn_tail_survives_restart() {
    let data = TestData::new();
    std::fs::write(data.action_log_path(), "0\tkept\t+\n1\tha").unwrap();

    {
        let mut annotator = data.open();
        annotator.add_word("added").unwrap();
        annotator.close().unwrap();
    }

    assert_eq!(
        data.read_action_log(),
        "0\tkept\t+\n1\tha\n1\tadded\t+\n"
    );
    let annotator = data.open();
    assert!(annotator.dictionary().contains_word("kept"));
    assert!(annotator.dictionary().contains_word("added"));
    assert_eq!(annotator.dictionary().len(), 2);
}

#[test]
fn sequence_numbers_keep_increasing_across_restarts() {
    let data = TestData::new();
    for word in ["one", "two", "three"] {
        let mut annotator = data.open();
        annotator.add_word(word).unwrap();
        annotator.close().unwrap();
    }
    assert_eq!(
        data.read_action_log(),
        "0\tone\t+\n1\ttwo\t+\n2\tthree\t+\n"
    );
}

#[test]
fn reader_sees_flushed_append_while_writer_open() {
    let data = TestData::new();
    let mut annotator = data.open();
    annotator.add_word("live").unwrap();

    let outcome = ActionReplayer::new(data.action_log_path())
        .replay(None)
        .unwrap();
    assert!(outcome.words.contains("live"));

    // A writer that never existed can still read and extend the same file.
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(data.action_log_path())
        .unwrap();
    writeln!(file, "99\tlive\t-").unwrap();
    drop(file);
    drop(annotator);

    assert!(!data.open().dictionary().contains_word("live"));
}
