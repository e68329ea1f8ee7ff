//! Edit pipeline: dictionary, provenance, log and index stay in step.

use crate::common::TestData;
use lexicon::{Annotator, Corpus, WordSource};

#[test]
fn add_then_segment_uses_new_word() {
    let data = TestData::with_vocabulary(&["数据", "系统"]);
    let mut annotator = data.open();

    assert_eq!(annotator.segment("数据库系统").words, vec!["数据", "系统"]);

    let edit = annotator.add_word("数据库").unwrap();
    assert!(edit.is_complete());
    assert_eq!(annotator.segment("数据库系统").words, vec!["数据库", "系统"]);
    assert_eq!(data.read_action_log(), "0\t数据库\t+\n");
}

#[test]
fn remove_then_segment_falls_back_to_shorter_word() {
    let data = TestData::with_vocabulary(&["数据", "数据库"]);
    let mut annotator = data.open();

    annotator.remove_word("数据库").unwrap();
    let line = annotator.segment("数据库");
    assert_eq!(line.words, vec!["数据"]);
    assert_eq!(line.spans[0].end, 2);
    assert_eq!(annotator.word_source("数据库"), WordSource::Unknown);
}

#[test]
fn failed_steps_are_reported_not_raised() {
    let data = TestData::with_vocabulary(&["foo"]);
    let mut annotator = data.open();

    let edit = annotator.remove_word("bar").unwrap();
    assert!(!edit.dictionary);
    assert!(!edit.source);
    assert!(edit.logged);

    let edit = annotator.add_word("").unwrap();
    assert!(edit.is_noop());

    let edit = annotator.add_word("has\ttab").unwrap();
    assert!(edit.dictionary);
    assert!(!edit.logged);
    assert_eq!(data.read_action_log(), "0\tbar\t-\n");
}

#[test]
fn index_follows_edits_over_a_fragment() {
    let data = TestData::with_vocabulary(&["ab", "cd"]);
    data.write_corpus("ab cd\ncd\nxyab\n\nsecond fragment");
    let corpus = Corpus::load(&data.config.corpus_path(data.dir())).unwrap();
    let (fragment, _) = corpus.fragment(0);
    let lines = fragment.lines();

    let mut annotator = data.open();
    annotator.match_lines(lines);
    assert_eq!(annotator.lines_for("ab"), vec![0, 2]);
    assert_eq!(annotator.lines_for("cd"), vec![0, 1]);

    annotator.add_word_and_rematch(lines, "xyab").unwrap();
    assert_eq!(annotator.lines_for("xyab"), vec![2]);

    annotator.remove_word_and_rematch(lines, "cd").unwrap();
    assert!(annotator.lines_for("cd").is_empty());
    assert!(!annotator.line_index().contains("cd"));
    assert_eq!(annotator.lines_for("ab"), vec![0, 2]);
}

#[test]
fn lines_containing_finds_rematch_candidates() {
    let lines = ["数据库", "库存", "数据"];
    assert_eq!(Annotator::lines_containing(&lines, "数据"), vec![0, 2]);
    assert_eq!(Annotator::lines_containing(&lines, "库"), vec![0, 1]);
}

#[test]
fn index_stays_a_set_after_repeated_rematch() {
    let data = TestData::with_vocabulary(&["ab"]);
    let mut annotator = data.open();
    let lines = ["abab", "ab"];

    annotator.match_lines(&lines);
    annotator.rematch_lines(&lines, [0, 0, 1]).unwrap();
    annotator.rematch_lines(&lines, [1]).unwrap();
    assert_eq!(annotator.lines_for("ab"), vec![0, 1]);
}
