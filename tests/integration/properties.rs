//! Universal properties checked over generated inputs.

use crate::common::TestData;
use lexicon::{segment_line, ActionLog, ActionReplayer, DictionaryStore, DurabilityMode, WordAction};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Spans and skipped characters tile the line exactly once.
    #[test]
    fn segmentation_tiles_line(
        line in "[xyz数]{0,20}",
        words in prop::collection::vec("[xyz数]{1,3}", 0..8),
    ) {
        let dictionary: DictionaryStore = words.iter().collect();
        let result = segment_line(&line, &dictionary);
        let length = line.chars().count();

        let mut covered = vec![false; length];
        let mut last_end = 0;
        for span in &result.spans {
            prop_assert!(span.start >= last_end);
            prop_assert!(span.end <= length);
            for slot in &mut covered[span.start..span.end] {
                prop_assert!(!*slot);
                *slot = true;
            }
            last_end = span.end;
        }
        let matched: usize = result.spans.iter().map(|s| s.len()).sum();
        prop_assert_eq!(matched, covered.iter().filter(|c| **c).count());
    }

    /// A fresh replay after any sequence of appends yields the same set as
    /// applying those edits to the base in memory.
    #[test]
    fn replay_matches_in_memory_edits(
        edits in prop::collection::vec(("[pq]{1,2}", any::<bool>()), 0..30),
    ) {
        let data = TestData::new();
        let base: HashSet<String> = ["p", "qq"].iter().map(|w| w.to_string()).collect();

        let mut expected = base.clone();
        {
            let mut log = ActionLog::open(data.action_log_path(), DurabilityMode::Standard).unwrap();
            for (word, add) in &edits {
                let action = if *add { WordAction::Add } else { WordAction::Remove };
                log.append(word, action).unwrap();
                if *add {
                    expected.insert(word.clone());
                } else {
                    expected.remove(word);
                }
            }
        }

        let replayed = ActionReplayer::new(data.action_log_path()).replay(Some(&base)).unwrap();
        prop_assert_eq!(replayed.words, expected);
    }
}
