//! Highlighting is lossless for any word and any query.

use super::{query_strategy, unicode_word_strategy, word_strategy};
use proptest::prelude::*;
use typeahead::{coalesce, highlight_as, highlight_fuzzy, highlight_prefix, segments_text, MatchCategory};

fn any_word() -> impl Strategy<Value = String> {
    prop_oneof![word_strategy(), unicode_word_strategy(), "\\PC{0,8}"]
}

proptest! {
    #[test]
    fn prop_highlight_is_lossless(word in any_word(), query in query_strategy()) {
        for category in [MatchCategory::ExactQueryMatch, MatchCategory::PrefixMatch, MatchCategory::FuzzyMatch] {
            let segments = highlight_as(&word, category, &query);
            prop_assert_eq!(segments_text(&segments), word.clone());
        }
    }

    /// Prefix mode: three segments with the query (ignoring case) in the
    /// middle, or one plain segment when the query does not occur.
    #[test]
    fn prop_prefix_highlight_shape(word in any_word(), query in query_strategy()) {
        let segments = highlight_prefix(&word, &query);
        match segments.len() {
            3 => {
                prop_assert!(!segments[0].emphasized && segments[1].emphasized && !segments[2].emphasized);
                prop_assert_eq!(segments[1].text.chars().count(), query.trim().chars().count());
            }
            1 => prop_assert!(!segments[0].emphasized),
            n => prop_assert!(false, "unexpected segment count {}", n),
        }
    }

    /// Fuzzy mode: one segment per character of the word.
    #[test]
    fn prop_fuzzy_one_segment_per_char(word in any_word(), query in query_strategy()) {
        let segments = highlight_fuzzy(&word, &query);
        prop_assert_eq!(segments.len(), word.chars().count());
        prop_assert!(segments.iter().all(|s| s.text.chars().count() == 1));
    }

    /// Highlighting a word against itself marks nothing in fuzzy mode.
    #[test]
    fn prop_fuzzy_self_match_is_plain(word in prop_oneof![word_strategy(), unicode_word_strategy()]) {
        let segments = highlight_fuzzy(&word, &word);
        prop_assert!(segments.iter().all(|s| !s.emphasized));
    }

    #[test]
    fn prop_coalesce_preserves_text(word in any_word(), query in query_strategy()) {
        let segments = highlight_fuzzy(&word, &query);
        let merged = coalesce(segments.clone());
        prop_assert_eq!(segments_text(&merged), segments_text(&segments));
        prop_assert!(merged.iter().all(|s| !s.text.is_empty()));
    }
}
