//! Engine-level invariants over random vocabularies and queries.

use super::oracles::oracle_candidate_terms;
use super::{frequencies_strategy, query_strategy, vocabulary_strategy};
use crate::common::assert_candidates_well_formed;
use proptest::prelude::*;
use std::collections::HashSet;
use typeahead::{
    compare_candidates, frequency_table, highlight, segments_text, suggest_from, MatchCategory,
    NoFrequencies, PrefixIndex, SuggestConfig, SuggestionEngine,
};

proptest! {
    #[test]
    fn prop_suggest_has_no_duplicate_terms(vocab in vocabulary_strategy(), query in query_strategy()) {
        let engine = SuggestionEngine::new(vocab);
        let results = engine.suggest_top(&query, 100, &NoFrequencies);
        let unique: HashSet<_> = results.iter().map(|c| c.normalized_word.as_str()).collect();
        prop_assert_eq!(unique.len(), results.len());
        assert_candidates_well_formed(&results);
    }

    /// Uncapped output is exactly the oracle's candidate set.
    #[test]
    fn prop_suggest_matches_oracle_terms(vocab in vocabulary_strategy(), query in query_strategy()) {
        let engine = SuggestionEngine::new(vocab.clone());
        let results = engine.suggest_top(&query, usize::MAX, &NoFrequencies);
        let terms: HashSet<String> = results.into_iter().map(|c| c.normalized_word).collect();
        prop_assert_eq!(terms, oracle_candidate_terms(&vocab, &query));
    }

    #[test]
    fn prop_results_are_sorted(
        vocab in vocabulary_strategy(),
        query in query_strategy(),
        freqs in frequencies_strategy(),
    ) {
        let engine = SuggestionEngine::new(vocab);
        let table = frequency_table(freqs);
        let results = engine.suggest_top(&query, 100, &table);
        for pair in results.windows(2) {
            prop_assert_ne!(compare_candidates(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
        }
    }

    /// Capped output is the prefix of the uncapped output.
    #[test]
    fn prop_cap_truncates_ranked_list(
        vocab in vocabulary_strategy(),
        query in query_strategy(),
        cap in 0usize..12,
    ) {
        let engine = SuggestionEngine::new(vocab);
        let all = engine.suggest_top(&query, usize::MAX, &NoFrequencies);
        let capped = engine.suggest_top(&query, cap, &NoFrequencies);
        prop_assert_eq!(capped.len(), all.len().min(cap));
        prop_assert_eq!(&capped[..], &all[..capped.len()]);
    }

    #[test]
    fn prop_suggest_highlights_are_lossless(vocab in vocabulary_strategy(), query in query_strategy()) {
        let engine = SuggestionEngine::new(vocab);
        for candidate in engine.suggest_top(&query, 100, &NoFrequencies) {
            prop_assert_eq!(segments_text(&highlight(&candidate, &query)), candidate.word.clone());
        }
    }

    /// Fuzzy candidates are within the bound, never at distance zero, and
    /// score exactly (2 - d) * 1000 + frequency.
    #[test]
    fn prop_fuzzy_scores_follow_formula(
        vocab in vocabulary_strategy(),
        query in query_strategy(),
        freqs in frequencies_strategy(),
    ) {
        let engine = SuggestionEngine::new(vocab);
        let table = frequency_table(freqs);
        for c in engine.suggest_top(&query, 100, &table) {
            let freq = table.get(&c.normalized_word).copied().unwrap_or(0) as i64;
            match c.category {
                MatchCategory::ExactQueryMatch => prop_assert_eq!(c.score, freq + 10_000),
                MatchCategory::PrefixMatch => prop_assert_eq!(c.score, freq),
                MatchCategory::FuzzyMatch => {
                    let d = c.edit_distance.unwrap();
                    prop_assert!((1..=2).contains(&d));
                    prop_assert_eq!(c.score, (2 - d as i64) * 1_000 + freq);
                }
            }
        }
    }

    /// The free function and the engine agree.
    #[test]
    fn prop_suggest_from_matches_engine(vocab in vocabulary_strategy(), query in query_strategy()) {
        let engine = SuggestionEngine::new(vocab.clone());
        let index = PrefixIndex::from_words(&vocab);
        let config = SuggestConfig::default();
        prop_assert_eq!(
            suggest_from(&query, &vocab, &NoFrequencies, &index, &config, 10),
            engine.suggest(&query, &NoFrequencies)
        );
    }
}
