//! When the fuzzy stage runs, and when it stays shut.
//!
//! Open only when the prefix stage returned fewer than 5 raw hits and the
//! query is at least 3 chars long. Both thresholds come from `SuggestConfig`.

use crate::common::words_with_prefix;
use typeahead::{NoFrequencies, SuggestConfig, SuggestionEngine};

fn fuzzy_count(engine: &SuggestionEngine, query: &str) -> usize {
    engine
        .suggest_top(query, 100, &NoFrequencies)
        .iter()
        .filter(|c| c.is_fuzzy())
        .count()
}

#[test]
fn test_four_prefix_hits_keep_gate_open() {
    let mut vocab = words_with_prefix("abc", 4);
    vocab.push("abd".to_string());
    let engine = SuggestionEngine::new(vocab);
    assert_eq!(fuzzy_count(&engine, "abc"), 1);
}

#[test]
fn test_five_prefix_hits_close_gate() {
    let mut vocab = words_with_prefix("abc", 5);
    vocab.push("abd".to_string());
    let engine = SuggestionEngine::new(vocab);
    assert_eq!(fuzzy_count(&engine, "abc"), 0);
}

#[test]
fn test_gate_counts_raw_prefix_hits_not_new_ones() {
    // The exact match is also a prefix hit; it still counts toward five
    let engine = SuggestionEngine::new(["abc", "abc0", "abc1", "abc2", "abc3", "abd"]);
    assert_eq!(fuzzy_count(&engine, "abc"), 0);
}

#[test]
fn test_three_char_query_opens_gate() {
    let engine = SuggestionEngine::new(["cat"]);
    assert_eq!(fuzzy_count(&engine, "cot"), 1);
}

#[test]
fn test_length_counts_chars_not_bytes() {
    // Two chars, four bytes: still too short
    let engine = SuggestionEngine::new(["éa"]);
    assert_eq!(fuzzy_count(&engine, "éé"), 0);
}

#[test]
fn test_configured_thresholds() {
    let config = SuggestConfig {
        fuzzy_min_query_len: 2,
        ..SuggestConfig::default()
    };
    let engine = SuggestionEngine::with_config(["xb"], config);
    assert_eq!(fuzzy_count(&engine, "ab"), 1);

    let config = SuggestConfig {
        max_edit_distance: 1,
        ..SuggestConfig::default()
    };
    let engine = SuggestionEngine::with_config(["react", "rexcx"], config);
    let results = engine.suggest("reakt", &NoFrequencies);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 0);
}
