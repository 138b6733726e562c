//! Category first, then score, then edit distance, then word.

use crate::common::{make_candidate, usage, words};
use typeahead::{rank, MatchCategory, NoFrequencies, SuggestionEngine};

#[test]
fn test_exact_beats_heavily_used_prefix() {
    let engine = SuggestionEngine::new(["java", "javascript"]);
    let results = engine.suggest("java", &usage(&[("javascript", 1_000_000)]));
    assert_eq!(words(&results), vec!["java", "javascript"]);
}

#[test]
fn test_prefix_beats_closer_fuzzy() {
    // "kafkas" is a prefix hit; "kafk" is a fuzzy hit at distance 1
    let engine = SuggestionEngine::new(["kafk", "kafkas"]);
    let results = engine.suggest("kafka", &usage(&[("kafk", 500)]));
    assert_eq!(results[0].category, MatchCategory::PrefixMatch);
    assert_eq!(results[1].category, MatchCategory::FuzzyMatch);
}

#[test]
fn test_fuzzy_distance_one_beats_distance_two() {
    let engine = SuggestionEngine::new(["redix", "redis"]);
    let results = engine.suggest("redxx", &NoFrequencies);
    assert_eq!(words(&results), vec!["redix", "redis"]);
    assert_eq!(results[0].edit_distance, Some(1));
    assert_eq!(results[1].edit_distance, Some(2));
}

#[test]
fn test_frequency_can_lift_distance_two_over_distance_one() {
    let engine = SuggestionEngine::new(["redix", "redis"]);
    let results = engine.suggest("redxx", &usage(&[("redis", 1_001)]));
    assert_eq!(words(&results), vec!["redis", "redix"]);
}

#[test]
fn test_equal_fuzzy_scores_prefer_fewer_edits() {
    let mut candidates = vec![
        make_candidate("aaa", MatchCategory::FuzzyMatch, 1_000, Some(2)),
        make_candidate("zzz", MatchCategory::FuzzyMatch, 1_000, Some(1)),
    ];
    rank(&mut candidates);
    assert_eq!(candidates[0].word, "zzz");
}

#[test]
fn test_final_tie_break_is_case_sensitive() {
    let mut candidates = vec![
        make_candidate("apple", MatchCategory::PrefixMatch, 0, None),
        make_candidate("Zebra", MatchCategory::PrefixMatch, 0, None),
    ];
    rank(&mut candidates);
    // Uppercase sorts before lowercase in codepoint order
    assert_eq!(candidates[0].word, "Zebra");
}

#[test]
fn test_rank_is_monotone() {
    let engine = SuggestionEngine::new(["data", "database", "data science", "datum", "date"]);
    let results = engine.suggest("dat", &usage(&[("datum", 9), ("date", 9), ("data science", 2)]));
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.category <= b.category);
        if a.category == b.category {
            assert!(a.score >= b.score, "{a:?} before {b:?}");
        }
    }
}
