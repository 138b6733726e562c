//! End-to-end suggestion scenarios against small fixed vocabularies.

use crate::common::{assert_candidates_well_formed, tech_engine, usage, words, words_with_prefix};
use typeahead::{MatchCategory, NoFrequencies, SuggestionEngine};

#[test]
fn test_exact_match_first_with_bonus() {
    let engine = tech_engine();
    let results = engine.suggest("python", &usage(&[("python", 5)]));

    assert_eq!(results[0].word, "Python");
    assert_eq!(results[0].normalized_word, "python");
    assert_eq!(results[0].category, MatchCategory::ExactQueryMatch);
    assert_eq!(results[0].score, 10_005);
    assert_candidates_well_formed(&results);
}

#[test]
fn test_prefix_single_letter_returns_both() {
    let engine = SuggestionEngine::new(["docker", "devops"]);

    // Equal frequency: lexicographic
    let results = engine.suggest("d", &NoFrequencies);
    assert_eq!(words(&results), vec!["devops", "docker"]);
    assert!(results.iter().all(|c| c.category == MatchCategory::PrefixMatch));

    // Frequency dominates the word order
    let results = engine.suggest("d", &usage(&[("docker", 2)]));
    assert_eq!(words(&results), vec!["docker", "devops"]);
}

#[test]
fn test_prefix_two_letters_narrows() {
    let engine = SuggestionEngine::new(["docker", "devops"]);
    let results = engine.suggest("do", &NoFrequencies);
    assert_eq!(words(&results), vec!["docker"]);
}

#[test]
fn test_short_query_skips_fuzzy_even_with_close_words() {
    // "xb" and "ac" are one edit from "ab" but share no prefix with it
    let engine = SuggestionEngine::new(["xb", "ac"]);
    assert!(engine.suggest("ab", &NoFrequencies).is_empty());
}

#[test]
fn test_fuzzy_within_bound() {
    let engine = SuggestionEngine::new(["react"]);
    let results = engine.suggest("reakt", &NoFrequencies);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, MatchCategory::FuzzyMatch);
    assert_eq!(results[0].edit_distance, Some(1));

    assert!(engine.suggest("xxxxx", &NoFrequencies).is_empty());
}

#[test]
fn test_fuzzy_distance_two_scores_frequency_only() {
    let engine = SuggestionEngine::new(["kafka"]);
    let results = engine.suggest("kavko", &usage(&[("kafka", 4)]));
    assert_eq!(results[0].edit_distance, Some(2));
    assert_eq!(results[0].score, 4);
}

#[test]
fn test_cap_of_ten_from_twenty() {
    let engine = SuggestionEngine::new(words_with_prefix("a", 20));
    let results = engine.suggest("a", &NoFrequencies);
    assert_eq!(results.len(), 10);
    // Ties broken by word, so the first ten in order survive
    assert_eq!(results[0].word, "a00");
    assert_eq!(results[9].word, "a09");
}

#[test]
fn test_explicit_caps() {
    let engine = SuggestionEngine::new(words_with_prefix("a", 20));
    assert!(engine.suggest_top("a", 0, &NoFrequencies).is_empty());
    assert_eq!(engine.suggest_top("a", 1, &NoFrequencies).len(), 1);
    assert_eq!(engine.suggest_top("a", 50, &NoFrequencies).len(), 20);
}

#[test]
fn test_whitespace_and_case_are_ignored() {
    let engine = tech_engine();
    let results = engine.suggest("\t RABBIT ", &NoFrequencies);
    assert_eq!(words(&results), vec!["RabbitMQ"]);
}

#[test]
fn test_multi_word_terms_complete() {
    let engine = tech_engine();
    let results = engine.suggest("machine l", &NoFrequencies);
    assert_eq!(words(&results), vec!["machine learning"]);
}

#[test]
fn test_unknown_prefix_without_close_words_is_empty() {
    let engine = tech_engine();
    assert!(engine.suggest("zzzzzz", &NoFrequencies).is_empty());
}

#[test]
fn test_runtime_insert_participates_in_every_stage() {
    let mut engine = tech_engine();
    engine.insert("Zig");

    assert_eq!(engine.suggest("zig", &NoFrequencies)[0].category, MatchCategory::ExactQueryMatch);
    assert_eq!(engine.suggest("zi", &NoFrequencies)[0].category, MatchCategory::PrefixMatch);
    let fuzzy = engine.suggest("zog", &NoFrequencies);
    assert!(fuzzy.iter().any(|c| c.word == "Zig" && c.edit_distance == Some(1)));
}
