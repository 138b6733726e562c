//! A term appears at most once, under the best stage that found it.

use crate::common::{demo_engine, tech_engine, usage};
use std::collections::HashSet;
use typeahead::{MatchCategory, NoFrequencies, SuggestionEngine};

#[test]
fn test_exact_term_not_repeated_as_prefix() {
    let engine = SuggestionEngine::new(["go", "google", "gopher"]);
    let results = engine.suggest("go", &NoFrequencies);
    let go: Vec<_> = results.iter().filter(|c| c.normalized_word == "go").collect();
    assert_eq!(go.len(), 1);
    assert_eq!(go[0].category, MatchCategory::ExactQueryMatch);
}

#[test]
fn test_prefix_term_not_repeated_as_fuzzy() {
    // "rust" is both a prefix hit and one edit from "rusr"; prefix wins
    let engine = SuggestionEngine::new(["rust", "rusrt"]);
    let results = engine.suggest("rusr", &NoFrequencies);
    let categories: Vec<_> = results.iter().map(|c| (c.word.as_str(), c.category)).collect();
    assert!(categories.contains(&("rusrt", MatchCategory::PrefixMatch)));
    assert!(categories.contains(&("rust", MatchCategory::FuzzyMatch)));
    assert_eq!(results.len(), 2);
}

#[test]
fn test_duplicate_vocabulary_entries_yield_one_candidate() {
    let engine = tech_engine();
    let results = engine.suggest("operating", &NoFrequencies);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word, "operating system");
}

#[test]
fn test_case_variants_collapse() {
    let engine = SuggestionEngine::new(["GitHub", "github", "GITHUB"]);
    for query in ["git", "github", "githib"] {
        let results = engine.suggest(query, &NoFrequencies);
        assert_eq!(results.len(), 1, "query {query:?}: {results:?}");
    }
}

#[test]
fn test_exact_reports_first_display_form() {
    let engine = SuggestionEngine::new(["GitHub", "github"]);
    let results = engine.suggest("GITHUB", &NoFrequencies);
    assert_eq!(results[0].word, "GitHub");
}

#[test]
fn test_no_duplicates_across_demo_queries() {
    let engine = demo_engine();
    let frequencies = usage(&[("python", 3), ("docker", 1)]);
    for query in ["a", "data", "pyhton", "operating", "cloud", "c", "reakt", "dokcer"] {
        let results = engine.suggest(query, &frequencies);
        let unique: HashSet<_> = results.iter().map(|c| c.normalized_word.as_str()).collect();
        assert_eq!(unique.len(), results.len(), "query {query:?} has duplicates");
    }
}
