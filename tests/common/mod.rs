//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use typeahead::{frequency_table, Candidate, SuggestionEngine};

// Re-export canonical test utilities from typeahead::testing
pub use typeahead::testing::{make_candidate, marked_text, words_with_prefix};

// ============================================================================
// FIXTURES
// ============================================================================

/// Small hand-picked vocabulary with mixed casing and a duplicate.
pub const TECH_WORDS: &[&str] = &[
    "docker",
    "devops",
    "django",
    "Python",
    "pytorch",
    "pycharm",
    "react",
    "redis",
    "rust",
    "ruby",
    "RabbitMQ",
    "kubernetes",
    "kafka",
    "git",
    "github",
    "gitlab",
    "go",
    "google",
    "machine learning",
    "operating system",
    "operating system",
];

pub fn tech_engine() -> SuggestionEngine {
    SuggestionEngine::new(TECH_WORDS.iter().copied())
}

pub fn demo_engine() -> SuggestionEngine {
    SuggestionEngine::new(typeahead::vocabulary::demo())
}

pub fn usage(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
    frequency_table(pairs.iter().copied())
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

pub fn words(results: &[Candidate]) -> Vec<&str> {
    results.iter().map(|c| c.word.as_str()).collect()
}

/// Every candidate satisfies the per-candidate invariants.
pub fn assert_candidates_well_formed(results: &[Candidate]) {
    for c in results {
        assert_eq!(c.normalized_word, typeahead::fold_case(&c.word), "{c:?}");
        assert_eq!(c.edit_distance.is_some(), c.is_fuzzy(), "{c:?}");
    }
}
