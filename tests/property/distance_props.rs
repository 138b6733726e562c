//! Edit distance: metric laws and differential checks.

use super::oracles::oracle_levenshtein;
use super::word_strategy;
use proptest::prelude::*;
use typeahead::{distance, distance_within};

proptest! {
    /// Two-row distance equals the full-matrix oracle.
    #[test]
    fn prop_distance_matches_full_matrix(a in "\\PC{0,8}", b in "\\PC{0,8}") {
        prop_assert_eq!(distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    /// On lowercase ASCII, distance equals strsim's Levenshtein.
    #[test]
    fn prop_distance_matches_strsim(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        prop_assert_eq!(distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_identity(a in "\\PC{0,10}") {
        prop_assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn prop_symmetry(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn prop_triangle_inequality(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    /// Bounded variant returns exactly the distance when within the bound.
    #[test]
    fn prop_within_agrees_with_distance(a in word_strategy(), b in word_strategy(), max in 0usize..5) {
        let d = distance(&a, &b);
        let expected = if d <= max { Some(d) } else { None };
        prop_assert_eq!(distance_within(&a, &b, max), expected);
    }

    /// Case never costs an edit.
    #[test]
    fn prop_case_insensitive(a in "[a-zA-Z]{0,10}") {
        prop_assert_eq!(distance(&a, &a.to_ascii_uppercase()), 0);
        prop_assert_eq!(distance(&a, &a.to_ascii_lowercase()), 0);
    }
}
