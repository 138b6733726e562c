// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! First-claim deduplication across engine stages.
//!
//! A term should appear at most once in a suggestion list. Each stage sees the
//! same vocabulary, so "python" is an exact match, a prefix match and (when the
//! gate opens) a fuzzy candidate all at once. The stages run best first and
//! the first one to claim a normalized word keeps it; later claims are
//! dropped without comparing scores.
//!
//! `CandidateCollector` keys on `normalized_word` alone. Display forms differ
//! in casing between the vocabulary list and the trie, so keying on `word`
//! would let "rabbitMQ" and "rabbitmq" both through.
//!
//! **Invariant**: no two collected candidates share a `normalized_word`.
//!
//! **Verified by**:
//! - `prop_suggest_has_no_duplicate_terms` (tests/property/suggest_props.rs)
//! - `fuzz_targets/suggest_queries.rs`

use crate::scoring::ranking::rank;
use crate::types::Candidate;
use std::collections::HashSet;

/// Accumulates candidates for one query, first claim wins.
///
/// # Example
///
/// ```ignore
/// let mut collector = CandidateCollector::new();
/// collector.claim(exact);   // kept
/// collector.claim(prefix);  // dropped if it folds to the same term
/// let ranked = collector.into_ranked(10);
/// ```
#[derive(Debug, Default)]
pub struct CandidateCollector {
    seen: HashSet<String>,
    candidates: Vec<Candidate>,
}

impl CandidateCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Has some earlier stage already claimed this folded term?
    #[inline]
    pub fn is_claimed(&self, normalized_word: &str) -> bool {
        self.seen.contains(normalized_word)
    }

    /// Keep `candidate` unless its term was already claimed.
    ///
    /// Returns whether it was kept.
    pub fn claim(&mut self, candidate: Candidate) -> bool {
        if !self.seen.insert(candidate.normalized_word.clone()) {
            return false;
        }
        self.candidates.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Rank and keep the best `cap`. A cap of zero yields nothing.
    pub fn into_ranked(self, cap: usize) -> Vec<Candidate> {
        let mut candidates = self.candidates;
        rank(&mut candidates);
        candidates.truncate(cap);
        candidates
    }
}
