// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-stage suggestion core: exact → prefix → fuzzy.
//!
//! Stage 1 (exact) asks whether the whole query is a vocabulary term. The
//! engine keeps a folded-term → position map for this, so the answer is one
//! hash lookup. Stage 2 (prefix) walks the trie: "do" finds "docker" and
//! "devops". Stage 3 (fuzzy) scans the vocabulary with a bounded edit
//! distance: "reakt" finds "react".
//!
//! The fuzzy stage is gated. It only runs while the prefix stage came back
//! thin (fewer than `fuzzy_prefix_threshold` raw hits) and the query is long
//! enough to be worth correcting (`fuzzy_min_query_len` chars). Two-letter
//! queries are within two edits of half the vocabulary, so they never go
//! fuzzy.
//!
//! Every stage claims terms through one `CandidateCollector`, best stage
//! first, so a term shows up once under the best category it qualifies for.
//!
//! `suggest()` is pure: same vocabulary, same oracle snapshot, same query,
//! same output. It performs no I/O and never mutates the engine.

use crate::config::SuggestConfig;
use crate::frequency::FrequencyOracle;
use crate::fuzzy::distance_within;
use crate::highlight::highlight;
use crate::index::PrefixIndex;
use crate::scoring::{exact_score, fuzzy_score, prefix_score};
use crate::search::dedup::CandidateCollector;
use crate::types::{Candidate, MatchCategory, Suggestion};
use crate::util::normalize::{char_len, fold_case, normalize_query};
use std::collections::HashMap;
use tracing::debug;

/// An in-memory suggestion engine over a caller-supplied vocabulary.
///
/// # Example
///
/// ```
/// use typeahead::{frequency_table, MatchCategory, SuggestionEngine};
///
/// let engine = SuggestionEngine::new(["python", "pytorch", "react"]);
/// let usage = frequency_table([("python", 5)]);
///
/// let results = engine.suggest("python", &usage);
/// assert_eq!(results[0].word, "python");
/// assert_eq!(results[0].category, MatchCategory::ExactQueryMatch);
/// assert_eq!(results[0].score, 10_005);
/// ```
#[derive(Debug, Default)]
pub struct SuggestionEngine {
    /// Display forms in insertion order; the fuzzy stage scans this.
    vocabulary: Vec<String>,
    /// Folded term → position of its first occurrence in `vocabulary`.
    exact: HashMap<String, usize>,
    index: PrefixIndex,
    config: SuggestConfig,
}

impl SuggestionEngine {
    /// Build an engine with default settings.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(vocabulary, SuggestConfig::default())
    }

    /// Build an engine with explicit settings.
    pub fn with_config<I, S>(vocabulary: I, config: SuggestConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut engine = Self {
            config,
            ..Self::default()
        };
        for word in vocabulary {
            engine.insert(word);
        }
        debug!(
            target: "typeahead::search",
            words = engine.vocabulary.len(),
            terms = engine.index.len(),
            nodes = engine.index.node_count(),
            "engine built"
        );
        engine
    }

    /// Add a term at runtime.
    ///
    /// The term joins every stage. If its folded form already exists, the
    /// exact stage keeps reporting the earlier display form while the trie
    /// switches to this one (last write wins there).
    pub fn insert(&mut self, word: impl Into<String>) {
        let word = word.into();
        self.exact
            .entry(fold_case(&word))
            .or_insert(self.vocabulary.len());
        self.index.insert(&word);
        self.vocabulary.push(word);
    }

    /// Case-insensitive vocabulary membership.
    pub fn contains(&self, term: &str) -> bool {
        self.exact.contains_key(&normalize_query(term))
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SuggestConfig) {
        self.config = config;
    }

    /// Ranked suggestions for `query`, at most `config().cap` of them.
    pub fn suggest<O>(&self, query: &str, oracle: &O) -> Vec<Candidate>
    where
        O: FrequencyOracle + ?Sized,
    {
        self.suggest_top(query, self.config.cap, oracle)
    }

    /// Ranked suggestions for `query`, at most `cap` of them.
    pub fn suggest_top<O>(&self, query: &str, cap: usize, oracle: &O) -> Vec<Candidate>
    where
        O: FrequencyOracle + ?Sized,
    {
        let normalized = normalize_query(query);
        if normalized.is_empty() || cap == 0 {
            return Vec::new();
        }

        let exact = self
            .exact
            .get(&normalized)
            .and_then(|&pos| self.vocabulary.get(pos))
            .map(String::as_str);
        let vocabulary = self.vocabulary.iter().map(String::as_str);

        run_stages(&normalized, exact, vocabulary, &self.index, oracle, &self.config, cap)
    }

    /// `suggest` plus highlight segments for every candidate.
    pub fn suggest_highlighted<O>(&self, query: &str, oracle: &O) -> Vec<Suggestion>
    where
        O: FrequencyOracle + ?Sized,
    {
        self.suggest(query, oracle)
            .into_iter()
            .map(|candidate| {
                let segments = highlight(&candidate, query);
                Suggestion {
                    candidate,
                    segments,
                }
            })
            .collect()
    }
}

/// Stateless entry point over caller-owned parts.
///
/// `index` should have been built from `vocabulary`. The exact stage scans
/// `vocabulary` for the first folded match, so this costs O(n) more than
/// `SuggestionEngine::suggest_top`, which keeps a lookup table.
pub fn suggest_from<S, O>(
    query: &str,
    vocabulary: &[S],
    oracle: &O,
    index: &PrefixIndex,
    config: &SuggestConfig,
    cap: usize,
) -> Vec<Candidate>
where
    S: AsRef<str>,
    O: FrequencyOracle + ?Sized,
{
    let normalized = normalize_query(query);
    if normalized.is_empty() || cap == 0 {
        return Vec::new();
    }

    let exact = vocabulary
        .iter()
        .map(AsRef::as_ref)
        .find(|word| fold_case(word) == normalized);
    let words = vocabulary.iter().map(AsRef::as_ref);

    run_stages(&normalized, exact, words, index, oracle, config, cap)
}

/// Run exact, prefix and (gated) fuzzy stages, then rank and truncate.
///
/// `normalized` is the trimmed, folded query and must not be empty. `exact`
/// is the display form of the vocabulary entry equal to it, if any.
fn run_stages<'v, V, O>(
    normalized: &str,
    exact: Option<&str>,
    vocabulary: V,
    index: &PrefixIndex,
    oracle: &O,
    config: &SuggestConfig,
    cap: usize,
) -> Vec<Candidate>
where
    V: IntoIterator<Item = &'v str>,
    O: FrequencyOracle + ?Sized,
{
    let mut collector = CandidateCollector::new();

    // Stage 1: exact
    if let Some(word) = exact {
        collector.claim(Candidate {
            word: word.to_string(),
            normalized_word: normalized.to_string(),
            category: MatchCategory::ExactQueryMatch,
            score: exact_score(oracle.frequency_of(normalized), config),
            edit_distance: None,
        });
    }

    // Stage 2: prefix
    let prefix_hits = index.prefix_search(normalized);
    let raw_prefix = prefix_hits.len();
    for word in prefix_hits {
        let folded = fold_case(word);
        if collector.is_claimed(&folded) {
            continue;
        }
        let score = prefix_score(oracle.frequency_of(&folded));
        collector.claim(Candidate {
            word: word.to_string(),
            normalized_word: folded,
            category: MatchCategory::PrefixMatch,
            score,
            edit_distance: None,
        });
    }

    // Stage 3: fuzzy, gated on a thin prefix stage and a long enough query
    let fuzzy_open =
        raw_prefix < config.fuzzy_prefix_threshold && char_len(normalized) >= config.fuzzy_min_query_len;
    let mut fuzzy = 0usize;
    if fuzzy_open {
        for word in vocabulary {
            let folded = fold_case(word);
            if collector.is_claimed(&folded) {
                continue;
            }
            let Some(d) = distance_within(normalized, &folded, config.max_edit_distance) else {
                continue;
            };
            if d == 0 {
                continue;
            }
            let score = fuzzy_score(d, oracle.frequency_of(&folded), config);
            collector.claim(Candidate {
                word: word.to_string(),
                normalized_word: folded,
                category: MatchCategory::FuzzyMatch,
                score,
                edit_distance: Some(d),
            });
            fuzzy += 1;
        }
    }

    debug!(
        target: "typeahead::search",
        query = normalized,
        exact = exact.is_some(),
        prefix = raw_prefix,
        fuzzy_open,
        fuzzy,
        collected = collector.len(),
        cap,
        "suggest stages"
    );

    collector.into_ranked(cap)
}
