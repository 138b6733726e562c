// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Usage frequency as an injected, read-only capability.
//!
//! The engine never owns usage counts. The caller hands it something that
//! answers "how often was this term picked?" for the duration of one
//! `suggest()` call; the engine only reads. Counts change strictly after the
//! caller has chosen a candidate, so a ranking pass always sees one snapshot.
//!
//! Keys are case-folded terms. Anything unknown counts as zero.

use crate::error::{Result, TypeaheadError};
use crate::util::normalize::fold_case;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::Path;

/// Read-only usage counts keyed by case-folded term.
pub trait FrequencyOracle {
    /// Usage count for `normalized_term`; 0 when the term was never used.
    fn frequency_of(&self, normalized_term: &str) -> u64;
}

/// Every term has frequency 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFrequencies;

impl FrequencyOracle for NoFrequencies {
    fn frequency_of(&self, _normalized_term: &str) -> u64 {
        0
    }
}

impl<S: BuildHasher> FrequencyOracle for HashMap<String, u64, S> {
    fn frequency_of(&self, normalized_term: &str) -> u64 {
        self.get(normalized_term).copied().unwrap_or(0)
    }
}

impl FrequencyOracle for BTreeMap<String, u64> {
    fn frequency_of(&self, normalized_term: &str) -> u64 {
        self.get(normalized_term).copied().unwrap_or(0)
    }
}

/// Any `Fn(&str) -> u64` closure is an oracle.
impl<F> FrequencyOracle for F
where
    F: Fn(&str) -> u64,
{
    fn frequency_of(&self, normalized_term: &str) -> u64 {
        self(normalized_term)
    }
}

/// Build a frequency table from `(term, count)` pairs, folding every key.
///
/// Pairs whose terms fold to the same key are summed.
pub fn frequency_table<I, S>(pairs: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = (S, u64)>,
    S: AsRef<str>,
{
    let mut table = HashMap::new();
    for (term, count) in pairs {
        let entry = table.entry(fold_case(term.as_ref())).or_insert(0u64);
        *entry = entry.saturating_add(count);
    }
    table
}

/// Load a JSON object `{ "term": count, ... }` as a folded frequency table.
pub fn load_frequency_table(path: &Path) -> Result<HashMap<String, u64>> {
    let raw = std::fs::read_to_string(path).map_err(|e| TypeaheadError::io(path, e))?;
    let parsed: HashMap<String, u64> =
        serde_json::from_str(&raw).map_err(|e| TypeaheadError::json(path, e))?;
    Ok(frequency_table(parsed))
}
