// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Selection history for hosts that want the engine to learn.
//!
//! This sits beside the engine, not inside it. A host calls
//! `record_selection` once the user has picked a suggestion; the next
//! `suggest()` call then ranks against the updated counts by passing the log
//! in as its `FrequencyOracle`. Whether and where the log is stored is the
//! host's business; it is `Serialize`/`Deserialize` so that is one call away.

use crate::frequency::FrequencyOracle;
use crate::util::normalize::fold_case;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Number of recent selections remembered by default.
pub const DEFAULT_RECENT_CAPACITY: usize = 10;

fn default_recent_capacity() -> usize {
    DEFAULT_RECENT_CAPACITY
}

/// Usage counts plus a bounded most-recent-first selection history.
///
/// ```
/// use typeahead::{FrequencyOracle, UsageLog};
///
/// let mut log = UsageLog::new();
/// log.record_selection("Docker");
/// log.record_selection("docker");
/// assert_eq!(log.frequency_of("docker"), 2);
/// assert_eq!(log.recent().collect::<Vec<_>>(), vec!["docker"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLog {
    #[serde(default)]
    frequencies: HashMap<String, u64>,
    #[serde(default)]
    recent: VecDeque<String>,
    #[serde(default = "default_recent_capacity")]
    recent_capacity: usize,
}

impl Default for UsageLog {
    fn default() -> Self {
        Self::with_recent_capacity(DEFAULT_RECENT_CAPACITY)
    }
}

impl UsageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recent_capacity(recent_capacity: usize) -> Self {
        Self {
            frequencies: HashMap::new(),
            recent: VecDeque::with_capacity(recent_capacity),
            recent_capacity,
        }
    }

    /// Record that the user picked `word`. Returns the term's new count.
    ///
    /// The folded term moves to the front of the history; the oldest entry
    /// falls off once the history is full.
    pub fn record_selection(&mut self, word: &str) -> u64 {
        let term = fold_case(word.trim());
        let count = self.frequencies.entry(term.clone()).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;

        self.recent.retain(|t| *t != term);
        self.recent.push_front(term);
        self.recent.truncate(self.recent_capacity);
        count
    }

    /// Recent selections, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    /// Forget the history but keep the counts.
    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    /// Number of distinct terms ever selected.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl FrequencyOracle for UsageLog {
    fn frequency_of(&self, normalized_term: &str) -> u64 {
        self.frequencies.get(normalized_term).copied().unwrap_or(0)
    }
}
