// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character trie for exact-prefix lookup.
//!
//! Each edge is one case-folded character. Walking the prefix costs
//! O(|prefix|); collecting the subtree costs O(k) for k matches, independent of
//! how large the rest of the vocabulary is. The terminal node of every word
//! keeps the display form (original casing) so results come back the way the
//! caller wrote them.
//!
//! **Invariant**: the characters on the path from the root to a terminal node,
//! concatenated, equal `fold_case(display)` for that node's display string.
//!
//! **Verified by**:
//! - `prop_inserted_word_found_under_every_prefix` (tests/property/trie_props.rs)
//! - `prop_prefix_search_matches_linear_scan` (tests/property/trie_props.rs)

use crate::util::normalize::fold_case;
use std::collections::HashMap;
use tracing::trace;

/// One trie node. Children are owned outright; there are no parent links
/// because every traversal runs root to leaf.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Display form, present only on end-of-word nodes.
    word: Option<String>,
}

impl TrieNode {
    #[inline]
    fn is_end_of_word(&self) -> bool {
        self.word.is_some()
    }
}

// Tear down iteratively; the derived drop would recurse once per character.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Prefix index over a vocabulary.
///
/// # Example
///
/// ```
/// use typeahead::PrefixIndex;
///
/// let mut index = PrefixIndex::new();
/// index.insert("Docker");
/// index.insert("devops");
///
/// let mut hits = index.prefix_search("D");
/// hits.sort();
/// assert_eq!(hits, vec!["Docker", "devops"]);
/// assert!(index.prefix_search("x").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    words: usize,
    nodes: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from any sequence of display strings.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    /// Insert `word` under its case-folded form.
    ///
    /// Inserting a second display form with the same folded spelling replaces
    /// the first (last write wins). The word count only grows on new terms.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        let mut created = 0usize;
        for c in fold_case(word).chars() {
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
        }
        if !node.is_end_of_word() {
            self.words += 1;
        }
        node.word = Some(word.to_string());
        self.nodes += created;
        trace!(target: "typeahead::index", word, created, "trie insert");
    }

    /// Every display string stored under `prefix` (case-insensitive).
    ///
    /// Returns an empty vector as soon as a prefix character has no edge; there
    /// is no fuzzy fallback at this layer. Order is unspecified. An empty
    /// prefix returns the whole vocabulary.
    pub fn prefix_search(&self, prefix: &str) -> Vec<&str> {
        let Some(start) = self.locate(&fold_case(prefix)) else {
            return Vec::new();
        };

        // Explicit stack: pathological vocabularies (one very long word) must
        // not be able to exhaust the call stack.
        let mut found = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(word) = node.word.as_deref() {
                found.push(word);
            }
            stack.extend(node.children.values());
        }
        found
    }

    /// Display form of an exact (case-insensitive) vocabulary term.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.locate(&fold_case(word))?.word.as_deref()
    }

    /// Is `word` (case-insensitive) a stored term?
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of distinct folded terms.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Walk an already folded key from the root.
    fn locate(&self, folded: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in folded.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}
