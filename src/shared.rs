// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A cloneable engine handle for multi-threaded hosts.
//!
//! `SuggestionEngine` itself needs no locking: `suggest` borrows `&self`,
//! `insert` borrows `&mut self`, and the borrow checker already enforces one
//! writer or many readers. Once the engine has to live in several threads at
//! once that guarantee has to move to runtime, which is all this wrapper does.
//! Queries take the read lock, so they run concurrently with each other and
//! only wait while a term is being inserted.

use crate::frequency::FrequencyOracle;
use crate::search::SuggestionEngine;
use crate::types::{Candidate, Suggestion};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<SuggestionEngine>>,
}

impl SharedEngine {
    pub fn new(engine: SuggestionEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn suggest<O>(&self, query: &str, oracle: &O) -> Vec<Candidate>
    where
        O: FrequencyOracle + ?Sized,
    {
        self.inner.read().suggest(query, oracle)
    }

    pub fn suggest_top<O>(&self, query: &str, cap: usize, oracle: &O) -> Vec<Candidate>
    where
        O: FrequencyOracle + ?Sized,
    {
        self.inner.read().suggest_top(query, cap, oracle)
    }

    pub fn suggest_highlighted<O>(&self, query: &str, oracle: &O) -> Vec<Suggestion>
    where
        O: FrequencyOracle + ?Sized,
    {
        self.inner.read().suggest_highlighted(query, oracle)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.inner.read().contains(term)
    }

    /// Add a term. Blocks until in-flight queries release the read lock.
    pub fn insert(&self, word: impl Into<String>) {
        self.inner.write().insert(word);
    }

    /// Borrow the engine for several calls under one read lock.
    pub fn read(&self) -> RwLockReadGuard<'_, SuggestionEngine> {
        self.inner.read()
    }
}

impl From<SuggestionEngine> for SharedEngine {
    fn from(engine: SuggestionEngine) -> Self {
        Self::new(engine)
    }
}
