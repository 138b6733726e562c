//! In-memory typeahead: ranked, deduplicated completions with highlight spans.
//!
//! Give the engine a vocabulary and a way to look up how often each term was
//! picked before; give it a partial query; get back a short list of
//! suggestions that mixes exact-prefix completions with typo-tolerant
//! matches, each tagged with why it matched.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   index/     │   │   fuzzy/     │   │  frequency   │
//! │ (PrefixIndex,│   │ (distance,   │   │ (Frequency-  │
//! │  char trie)  │   │  _within)    │   │  Oracle)     │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        │                  │                  │
//!        ▼                  ▼                  ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                 search/ (SuggestionEngine)           │
//! │   exact ──▶ prefix ──▶ fuzzy ──▶ dedup ──▶ rank      │
//! └──────────────────────────┬──────────────────────────┘
//!                            │ Vec<Candidate>
//!                            ▼
//!                ┌──────────────────────┐
//!                │     highlight        │
//!                │ (HighlightSegment)   │
//!                └──────────────────────┘
//! ```
//!
//! Everything in that diagram is infallible and performs no I/O. The file
//! loaders (`vocabulary`, `frequency`, `config`) and the CLI sit outside it
//! and return `TypeaheadError`.
//!
//! # Usage
//!
//! ```
//! use typeahead::{highlight, segments_text, SuggestionEngine, UsageLog};
//!
//! let engine = SuggestionEngine::new(["React", "redis", "rust"]);
//! let mut usage = UsageLog::new();
//!
//! let results = engine.suggest("reakt", &usage);
//! assert_eq!(results[0].word, "React");
//! assert_eq!(results[0].edit_distance, Some(1));
//!
//! let segments = highlight(&results[0], "reakt");
//! assert_eq!(segments_text(&segments), "React");
//!
//! // The host records the pick; the next query ranks against it
//! usage.record_selection(&results[0].word);
//! ```

pub mod config;
pub mod error;
pub mod frequency;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod usage;
pub mod util;
pub mod vocabulary;

#[cfg(feature = "shared")]
pub mod shared;

pub mod testing;

// Re-exports for public API
pub use config::SuggestConfig;
pub use error::{Result, TypeaheadError};
pub use frequency::{frequency_table, load_frequency_table, FrequencyOracle, NoFrequencies};
pub use fuzzy::{distance, distance_within};
pub use highlight::{coalesce, highlight, highlight_as, highlight_fuzzy, highlight_prefix, highlight_tagged};
pub use index::PrefixIndex;
pub use scoring::ranking::{compare_candidates, rank};
pub use search::{suggest_from, SuggestionEngine};
pub use types::{segments_text, Candidate, HighlightSegment, MatchCategory, Suggestion, UnknownCategory};
pub use usage::UsageLog;
pub use util::normalize::fold_case;
pub use vocabulary::{load_vocabulary, parse_vocabulary};

#[cfg(feature = "shared")]
pub use shared::SharedEngine;
