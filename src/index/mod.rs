// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the structure that makes prefix lookup cheap.
//!
//! Only one index type lives here, a character trie. Prefix queries cost the
//! length of the prefix plus the number of hits; the vocabulary size never
//! enters into it once the subtree is found.

mod trie;

pub use trie::PrefixIndex;
