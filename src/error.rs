// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the fallible edges: files and configuration.
//!
//! Suggesting, indexing and highlighting cannot fail; an empty result is the
//! only "no" the core ever says. Loading a vocabulary, a frequency table, a
//! usage log or a config file can, and those paths return `TypeaheadError`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeaheadError {
    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A file was readable but not the JSON we expected.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TypeaheadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TypeaheadError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        TypeaheadError::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TypeaheadError>;
