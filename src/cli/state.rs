// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Usage log persistence for the REPL.
//!
//! The library keeps usage counts in memory only; this is the one place
//! they touch disk. A missing state file is a fresh log, not an error, so
//! the first run with `--state` just creates it.

use std::io::ErrorKind;
use std::path::Path;
use typeahead::{Result, TypeaheadError, UsageLog};

/// Load a usage log, or start an empty one if the file does not exist yet.
pub fn load_usage(path: &Path) -> Result<UsageLog> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(target: "typeahead::cli", path = %path.display(), "no usage log yet");
            return Ok(UsageLog::new());
        }
        Err(source) => {
            return Err(TypeaheadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&raw).map_err(|source| TypeaheadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the usage log as pretty JSON, replacing the file.
pub fn save_usage(path: &Path, usage: &UsageLog) -> Result<()> {
    let json = serde_json::to_string_pretty(usage).map_err(|source| TypeaheadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| TypeaheadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
