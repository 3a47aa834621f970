// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search error types.

use thiserror::Error;

/// A card's search corpus payload could not be used.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The payload is not a JSON array of strings.
    #[error("malformed corpus payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A normalized query could not be compiled into a pattern.
///
/// Query words are matched literally, so this only happens for queries too
/// large for the regex engine's size limits.
#[derive(Error, Debug)]
#[error("query does not compile: {0}")]
pub struct PatternError(#[from] regex::Error);
