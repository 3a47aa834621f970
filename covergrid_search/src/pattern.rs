// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compiled search patterns.

use regex::Regex;

use crate::error::PatternError;

/// Stands in for each gap between query words.
///
/// One whitespace character, optionally followed by any text that itself ends
/// in whitespace. Words separated in the query therefore stay separated in the
/// match, but may have other words between them.
const GAP: &str = r"\s(?:.*?\s)?";

/// A normalized query compiled for substring matching.
#[derive(Clone, Debug)]
pub struct QueryPattern {
    regex: Regex,
}

impl QueryPattern {
    /// Compile a normalized query.
    ///
    /// Each word is matched literally; every gap between words becomes a
    /// wildcard gap.
    ///
    /// ```
    /// use covergrid_search::QueryPattern;
    ///
    /// let p = QueryPattern::compile("foo bar").unwrap();
    /// assert!(p.is_match("foo xyz bar"));
    /// assert!(p.is_match("foo bar"));
    /// assert!(!p.is_match("foobar"));
    /// ```
    pub fn compile(normalized: &str) -> Result<Self, PatternError> {
        let source = normalized
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(GAP);
        Ok(Self {
            regex: Regex::new(&source)?,
        })
    }

    /// Whether `text` contains a match.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The compiled regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
