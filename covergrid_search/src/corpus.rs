// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-card search corpora.

use crate::error::CorpusError;
use crate::pattern::QueryPattern;
use crate::title::searchable_forms;

/// The searchable text fields of one card, lower-cased.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    fields: Vec<String>,
}

impl Corpus {
    /// Build a corpus from field strings.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|f| f.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Parse a serialized payload: a JSON array of strings, one per field.
    ///
    /// ```
    /// use covergrid_search::Corpus;
    ///
    /// let c = Corpus::parse(r#"["Super Game", "SPRGM"]"#).unwrap();
    /// assert_eq!(c.fields(), ["super game", "sprgm"]);
    /// assert!(Corpus::parse("{not json").is_err());
    /// ```
    pub fn parse(payload: &str) -> Result<Self, CorpusError> {
        let fields: Vec<String> = serde_json::from_str(payload)?;
        Ok(Self::new(fields))
    }

    /// Build a corpus from a catalog title, with one field per searchable form.
    ///
    /// Besides the lower-cased title, this adds its sortable form (leading
    /// article moved to the end) and forms with punctuation and separators
    /// removed and round numbers abbreviated, so queries typed without
    /// punctuation still find the title.
    ///
    /// ```
    /// use covergrid_search::{Corpus, QueryPattern};
    ///
    /// let c = Corpus::from_title("The Legend of Zelda: A Link to the Past");
    /// assert_eq!(c.fields()[1], "legend of zelda: a link to the past, the");
    /// assert!(c.matches(&QueryPattern::compile("zelda a link").unwrap()));
    /// ```
    pub fn from_title(title: &str) -> Self {
        Self {
            fields: searchable_forms(title),
        }
    }

    /// The fields, in source order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether any field contains a match for `pattern`.
    pub fn matches(&self, pattern: &QueryPattern) -> bool {
        self.fields.iter().any(|f| pattern.is_match(f))
    }
}
