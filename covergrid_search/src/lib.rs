// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Covergrid Search: incremental substring search over a small, fixed set of cards.
//!
//! ## Overview
//!
//! Every card carries a [`Corpus`]: an ordered list of text fields, supplied
//! as a JSON array of strings. As the user types, [`SearchEngine`] matches the
//! query against every card and emits only the [`SearchMutation`]s needed to
//! move the grid from the previous result set to the new one.
//!
//! ## Matching
//!
//! - Queries are normalized with [`normalize_query`]: trimmed, whitespace runs
//!   collapsed, lower-cased. Corpora are lower-cased when loaded.
//! - Query words match literally and in order.
//! - Each gap between words matches whitespace, optionally with other words in
//!   between: `"foo bar"` matches `"foo xyz bar"` but not `"foobar"`.
//! - A card matches if any one of its fields contains the pattern.
//! - [`Corpus::from_title`] expands a catalog title into the extra forms a
//!   user is likely to type: without punctuation, article last, and with
//!   round numbers abbreviated.
//!
//! ## Example
//!
//! ```
//! use covergrid_search::{SearchEngine, SearchMutation};
//!
//! let mut search = SearchEngine::from_payloads([
//!     (1_u32, r#"["Super Game", "SPRGM"]"#),
//!     (2, r#"["Another Game"]"#),
//! ]);
//!
//! let muts = search.on_query_change("Super");
//! assert_eq!(muts, [
//!     SearchMutation::SearchMode(true),
//!     SearchMutation::SetMatched { card: 1, on: true },
//! ]);
//!
//! search.on_query_change("game");
//! assert_eq!(search.results(), [1, 2]);
//! ```
//!
//! ## Adapters
//!
//! With the `page_adapter` feature, `covergrid_scene::Page` implements
//! [`SearchTarget`].

pub mod adapters;
mod corpus;
mod engine;
mod error;
mod normalize;
mod pattern;
mod title;
mod types;

pub use corpus::Corpus;
pub use engine::{SearchConfig, SearchDiff, SearchEngine, diff};
pub use error::{CorpusError, PatternError};
pub use normalize::normalize_query;
pub use pattern::QueryPattern;
pub use types::{SearchMutation, SearchTarget};
