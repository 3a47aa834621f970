// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental search over a fixed set of cards.
//!
//! ## Behavior
//!
//! Each query change is normalized first; repeating the last normalized query
//! is a no-op. An empty query leaves search mode and clears the matched state
//! and ordering overrides of every previous result. Otherwise every card is
//! tested, and only the difference against the previous result set is
//! emitted as mutations.
//!
//! Cards whose corpus payload failed to parse are kept in the collection but
//! never match.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use crate::corpus::Corpus;
use crate::error::CorpusError;
use crate::normalize::normalize_query;
use crate::pattern::QueryPattern;
use crate::types::{SearchMutation, SearchTarget};

/// Tunables for search input handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Delay before the query is re-read after the search box loses focus.
    pub blur_refresh_delay: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            blur_refresh_delay: Duration::from_millis(10),
        }
    }
}

/// Change between two result sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchDiff<K> {
    /// Present only in the new set, in its order.
    pub added: Vec<K>,
    /// Present only in the old set, in its order.
    pub removed: Vec<K>,
}

impl<K> SearchDiff<K> {
    /// True if the two sets were equal.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare two result sets in linear time.
///
/// ```
/// use covergrid_search::diff;
///
/// let d = diff(&[1, 3, 5], &[3, 4]);
/// assert_eq!(d.added, [4]);
/// assert_eq!(d.removed, [1, 5]);
/// ```
pub fn diff<K: Copy + Eq + Hash>(previous: &[K], next: &[K]) -> SearchDiff<K> {
    let before: HashSet<K> = previous.iter().copied().collect();
    let after: HashSet<K> = next.iter().copied().collect();
    SearchDiff {
        added: next
            .iter()
            .copied()
            .filter(|k| !before.contains(k))
            .collect(),
        removed: previous
            .iter()
            .copied()
            .filter(|k| !after.contains(k))
            .collect(),
    }
}

#[derive(Clone, Debug)]
struct Card<K> {
    id: K,
    corpus: Option<Corpus>,
}

/// Search state for one page session.
#[derive(Clone, Debug)]
pub struct SearchEngine<K> {
    cards: Vec<Card<K>>,
    last_query: Option<String>,
    results: Vec<K>,
}

impl<K: Copy + Eq + Hash + Debug> SearchEngine<K> {
    /// Create an engine over cards in document order.
    ///
    /// A card whose corpus is an error is reported and never matches.
    pub fn new<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = (K, Result<Corpus, CorpusError>)>,
    {
        let cards = cards
            .into_iter()
            .map(|(id, corpus)| {
                let corpus = corpus
                    .inspect_err(|err| {
                        tracing::warn!(card = ?id, %err, "card excluded from search");
                    })
                    .ok();
                Card { id, corpus }
            })
            .collect();
        Self {
            cards,
            last_query: None,
            results: Vec::new(),
        }
    }

    /// Create an engine from serialized corpus payloads.
    pub fn from_payloads<I, S>(cards: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        S: AsRef<str>,
    {
        Self::new(
            cards
                .into_iter()
                .map(|(id, payload)| (id, Corpus::parse(payload.as_ref()))),
        )
    }

    /// Number of cards, including never-matching ones.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if there are no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards matching the last query, in document order.
    pub fn results(&self) -> &[K] {
        &self.results
    }

    /// The last normalized query, if any was processed.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Whether search mode is on.
    pub fn is_searching(&self) -> bool {
        self.last_query.as_deref().is_some_and(|q| !q.is_empty())
    }

    /// Process a raw query and return the mutations to apply.
    pub fn on_query_change(&mut self, raw: &str) -> Vec<SearchMutation<K>> {
        let query = normalize_query(raw);
        if self.last_query.as_deref() == Some(query.as_str()) {
            return Vec::new();
        }

        let mut out = Vec::new();
        if query.is_empty() {
            out.push(SearchMutation::SearchMode(false));
            for card in self.results.drain(..) {
                out.push(SearchMutation::SetMatched { card, on: false });
                out.push(SearchMutation::ClearOrder(card));
            }
        } else {
            out.push(SearchMutation::SearchMode(true));
            let next = self.matching(&query);
            let change = diff(&self.results, &next);
            for &card in &change.added {
                out.push(SearchMutation::SetMatched { card, on: true });
            }
            for &card in &change.removed {
                out.push(SearchMutation::SetMatched { card, on: false });
                out.push(SearchMutation::ClearOrder(card));
            }
            tracing::debug!(
                query = %query,
                matched = next.len(),
                added = change.added.len(),
                removed = change.removed.len(),
                "search updated"
            );
            self.results = next;
        }
        self.last_query = Some(query);
        out
    }

    /// Process a raw query and apply the mutations to `target`.
    ///
    /// Returns how many mutations were applied.
    pub fn apply_query<T: SearchTarget<K>>(&mut self, target: &mut T, raw: &str) -> usize {
        let mutations = self.on_query_change(raw);
        let count = mutations.len();
        for m in mutations {
            target.apply_search(m);
        }
        count
    }

    fn matching(&self, query: &str) -> Vec<K> {
        let pattern = match QueryPattern::compile(query) {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(%err, "query matches nothing");
                return Vec::new();
            }
        };
        self.cards
            .iter()
            .filter(|c| c.corpus.as_ref().is_some_and(|corpus| corpus.matches(&pattern)))
            .map(|c| c.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(cards: &[(u32, &str)]) -> SearchEngine<u32> {
        SearchEngine::from_payloads(cards.iter().copied())
    }

    fn matched(muts: &[SearchMutation<u32>], on: bool) -> Vec<u32> {
        muts.iter()
            .filter_map(|m| match *m {
                SearchMutation::SetMatched { card, on: o } if o == on => Some(card),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn diff_leaves_common_ids_untouched() {
        let d = diff(&[1, 3, 5], &[3, 4]);
        assert_eq!(d.added, vec![4]);
        assert_eq!(d.removed, vec![1, 5]);
        assert!(diff(&[2, 7], &[2, 7]).is_empty());
    }

    #[test]
    fn diff_keeps_input_order_on_large_sets() {
        let previous: Vec<u32> = (0..5000).filter(|n| n % 2 == 0).collect();
        let next: Vec<u32> = (0..5000).filter(|n| n % 3 == 0).collect();
        let d = diff(&previous, &next);
        assert_eq!(d.added.first(), Some(&3));
        assert_eq!(d.removed.first(), Some(&2));
        assert!(d.added.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(d.added.len(), next.iter().filter(|n| *n % 2 != 0).count());
        assert_eq!(d.removed.len(), previous.iter().filter(|n| *n % 3 != 0).count());
    }

    #[test]
    fn incremental_mutations_follow_the_diff() {
        let mut e = engine(&[
            (1, r#"["ab one"]"#),
            (3, r#"["ab two", "cd"]"#),
            (4, r#"["cd"]"#),
            (5, r#"["ab"]"#),
        ]);
        e.on_query_change("ab");
        assert_eq!(e.results(), [1, 3, 5]);

        let muts = e.on_query_change("cd");
        assert_eq!(matched(&muts, true), vec![4]);
        assert_eq!(matched(&muts, false), vec![1, 5]);
        assert!(muts.contains(&SearchMutation::ClearOrder(1)));
        assert!(muts.contains(&SearchMutation::ClearOrder(5)));
        assert!(!muts.iter().any(|m| matches!(
            m,
            SearchMutation::SetMatched { card: 3, .. } | SearchMutation::ClearOrder(3)
        )));
        assert_eq!(e.results(), [3, 4]);
    }

    #[test]
    fn empty_query_clears_and_is_idempotent() {
        let mut e = engine(&[(1, r#"["alpha"]"#), (2, r#"["alpine"]"#)]);
        e.on_query_change("alp");
        assert!(e.is_searching());

        let muts = e.on_query_change("   ");
        assert_eq!(muts[0], SearchMutation::SearchMode(false));
        assert_eq!(matched(&muts, false), vec![1, 2]);
        assert!(e.results().is_empty());
        assert!(!e.is_searching());
        assert!(e.on_query_change("").is_empty());
    }

    #[test]
    fn repeated_normalized_query_is_a_no_op() {
        let mut e = engine(&[(1, r#"["foo bar"]"#)]);
        assert!(!e.on_query_change("Foo Bar").is_empty());
        assert!(e.on_query_change("  foo   BAR ").is_empty());
        assert_eq!(e.last_query(), Some("foo bar"));
    }

    #[test]
    fn gaps_need_whitespace_in_the_corpus() {
        let mut e = engine(&[(1, r#"["Foo Bar Baz"]"#), (2, r#"["FooBarBaz"]"#)]);
        e.on_query_change("bar baz");
        assert_eq!(e.results(), [1]);
        e.on_query_change("foo  baz");
        assert_eq!(e.results(), [1]);
        e.on_query_change("foobar");
        assert_eq!(e.results(), [2]);

        let mut joined = engine(&[(2, r#"["FooBarBaz"]"#)]);
        joined.on_query_change("foo baz");
        assert!(joined.results().is_empty());
    }

    #[test]
    fn single_letter_words_need_a_gap() {
        let mut e = engine(&[(1, r#"["alpha beta"]"#), (2, r#"["alphabeta"]"#)]);
        let muts = e.on_query_change("a b");
        assert_eq!(matched(&muts, true), vec![1]);
        assert_eq!(e.results(), [1]);
    }

    #[test]
    fn any_corpus_field_matches() {
        let mut e = engine(&[(7, r#"["Super Game", "SPRGM"]"#)]);
        e.on_query_change("super");
        assert_eq!(e.results(), [7]);
        e.on_query_change("sprgm");
        assert_eq!(e.results(), [7]);
        e.on_query_change("super x");
        assert!(e.results().is_empty());
    }

    #[test]
    fn malformed_card_never_matches_but_siblings_do() {
        let mut e = engine(&[
            (1, r#"["zelda"]"#),
            (2, r#"["zelda", "#),
            (3, r#"["zelda 2"]"#),
        ]);
        assert_eq!(e.len(), 3);
        e.on_query_change("zelda");
        assert_eq!(e.results(), [1, 3]);
    }

    #[test]
    fn apply_query_forwards_to_target() {
        let mut e = engine(&[(1, r#"["x"]"#)]);
        let mut log: Vec<SearchMutation<u32>> = Vec::new();
        assert_eq!(e.apply_query(&mut log, "x"), 2);
        assert_eq!(
            log,
            vec![
                SearchMutation::SearchMode(true),
                SearchMutation::SetMatched { card: 1, on: true }
            ]
        );
    }

    #[test]
    fn multi_gap_queries_convert_every_gap() {
        let mut e = engine(&[(1, r#"["the legend of the hero"]"#)]);
        e.on_query_change("legend the hero");
        assert_eq!(e.results(), [1]);
    }
}
