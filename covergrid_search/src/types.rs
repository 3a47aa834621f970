// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search-side mutations and the host boundary that applies them.

/// A visual-state change on the card grid requested by the search engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchMutation<K> {
    /// Enable or disable search mode on the grid container.
    SearchMode(bool),
    /// Toggle the matched state of a card.
    SetMatched {
        /// Card to update.
        card: K,
        /// New state.
        on: bool,
    },
    /// Drop any manual ordering override on a card.
    ClearOrder(K),
}

/// A host that can apply [`SearchMutation`]s.
pub trait SearchTarget<K> {
    /// Apply one mutation.
    fn apply_search(&mut self, mutation: SearchMutation<K>);
}

impl<K> SearchTarget<K> for Vec<SearchMutation<K>> {
    fn apply_search(&mut self, mutation: SearchMutation<K>) {
        self.push(mutation);
    }
}
