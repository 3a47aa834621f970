// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host boundary: geometry queries in, visual-state mutations out.

use kurbo::{Point, Size};

use crate::types::Mutation;

/// A rendered document hosting the card grid.
///
/// Queries are read-only and assumed synchronous. Mutations are applied in the
/// order they are issued, and later queries must observe them; tooltip
/// measurement relies on this to read a width between two style changes.
pub trait Document<K> {
    /// All elements under a viewport-space point, topmost first.
    fn nodes_at(&self, pt: Point) -> Vec<K>;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// The tooltip element of a card, if it has one.
    fn tooltip_of(&self, card: K) -> Option<K>;

    /// Laid-out size of an element (zero when it is not laid out).
    fn natural_size(&self, node: K) -> Size;

    /// Apply a visual-state change.
    fn apply(&mut self, mutation: Mutation<K>);
}
