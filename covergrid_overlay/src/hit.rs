// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit tester: resolve the card under the pointer and drive hover transitions.
//!
//! ## Resolution
//!
//! The overlay layer sits on top of the grid and receives all pointer input,
//! so the card under the pointer is found with a stacked point query. A
//! [`HitPolicy`] states which stacks resolve to a card: by default, exactly
//! three elements (overlay, card, document root) with the card in the middle.
//! Any other depth means "no card", which covers gaps between cards,
//! positions off the grid, and ambiguous overlaps.
//!
//! ## Transitions
//!
//! - Entering a card: hover state on, tooltip shown at the pointer, cursor hidden.
//! - Staying on a card: the tooltip follows the pointer; nothing restarts.
//! - Leaving a card: hover state off, tooltip torn down, cursor restoration
//!   scheduled after a short delay so fast moves between adjacent cards do
//!   not flicker it.
//!
//! Scroll events re-run resolution at the last known pointer position since
//! the content under a still pointer may have moved. Before the first move,
//! and after the pointer leaves the overlay, there is no position and a
//! scroll resolves to "no card".
//!
//! ## Minimal example
//!
//! ```
//! use covergrid_overlay::document::Document;
//! use covergrid_overlay::hit::{HitTester, OverlayConfig};
//! use covergrid_overlay::types::{HoverChange, Mutation, PointerSample};
//! use kurbo::{Point, Size};
//! use std::time::Duration;
//!
//! // A document where every point resolves to card 7.
//! struct Doc;
//! impl Document<u32> for Doc {
//!     fn nodes_at(&self, _pt: Point) -> Vec<u32> { vec![1, 7, 0] }
//!     fn viewport(&self) -> Size { Size::new(800.0, 600.0) }
//!     fn tooltip_of(&self, card: u32) -> Option<u32> { Some(card + 100) }
//!     fn natural_size(&self, _node: u32) -> Size { Size::new(120.0, 40.0) }
//!     fn apply(&mut self, _m: Mutation<u32>) {}
//! }
//!
//! let mut hits = HitTester::new(OverlayConfig::default());
//! let now = Duration::ZERO;
//! let change = hits.on_pointer_sample(&mut Doc, PointerSample::Move(Point::new(5.0, 5.0)), now);
//! assert_eq!(change, HoverChange::Entered(7));
//! assert_eq!(hits.on_pointer_sample(&mut Doc, PointerSample::Leave, now), HoverChange::Left(7));
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use kurbo::Point;

use crate::document::Document;
use crate::error::TooltipError;
use crate::schedule::Timeline;
use crate::tooltip::{OverlayTask, TooltipLifecycle};
use crate::types::{CursorMode, HoverChange, Mutation, PointerSample};

/// Which stacked point-query results resolve to a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HitPolicy {
    /// Exact number of stacked elements a valid resolution has.
    pub stack_depth: usize,
    /// Position of the card within a valid stack (topmost is 0).
    pub card_slot: usize,
}

impl HitPolicy {
    /// Overlay layer, then the card, then the document root.
    pub const OVERLAY_CARD_ROOT: Self = Self {
        stack_depth: 3,
        card_slot: 1,
    };

    /// Resolve a topmost-first stack to a card.
    pub fn resolve<K: Copy>(&self, stack: &[K]) -> Option<K> {
        if stack.len() != self.stack_depth {
            return None;
        }
        stack.get(self.card_slot).copied()
    }
}

impl Default for HitPolicy {
    fn default() -> Self {
        Self::OVERLAY_CARD_ROOT
    }
}

/// Tunables for the hit tester and tooltip lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Stack shape that resolves to a card.
    pub policy: HitPolicy,
    /// Delay between positioning a tooltip and revealing it.
    pub reveal_delay: Duration,
    /// Delay before the cursor is shown again after leaving a card.
    pub cursor_restore_delay: Duration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            policy: HitPolicy::default(),
            reveal_delay: Duration::from_millis(1),
            cursor_restore_delay: Duration::from_millis(100),
        }
    }
}

/// Pointer-to-card resolver and hover state machine.
///
/// Owns all pointer-side session state: the pointer position over the overlay,
/// the hovered card, whether the cursor should currently be visible, the
/// tooltip lifecycle, and pending deferred work.
#[derive(Clone, Debug)]
pub struct HitTester<K> {
    config: OverlayConfig,
    pointer: Option<Point>,
    hovered: Option<K>,
    cursor_should_show: bool,
    tooltips: TooltipLifecycle<K>,
    timeline: Timeline<OverlayTask<K>>,
}

impl<K: Copy + Eq + Hash + Debug> HitTester<K> {
    /// Create an idle hit tester.
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            pointer: None,
            hovered: None,
            cursor_should_show: true,
            tooltips: TooltipLifecycle::new(config.reveal_delay),
            timeline: Timeline::new(),
        }
    }

    /// The card currently under the pointer.
    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    /// Pointer position over the overlay; `None` before the first move and
    /// after the pointer leaves.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Whether the cursor should be visible right now.
    pub fn cursor_should_show(&self) -> bool {
        self.cursor_should_show
    }

    /// Tooltip measurement and visibility state.
    pub fn tooltips(&self) -> &TooltipLifecycle<K> {
        &self.tooltips
    }

    /// When the next deferred task is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    /// Handle a pointer sample from the overlay layer.
    pub fn on_pointer_sample<D: Document<K>>(
        &mut self,
        doc: &mut D,
        sample: PointerSample,
        now: Duration,
    ) -> HoverChange<K> {
        self.pointer = match sample {
            PointerSample::Move(pt) => Some(pt),
            PointerSample::Leave => None,
        };
        let resolved = self.resolve(doc);
        self.transition(doc, resolved, now)
    }

    /// Handle a scroll of the document under a still pointer.
    ///
    /// Does nothing while the pointer is off the overlay.
    pub fn on_scroll<D: Document<K>>(&mut self, doc: &mut D, now: Duration) -> HoverChange<K> {
        let resolved = self.resolve(doc);
        self.transition(doc, resolved, now)
    }

    /// Run deferred tasks due at `now`. Returns how many ran.
    pub fn advance<D: Document<K>>(&mut self, doc: &mut D, now: Duration) -> usize {
        let due = self.timeline.drain_due(now);
        let count = due.len();
        for task in due {
            match task {
                OverlayTask::Reveal(tooltip) => {
                    let _ = self.tooltips.reveal(doc, tooltip);
                }
                OverlayTask::RestoreCursor => {
                    // A newer hover may have hidden the cursor again since this was queued.
                    if self.cursor_should_show {
                        doc.apply(Mutation::SetCursor(CursorMode::Initial));
                    }
                }
            }
        }
        count
    }

    fn resolve<D: Document<K>>(&self, doc: &D) -> Option<K> {
        let pt = self.pointer?;
        self.config.policy.resolve(&doc.nodes_at(pt))
    }

    fn transition<D: Document<K>>(
        &mut self,
        doc: &mut D,
        resolved: Option<K>,
        now: Duration,
    ) -> HoverChange<K> {
        if resolved == self.hovered {
            if let (Some(_), Some(pt)) = (resolved, self.pointer) {
                let _ = self.tooltips.reposition(doc, pt);
            }
            return HoverChange::Unchanged;
        }

        let previous = self.hovered.take();
        if let Some(card) = previous {
            doc.apply(Mutation::SetHover { card, on: false });
            self.timeline.schedule(
                now,
                self.config.cursor_restore_delay,
                OverlayTask::RestoreCursor,
            );
            self.cursor_should_show = true;
            let _ = self.tooltips.hide();
        }
        if let (Some(card), Some(pt)) = (resolved, self.pointer) {
            self.enter(doc, card, pt, now);
        }
        self.hovered = resolved;

        let change = match (previous, resolved) {
            (None, Some(to)) => HoverChange::Entered(to),
            (Some(from), None) => HoverChange::Left(from),
            (Some(from), Some(to)) => HoverChange::Moved { from, to },
            (None, None) => HoverChange::Unchanged,
        };
        tracing::debug!(?change, pointer = ?self.pointer, "hover transition");
        change
    }

    fn enter<D: Document<K>>(&mut self, doc: &mut D, card: K, pt: Point, now: Duration) {
        doc.apply(Mutation::SetHover { card, on: true });
        match doc.tooltip_of(card).ok_or(TooltipError::MissingTooltip) {
            Ok(tooltip) => {
                self.tooltips
                    .show(doc, tooltip, pt, now, &mut self.timeline);
                self.cursor_should_show = false;
                doc.apply(Mutation::SetCursor(CursorMode::Hidden));
            }
            Err(err) => {
                tracing::warn!(?card, %err, "hovered card shows no tooltip");
            }
        }
    }
}
