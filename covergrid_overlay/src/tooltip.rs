// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement and lifecycle.
//!
//! ## Placement
//!
//! [`place`] pins the tooltip's top-left corner to the pointer, then flips an
//! axis only when the tooltip would overflow the far edge of the viewport and
//! the flipped placement fits on the near side. Each axis is decided on its
//! own. A tooltip larger than the viewport is left where the default anchor
//! puts it.
//!
//! ```
//! use covergrid_overlay::tooltip::place;
//! use covergrid_overlay::types::Corner;
//! use kurbo::{Point, Size};
//!
//! let viewport = Size::new(800.0, 600.0);
//! let p = place(Point::new(750.0, 100.0), Size::new(200.0, 80.0), viewport);
//! assert_eq!(p.corner, Corner::FLIP_X);
//! assert_eq!(p.origin, Point::new(550.0, 100.0));
//! ```
//!
//! ## Lifecycle
//!
//! [`TooltipLifecycle`] measures each tooltip once, on its first show, by
//! forcing it into an invisible block layout and recording the width as a
//! minimum-width floor. Every show hides the tooltip, positions it, and
//! schedules the reveal for a later event-loop turn so it never flashes at a
//! stale position.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use kurbo::{Point, Size};

use crate::document::Document;
use crate::schedule::Timeline;
use crate::types::{Corner, Mutation, Placement, TooltipDisplay, TooltipVisibility};

/// Compute where to draw a tooltip of `size` for a pointer at `point`.
pub fn place(point: Point, size: Size, viewport: Size) -> Placement {
    let flip_x = viewport.width < point.x + size.width && 0.0 <= point.x - size.width;
    let flip_y = viewport.height < point.y + size.height && 0.0 <= point.y - size.height;

    let mut corner = Corner::empty();
    corner.set(Corner::FLIP_X, flip_x);
    corner.set(Corner::FLIP_Y, flip_y);

    let origin = Point::new(
        if flip_x { point.x - size.width } else { point.x },
        if flip_y {
            point.y - size.height
        } else {
            point.y
        },
    );
    Placement { origin, corner }
}

/// Deferred overlay work.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlayTask<K> {
    /// Make a positioned tooltip visible.
    Reveal(K),
    /// Show the system cursor again, if it should still be shown.
    RestoreCursor,
}

/// Per-tooltip measurement cache and the currently shown tooltip.
#[derive(Clone, Debug)]
pub struct TooltipLifecycle<K> {
    min_widths: HashMap<K, f64>,
    active: Option<K>,
    reveal_delay: Duration,
}

impl<K: Copy + Eq + Hash + Debug> TooltipLifecycle<K> {
    /// Create a lifecycle that reveals tooltips `reveal_delay` after showing them.
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            min_widths: HashMap::new(),
            active: None,
            reveal_delay,
        }
    }

    /// The tooltip currently being shown.
    pub fn active(&self) -> Option<K> {
        self.active
    }

    /// Minimum width recorded for a tooltip, if it was measured.
    pub fn measured_width(&self, tooltip: K) -> Option<f64> {
        self.min_widths.get(&tooltip).copied()
    }

    /// Begin showing `tooltip` for a pointer at `point`.
    ///
    /// Measures the tooltip first if this is its first show. The reveal is
    /// queued on `timeline`; until it fires the tooltip is laid out but hidden.
    pub fn show<D: Document<K>>(
        &mut self,
        doc: &mut D,
        tooltip: K,
        point: Point,
        now: Duration,
        timeline: &mut Timeline<OverlayTask<K>>,
    ) {
        if !self.min_widths.contains_key(&tooltip) {
            let width = Self::measure(doc, tooltip);
            self.min_widths.insert(tooltip, width);
        }
        doc.apply(Mutation::SetVisibility {
            tooltip,
            visibility: TooltipVisibility::Hidden,
        });
        self.active = Some(tooltip);
        self.reposition(doc, point);
        timeline.schedule(now, self.reveal_delay, OverlayTask::Reveal(tooltip));
    }

    /// Move the active tooltip to follow the pointer.
    ///
    /// Returns the applied placement, or `None` if no tooltip is active.
    pub fn reposition<D: Document<K>>(&self, doc: &mut D, point: Point) -> Option<Placement> {
        let tooltip = self.active?;
        let placement = place(point, doc.natural_size(tooltip), doc.viewport());
        doc.apply(Mutation::SetPosition { tooltip, placement });
        Some(placement)
    }

    /// Stop showing the active tooltip and return it.
    ///
    /// Nothing is written to the document; once its card loses hover state the
    /// tooltip is suppressed by style rules.
    pub fn hide(&mut self) -> Option<K> {
        self.active.take()
    }

    /// Make `tooltip` visible if it is still the active one.
    ///
    /// Returns whether the reveal was applied.
    pub fn reveal<D: Document<K>>(&self, doc: &mut D, tooltip: K) -> bool {
        if self.active != Some(tooltip) {
            tracing::trace!(?tooltip, "dropping reveal for inactive tooltip");
            return false;
        }
        doc.apply(Mutation::SetVisibility {
            tooltip,
            visibility: TooltipVisibility::Visible,
        });
        true
    }

    fn measure<D: Document<K>>(doc: &mut D, tooltip: K) -> f64 {
        doc.apply(Mutation::SetVisibility {
            tooltip,
            visibility: TooltipVisibility::Hidden,
        });
        doc.apply(Mutation::SetDisplay {
            tooltip,
            display: TooltipDisplay::Block,
        });
        let width = doc.natural_size(tooltip).width;
        doc.apply(Mutation::SetMinWidth { tooltip, width });
        doc.apply(Mutation::SetDisplay {
            tooltip,
            display: TooltipDisplay::Default,
        });
        doc.apply(Mutation::SetVisibility {
            tooltip,
            visibility: TooltipVisibility::Unset,
        });
        tracing::debug!(?tooltip, width, "measured tooltip");
        width
    }
}
