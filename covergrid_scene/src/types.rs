// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the page model: element identifiers, flags, and styles.

use kurbo::{Point, Rect};

/// Identifier for an element in a [`Page`](crate::Page).
///
/// Elements are never removed during a session, so an `ElementId` is a plain
/// slot index that stays valid for the lifetime of the page that issued it.
/// Ordering follows creation order: a larger id was created later.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// The raw slot index, useful as a stable label in logs.
    pub const fn index(self) -> u32 {
        self.0
    }
}

bitflags::bitflags! {
    /// Structural flags of an element.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is rendered.
        const VISIBLE  = 0b0000_0001;
        /// Element participates in point queries.
        const PICKABLE = 0b0000_0010;
        /// Bounds are in viewport space and ignore the scroll offset.
        const FIXED    = 0b0000_0100;
        /// Element is the tooltip of its parent card.
        const TOOLTIP  = 0b0000_1000;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

bitflags::bitflags! {
    /// Visual state classes toggled on cards.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementState: u8 {
        /// The pointer is over the card.
        const HOVER = 0b0000_0001;
        /// The card matches the current search query.
        const HIT   = 0b0000_0010;
    }
}

/// Inline display override of an element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Display {
    /// No inline override; style rules decide (tooltips are suppressed unless their card is hovered).
    #[default]
    Default,
    /// Forced block layout.
    Block,
}

/// Inline visibility override of an element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// No inline override.
    #[default]
    Unset,
    /// Laid out but not painted.
    Hidden,
    /// Painted.
    Visible,
}

/// Pointer cursor shown over the overlay layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// The platform cursor.
    #[default]
    Initial,
    /// No cursor.
    None,
}

/// Geometry and structure supplied when inserting an element.
#[derive(Clone, Debug)]
pub struct LocalElement {
    /// Bounds in document space, or viewport space for [`ElementFlags::FIXED`] elements.
    pub bounds: Rect,
    /// Stacking order; higher is on top.
    pub z_index: i32,
    /// Structural flags.
    pub flags: ElementFlags,
}

impl Default for LocalElement {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            z_index: 0,
            flags: ElementFlags::default(),
        }
    }
}

/// Mutable inline style of an element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStyle {
    /// Display override.
    pub display: Display,
    /// Visibility override.
    pub visibility: Visibility,
    /// Minimum width floor in pixels.
    pub min_width: Option<f64>,
    /// Absolute draw position (top-left corner) in viewport space.
    pub position: Option<Point>,
    /// Anchor corner class index (`0..=3`), if one is applied.
    pub corner: Option<u8>,
    /// State classes.
    pub state: ElementState,
    /// Manual ordering override within the grid.
    pub order: Option<i32>,
}
