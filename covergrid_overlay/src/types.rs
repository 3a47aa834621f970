// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the overlay: pointer samples, anchor corners, mutations, and transitions.
//!
//! ## Overview
//!
//! These types describe what the overlay consumes from the host and what it asks the host to change.
//! They are produced by the [`hit`](crate::hit) and [`tooltip`](crate::tooltip) modules and applied
//! through [`Document::apply`](crate::document::Document::apply).

use kurbo::Point;

/// A pointer input sample delivered to the overlay layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerSample {
    /// The pointer moved to a viewport-space position.
    Move(Point),
    /// The pointer left the overlay layer.
    Leave,
}

bitflags::bitflags! {
    /// Anchor corner of a placed tooltip.
    ///
    /// The empty set is the default top-left anchor. The value doubles as an
    /// index into [`Corner::CLASS_NAMES`]; it selects a visual "pointing"
    /// style and carries no other meaning.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Corner: u8 {
        /// Tooltip extends to the left of the pointer.
        const FLIP_X = 0b01;
        /// Tooltip extends above the pointer.
        const FLIP_Y = 0b10;
    }
}

impl Corner {
    /// Style class names indexed by corner bits: top-left, top-right, bottom-left, bottom-right.
    pub const CLASS_NAMES: [&'static str; 4] = ["tl", "tr", "bl", "br"];

    /// Style class name for this corner.
    pub fn class_name(self) -> &'static str {
        Self::CLASS_NAMES[usize::from(self.bits() & 0b11)]
    }
}

/// Where a tooltip is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Top-left draw position in viewport space.
    pub origin: Point,
    /// Corner pinned to the pointer.
    pub corner: Corner,
}

/// Inline display of a tooltip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TooltipDisplay {
    /// Defer to style rules, which suppress the tooltip unless its card is hovered.
    #[default]
    Default,
    /// Force block layout.
    Block,
}

/// Inline visibility of a tooltip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TooltipVisibility {
    /// No inline visibility.
    #[default]
    Unset,
    /// Laid out but not painted.
    Hidden,
    /// Painted.
    Visible,
}

/// System pointer cursor over the overlay layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    /// The platform cursor.
    #[default]
    Initial,
    /// No cursor; a tooltip follows the pointer instead.
    Hidden,
}

/// A visual-state change requested from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mutation<K> {
    /// Toggle the hover state of a card.
    SetHover {
        /// Card to update.
        card: K,
        /// New state.
        on: bool,
    },
    /// Set a tooltip's display.
    SetDisplay {
        /// Tooltip element.
        tooltip: K,
        /// New display.
        display: TooltipDisplay,
    },
    /// Set a tooltip's visibility.
    SetVisibility {
        /// Tooltip element.
        tooltip: K,
        /// New visibility.
        visibility: TooltipVisibility,
    },
    /// Apply a minimum width floor to a tooltip.
    SetMinWidth {
        /// Tooltip element.
        tooltip: K,
        /// Width in pixels.
        width: f64,
    },
    /// Move a tooltip and select its anchor corner style.
    SetPosition {
        /// Tooltip element.
        tooltip: K,
        /// Draw position and corner.
        placement: Placement,
    },
    /// Show or hide the system cursor.
    SetCursor(CursorMode),
}

/// Hover transition produced by one hit tester update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverChange<K> {
    /// Same resolution as before (possibly a reposition).
    Unchanged,
    /// The pointer entered a card from empty space.
    Entered(K),
    /// The pointer left a card into empty space.
    Left(K),
    /// The pointer moved straight from one card to another.
    Moved {
        /// Previously hovered card.
        from: K,
        /// Newly hovered card.
        to: K,
    },
}
