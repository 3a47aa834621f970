// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Covergrid Scene: an in-memory page model for a grid of cards.
//!
//! This crate stands in for a browser document when driving the covergrid
//! overlay and search pipelines without one.
//!
//! - Holds a document root, a pointer-capturing overlay layer, cards, and one tooltip per card.
//! - Answers stacked point queries ([`Page::elements_from_point`]) the way a browser does: every
//!   pickable element under the point, topmost first.
//! - Tracks the inline styles the pipelines mutate: hover/hit state, tooltip display, visibility,
//!   minimum width and position, ordering overrides, the cursor, and search mode.
//!
//! ## Not a layout engine
//!
//! Card bounds and tooltip content sizes are supplied by the caller. The page
//! only models the one piece of layout behavior the overlay relies on: a
//! tooltip has a size only while it is laid out, which happens when it is
//! forced to block display or when its card is hovered.
//!
//! ## API overview
//!
//! - [`Page`]: the document.
//! - [`ElementId`]: handle of an element; valid for the page's lifetime.
//! - [`ElementFlags`]: structure (pickable, fixed, tooltip).
//! - [`ElementState`]: visual state classes (hover, hit).
//! - [`ElementStyle`]: inline style of an element.
//!
//! ### Minimal usage
//!
//! ```
//! use covergrid_scene::Page;
//! use kurbo::{Point, Rect, Size};
//!
//! let mut page = Page::new(Size::new(800.0, 600.0));
//! let card = page.add_card(Rect::new(0.0, 0.0, 120.0, 180.0));
//! let _tooltip = page.add_tooltip(card, Size::new(200.0, 90.0));
//!
//! // Overlay on top, then the card, then the document root.
//! let stack = page.elements_from_point(Point::new(10.0, 10.0));
//! assert_eq!(stack, vec![page.overlay(), card, page.root()]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod page;
mod types;

pub use page::Page;
pub use types::{
    Cursor, Display, ElementFlags, ElementId, ElementState, ElementStyle, LocalElement, Visibility,
};
