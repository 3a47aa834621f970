// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Covergrid Overlay: pointer hit testing and viewport-aware tooltips for a grid of cards.
//!
//! ## Overview
//!
//! A transparent overlay layer sits above the card grid and captures all
//! pointer input. This crate turns that input into hover state on the card
//! under the pointer, a tooltip that follows the pointer without leaving the
//! viewport, and a hidden system cursor while a tooltip is showing.
//!
//! It does not render or lay anything out. The host implements
//! [`Document`](crate::document::Document): it answers stacked point queries and
//! size queries, and applies the [`Mutation`](crate::types::Mutation)s the
//! overlay issues.
//!
//! ## Workflow
//!
//! 1) Feed pointer samples to [`HitTester::on_pointer_sample`](crate::hit::HitTester::on_pointer_sample)
//!    and scroll notifications to [`HitTester::on_scroll`](crate::hit::HitTester::on_scroll).
//!    Each call resolves the card under the pointer with a [`HitPolicy`](crate::hit::HitPolicy)
//!    and returns the resulting [`HoverChange`](crate::types::HoverChange).
//! 2) On entering a card, the tooltip is measured once (in a forced, invisible
//!    block layout), hidden, positioned with [`place`](crate::tooltip::place),
//!    and its reveal is queued.
//! 3) Call [`HitTester::advance`](crate::hit::HitTester::advance) from the host
//!    event loop. It runs queued reveals and the delayed cursor restore.
//!    [`HitTester::next_deadline`](crate::hit::HitTester::next_deadline) says when
//!    the next one is due.
//!
//! Deferred work is never cancelled. A reveal for a tooltip that is no longer
//! active, or a cursor restore while a card is hovered, is dropped when it fires.
//!
//! ## Example
//!
//! ```
//! use covergrid_overlay::document::Document;
//! use covergrid_overlay::hit::{HitTester, OverlayConfig};
//! use covergrid_overlay::types::{CursorMode, Mutation, PointerSample};
//! use kurbo::{Point, Size};
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct Log(Vec<Mutation<u32>>);
//!
//! impl Document<u32> for Log {
//!     fn nodes_at(&self, pt: Point) -> Vec<u32> {
//!         // Overlay 1, card 7 on the left half, root 0.
//!         if pt.x < 100.0 { vec![1, 7, 0] } else { vec![1, 0] }
//!     }
//!     fn viewport(&self) -> Size { Size::new(200.0, 200.0) }
//!     fn tooltip_of(&self, card: u32) -> Option<u32> { Some(card + 100) }
//!     fn natural_size(&self, _node: u32) -> Size { Size::new(50.0, 20.0) }
//!     fn apply(&mut self, m: Mutation<u32>) { self.0.push(m); }
//! }
//!
//! let mut doc = Log::default();
//! let mut hits = HitTester::new(OverlayConfig::default());
//! let ms = Duration::from_millis;
//!
//! hits.on_pointer_sample(&mut doc, PointerSample::Move(Point::new(10.0, 10.0)), ms(0));
//! hits.on_pointer_sample(&mut doc, PointerSample::Move(Point::new(150.0, 10.0)), ms(20));
//! hits.advance(&mut doc, ms(200));
//! assert_eq!(doc.0.last(), Some(&Mutation::SetCursor(CursorMode::Initial)));
//! ```
//!
//! ## Adapters
//!
//! With the `page_adapter` feature, `covergrid_scene::Page` implements
//! [`Document`](crate::document::Document) with `ElementId` keys.

pub mod adapters;
pub mod document;
pub mod error;
pub mod hit;
pub mod schedule;
pub mod tooltip;
pub mod types;
