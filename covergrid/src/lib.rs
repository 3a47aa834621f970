// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Covergrid: hover tooltips and incremental search for a rendered grid of cards.
//!
//! This crate ties the pieces together for one page session:
//!
//! - [`covergrid_overlay`] resolves the card under the pointer and keeps its
//!   tooltip inside the viewport.
//! - [`covergrid_search`] matches queries against card corpora and diffs the
//!   results.
//! - [`Session`](crate::session::Session) routes host [`InputEvent`](crate::session::InputEvent)s
//!   to both and drains their deferred work.
//! - [`Config`](crate::config::Config) loads session options from a JSON document.
//! - [`style`] renders mutations as class toggles and inline CSS for
//!   browser-backed hosts.
//! - [`template`] substitutes positional and named arguments into markup
//!   templates, leaving unknown placeholders in place.
//!
//! ## Example
//!
//! With the default `page_adapter` feature, the in-memory page model from
//! `covergrid_scene` can serve as the host.
//!
//! ```
//! # #[cfg(feature = "page_adapter")]
//! # {
//! use covergrid::config::Config;
//! use covergrid::session::{InputEvent, Session};
//! use covergrid_scene::Page;
//! use kurbo::{Point, Rect, Size};
//! use std::time::Duration;
//!
//! let mut page = Page::new(Size::new(800.0, 600.0));
//! let card = page.add_card(Rect::new(0.0, 0.0, 120.0, 180.0));
//! let tip = page.add_tooltip(card, Size::new(200.0, 80.0));
//!
//! let mut session = Session::new(&Config::default(), [(card, r#"["Super Game"]"#)]);
//! let t0 = Duration::ZERO;
//! session.handle(&mut page, InputEvent::PointerMove(Point::new(60.0, 60.0)), t0);
//! session.handle(&mut page, InputEvent::QueryInput("super".into()), t0);
//!
//! let due = session.next_deadline().unwrap();
//! session.advance(&mut page, due, "super");
//! assert!(page.is_shown(tip));
//! assert_eq!(session.search().results(), [card]);
//! # }
//! ```

pub mod config;
pub mod session;
pub mod style;
pub mod template;

pub use covergrid_overlay;
pub use covergrid_search;
