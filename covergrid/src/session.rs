// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One page session: pointer hover and search, driven by host events.
//!
//! A [`Session`] owns the hit tester and the search engine. The two share no
//! state; the session only routes events and drains deferred work.
//!
//! The host delivers every input event through [`Session::handle`] in
//! delivery order, and calls [`Session::advance`] whenever
//! [`Session::next_deadline`] has passed.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use covergrid_overlay::document::Document;
use covergrid_overlay::hit::HitTester;
use covergrid_overlay::schedule::Timeline;
use covergrid_overlay::types::PointerSample;
use covergrid_search::{SearchConfig, SearchEngine, SearchTarget};
use kurbo::Point;

use crate::config::Config;

/// An input event delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer moved over the overlay layer (viewport coordinates).
    PointerMove(Point),
    /// The pointer left the overlay layer.
    PointerLeave,
    /// The document scrolled.
    Scroll,
    /// The search box value changed.
    QueryInput(String),
    /// The search box lost focus.
    QueryBlur,
}

/// A host that renders both overlay and search mutations.
pub trait Host<K>: Document<K> + SearchTarget<K> {}

impl<K, T: Document<K> + SearchTarget<K>> Host<K> for T {}

/// Controller for one page session.
#[derive(Clone, Debug)]
pub struct Session<K> {
    hits: HitTester<K>,
    search: SearchEngine<K>,
    search_config: SearchConfig,
    refreshes: Timeline<()>,
}

impl<K: Copy + Eq + Hash + Debug> Session<K> {
    /// Start a session over cards in document order.
    ///
    /// Each card comes with its serialized corpus payload. A payload that does
    /// not parse excludes only that card from search.
    pub fn new<I, S>(config: &Config, cards: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        S: AsRef<str>,
    {
        let search = SearchEngine::from_payloads(cards);
        tracing::debug!(cards = search.len(), "session started");
        Self {
            hits: HitTester::new(config.overlay()),
            search,
            search_config: config.search(),
            refreshes: Timeline::new(),
        }
    }

    /// Pointer-side state.
    pub fn hits(&self) -> &HitTester<K> {
        &self.hits
    }

    /// Search-side state.
    pub fn search(&self) -> &SearchEngine<K> {
        &self.search
    }

    /// Handle one input event at time `now`.
    pub fn handle<H: Host<K>>(&mut self, host: &mut H, event: InputEvent, now: Duration) {
        match event {
            InputEvent::PointerMove(pt) => {
                self.hits
                    .on_pointer_sample(host, PointerSample::Move(pt), now);
            }
            InputEvent::PointerLeave => {
                self.hits.on_pointer_sample(host, PointerSample::Leave, now);
            }
            InputEvent::Scroll => {
                self.hits.on_scroll(host, now);
            }
            InputEvent::QueryInput(raw) => {
                self.search.apply_query(host, &raw);
            }
            InputEvent::QueryBlur => {
                self.refreshes
                    .schedule(now, self.search_config.blur_refresh_delay, ());
            }
        }
    }

    /// Run deferred work due at `now`. Returns how many tasks ran.
    ///
    /// A refresh scheduled by a blur re-reads `query_box_value`, the search
    /// box's value at fire time; an empty box clears the search.
    pub fn advance<H: Host<K>>(
        &mut self,
        host: &mut H,
        now: Duration,
        query_box_value: &str,
    ) -> usize {
        let mut ran = self.hits.advance(host, now);
        for () in self.refreshes.drain_due(now) {
            self.search.apply_query(host, query_box_value);
            ran += 1;
        }
        ran
    }

    /// When the next deferred task is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.hits.next_deadline(), self.refreshes.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(all(test, feature = "page_adapter"))]
mod tests {
    use covergrid_scene::{Cursor, ElementId, ElementState, Page};
    use kurbo::{Rect, Size, Vec2};

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    struct Grid {
        page: Page,
        cards: Vec<ElementId>,
        tips: Vec<ElementId>,
    }

    /// Three 100x150 cards in a row with 10px gaps, in an 800x600 viewport.
    fn grid() -> Grid {
        let mut page = Page::new(Size::new(800.0, 600.0));
        let mut cards = Vec::new();
        let mut tips = Vec::new();
        for i in 0..3 {
            let x = f64::from(i) * 110.0;
            let card = page.add_card(Rect::new(x, 0.0, x + 100.0, 150.0));
            tips.push(page.add_tooltip(card, Size::new(180.0, 90.0)));
            cards.push(card);
        }
        Grid { page, cards, tips }
    }

    fn session(g: &Grid) -> Session<ElementId> {
        let payloads = [
            r#"["Super Game", "SPRGM"]"#,
            r#"["Another Game"]"#,
            r#"["Super"#,
        ];
        Session::new(&Config::default(), g.cards.iter().copied().zip(payloads))
    }

    fn hovered(page: &Page, id: ElementId) -> bool {
        page.style(id).unwrap().state.contains(ElementState::HOVER)
    }

    fn hit(page: &Page, id: ElementId) -> bool {
        page.style(id).unwrap().state.contains(ElementState::HIT)
    }

    #[test]
    fn hover_shows_then_reveals_tooltip() {
        let mut g = grid();
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(50.0, 50.0)), ms(0));

        assert!(hovered(&g.page, g.cards[0]));
        assert_eq!(g.page.cursor(), Cursor::None);
        assert!(!g.page.is_shown(g.tips[0]));
        assert_eq!(s.next_deadline(), Some(ms(1)));

        assert_eq!(s.advance(&mut g.page, ms(1), ""), 1);
        assert!(g.page.is_shown(g.tips[0]));
        assert_eq!(
            g.page.style(g.tips[0]).unwrap().position,
            Some(Point::new(50.0, 50.0))
        );
    }

    #[test]
    fn gap_between_cards_is_no_card() {
        let mut g = grid();
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(105.0, 50.0)), ms(0));
        assert_eq!(s.hits().hovered(), None);
        assert_eq!(g.page.cursor(), Cursor::Initial);
    }

    #[test]
    fn crossing_cards_keeps_cursor_hidden() {
        let mut g = grid();
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(50.0, 50.0)), ms(0));
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(105.0, 50.0)), ms(16));
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(160.0, 50.0)), ms(32));
        assert!(!hovered(&g.page, g.cards[0]));
        assert!(hovered(&g.page, g.cards[1]));

        // The restore from leaving the first card fires while the second is hovered.
        s.advance(&mut g.page, ms(500), "");
        assert_eq!(g.page.cursor(), Cursor::None);
        assert!(g.page.is_shown(g.tips[1]));
        assert!(!g.page.is_shown(g.tips[0]));
    }

    #[test]
    fn leaving_restores_cursor_after_delay() {
        let mut g = grid();
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(50.0, 50.0)), ms(0));
        s.handle(&mut g.page, InputEvent::PointerLeave, ms(10));
        s.advance(&mut g.page, ms(50), "");
        assert_eq!(g.page.cursor(), Cursor::None);
        s.advance(&mut g.page, ms(110), "");
        assert_eq!(g.page.cursor(), Cursor::Initial);
    }

    #[test]
    fn tooltip_near_the_corner_flips_both_ways() {
        let mut g = grid();
        let card = g.page.add_card(Rect::new(700.0, 500.0, 800.0, 600.0));
        let tip = g.page.add_tooltip(card, Size::new(180.0, 90.0));
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(790.0, 590.0)), ms(0));
        let style = g.page.style(tip).unwrap();
        assert_eq!(style.position, Some(Point::new(610.0, 500.0)));
        assert_eq!(style.corner, Some(0b11));
    }

    #[test]
    fn scroll_rehovers_under_a_still_pointer() {
        let mut g = grid();
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(50.0, 50.0)), ms(0));
        g.page.scroll_to(Vec2::new(110.0, 0.0));
        s.handle(&mut g.page, InputEvent::Scroll, ms(5));
        assert_eq!(s.hits().hovered(), Some(g.cards[1]));
        assert!(!hovered(&g.page, g.cards[0]));
    }

    #[test]
    fn search_highlights_and_clears() {
        let mut g = grid();
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::QueryInput("super".into()), ms(0));
        assert!(g.page.search_mode());
        assert_eq!(s.search().results(), [g.cards[0]]);
        assert!(hit(&g.page, g.cards[0]));
        assert!(!hit(&g.page, g.cards[2]), "malformed corpus never matches");

        s.handle(&mut g.page, InputEvent::QueryInput("game".into()), ms(5));
        assert!(hit(&g.page, g.cards[1]));

        s.handle(&mut g.page, InputEvent::QueryInput("super x".into()), ms(9));
        assert!(s.search().results().is_empty());
        assert!(!hit(&g.page, g.cards[0]));
    }

    #[test]
    fn blur_rereads_the_query_box() {
        let mut g = grid();
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::QueryInput("sprgm".into()), ms(0));
        s.handle(&mut g.page, InputEvent::QueryBlur, ms(100));
        assert_eq!(s.next_deadline(), Some(ms(110)));

        assert_eq!(s.advance(&mut g.page, ms(109), ""), 0);
        assert!(g.page.search_mode());
        assert_eq!(s.advance(&mut g.page, ms(110), ""), 1);
        assert!(!g.page.search_mode());
        assert!(!hit(&g.page, g.cards[0]));
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn pipelines_are_independent() {
        let mut g = grid();
        let mut s = session(&g);
        s.handle(&mut g.page, InputEvent::PointerMove(Point::new(50.0, 50.0)), ms(0));
        s.handle(&mut g.page, InputEvent::QueryInput("another".into()), ms(1));
        assert_eq!(s.hits().hovered(), Some(g.cards[0]));
        assert!(hit(&g.page, g.cards[1]));
        assert!(!hit(&g.page, g.cards[0]));
    }
}
