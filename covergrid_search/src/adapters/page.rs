// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for the Covergrid Scene page model.
//!
//! Matched state maps to [`ElementState::HIT`] and search mode to the page's
//! search-mode flag.

use covergrid_scene::{ElementId, ElementState, Page};

use crate::types::{SearchMutation, SearchTarget};

impl SearchTarget<ElementId> for Page {
    fn apply_search(&mut self, mutation: SearchMutation<ElementId>) {
        match mutation {
            SearchMutation::SearchMode(on) => self.set_search_mode(on),
            SearchMutation::SetMatched { card, on } => self.set_state(card, ElementState::HIT, on),
            SearchMutation::ClearOrder(card) => self.set_order(card, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use covergrid_scene::{ElementState, Page};
    use kurbo::{Rect, Size};

    use crate::SearchEngine;

    #[test]
    fn matches_and_overrides_land_on_the_page() {
        let mut page = Page::new(Size::new(400.0, 300.0));
        let a = page.add_card(Rect::new(0.0, 0.0, 100.0, 150.0));
        let b = page.add_card(Rect::new(110.0, 0.0, 210.0, 150.0));
        page.set_order(a, Some(2));

        let mut search = SearchEngine::from_payloads([(a, r#"["Metroid"]"#), (b, r#"["Kirby"]"#)]);
        search.apply_query(&mut page, "metroid");
        assert!(page.search_mode());
        assert!(page.style(a).unwrap().state.contains(ElementState::HIT));
        assert!(!page.style(b).unwrap().state.contains(ElementState::HIT));

        search.apply_query(&mut page, "kirby");
        assert!(!page.style(a).unwrap().state.contains(ElementState::HIT));
        assert_eq!(page.style(a).unwrap().order, None);

        search.apply_query(&mut page, "");
        assert!(!page.search_mode());
        assert!(!page.style(b).unwrap().state.contains(ElementState::HIT));
    }
}
