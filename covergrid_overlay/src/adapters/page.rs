// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for the Covergrid Scene page model.
//!
//! ## Feature
//!
//! Enable with `page_adapter`.
//!
//! ## Notes
//!
//! [`Page`] already answers stacked point queries in the shape the default
//! [`HitPolicy`](crate::hit::HitPolicy) expects (overlay, card, root), so the
//! adapter is a direct mapping of queries and mutations.

use covergrid_scene::{Cursor, Display, ElementId, ElementState, Page, Visibility};
use kurbo::{Point, Size};

use crate::document::Document;
use crate::types::{CursorMode, Mutation, TooltipDisplay, TooltipVisibility};

impl Document<ElementId> for Page {
    fn nodes_at(&self, pt: Point) -> Vec<ElementId> {
        self.elements_from_point(pt)
    }

    fn viewport(&self) -> Size {
        Page::viewport(self)
    }

    fn tooltip_of(&self, card: ElementId) -> Option<ElementId> {
        Page::tooltip_of(self, card)
    }

    fn natural_size(&self, node: ElementId) -> Size {
        Page::natural_size(self, node)
    }

    fn apply(&mut self, mutation: Mutation<ElementId>) {
        match mutation {
            Mutation::SetHover { card, on } => self.set_state(card, ElementState::HOVER, on),
            Mutation::SetDisplay { tooltip, display } => self.set_display(
                tooltip,
                match display {
                    TooltipDisplay::Default => Display::Default,
                    TooltipDisplay::Block => Display::Block,
                },
            ),
            Mutation::SetVisibility {
                tooltip,
                visibility,
            } => self.set_visibility(
                tooltip,
                match visibility {
                    TooltipVisibility::Unset => Visibility::Unset,
                    TooltipVisibility::Hidden => Visibility::Hidden,
                    TooltipVisibility::Visible => Visibility::Visible,
                },
            ),
            Mutation::SetMinWidth { tooltip, width } => self.set_min_width(tooltip, width),
            Mutation::SetPosition { tooltip, placement } => {
                self.set_position(tooltip, placement.origin, placement.corner.bits());
            }
            Mutation::SetCursor(mode) => self.set_cursor(match mode {
                CursorMode::Initial => Cursor::Initial,
                CursorMode::Hidden => Cursor::None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use covergrid_scene::Page;
    use kurbo::{Point, Rect, Size};

    use crate::hit::{HitTester, OverlayConfig};
    use crate::types::{HoverChange, PointerSample};

    #[test]
    fn tooltip_is_measured_then_revealed_on_page() {
        let mut page = Page::new(Size::new(300.0, 200.0));
        let card = page.add_card(Rect::new(150.0, 100.0, 250.0, 200.0));
        let tip = page.add_tooltip(card, Size::new(140.0, 60.0));

        let mut hits = HitTester::new(OverlayConfig::default());
        let change = hits.on_pointer_sample(
            &mut page,
            PointerSample::Move(Point::new(200.0, 150.0)),
            Duration::ZERO,
        );
        assert_eq!(change, HoverChange::Entered(card));
        assert_eq!(hits.tooltips().measured_width(tip), Some(140.0));
        assert!(!page.is_shown(tip), "hidden until the next tick");

        hits.advance(&mut page, Duration::from_millis(1));
        assert!(page.is_shown(tip));
        let style = page.style(tip).unwrap();
        assert_eq!(style.min_width, Some(140.0));
        // Overflows right and bottom, with room on the left and above.
        assert_eq!(style.position, Some(Point::new(60.0, 90.0)));
        assert_eq!(style.corner, Some(0b11));
    }
}
