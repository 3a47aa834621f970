// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutations rendered as class toggles and inline CSS.
//!
//! Browser-backed hosts can apply a [`StyleEdit`] directly: toggle each class,
//! then set or remove each inline property.

use covergrid_overlay::types::{Corner, CursorMode, Mutation, TooltipDisplay, TooltipVisibility};
use covergrid_search::SearchMutation;

/// Class marking the hovered card.
pub const HOVER_CLASS: &str = "hover";
/// Class marking a card that matches the search.
pub const HIT_CLASS: &str = "hit";
/// Class marking the grid while a search is active.
pub const SEARCH_RESULTS_CLASS: &str = "search-results";

/// Which element an edit applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StyleTarget<K> {
    /// A card or tooltip.
    Element(K),
    /// The pointer-capturing overlay layer.
    Overlay,
    /// The grid container.
    Grid,
}

/// One inline property; `None` removes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// CSS property name.
    pub property: &'static str,
    /// New value.
    pub value: Option<String>,
}

/// Class toggles and inline declarations for one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleEdit {
    /// Classes to add (`true`) or remove (`false`).
    pub classes: Vec<(&'static str, bool)>,
    /// Inline properties to set or remove.
    pub declarations: Vec<Declaration>,
}

impl StyleEdit {
    fn class(name: &'static str, on: bool) -> Self {
        Self {
            classes: vec![(name, on)],
            declarations: Vec::new(),
        }
    }

    fn set(mut self, property: &'static str, value: Option<String>) -> Self {
        self.declarations.push(Declaration { property, value });
        self
    }

    /// The declarations that set a value, as CSS text.
    ///
    /// ```
    /// use covergrid::style::overlay_edit;
    /// use covergrid_overlay::types::{Corner, Mutation, Placement};
    /// use kurbo::Point;
    ///
    /// let (_, edit) = overlay_edit(&Mutation::SetPosition {
    ///     tooltip: 3_u32,
    ///     placement: Placement { origin: Point::new(12.0, 40.5), corner: Corner::FLIP_Y },
    /// });
    /// assert_eq!(edit.css_text(), "left: 12px; top: 40.5px;");
    /// assert!(edit.classes.contains(&("bl", true)));
    /// ```
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .filter_map(|d| {
                let value = d.value.as_deref()?;
                Some(format!("{}: {value};", d.property))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn px(v: f64) -> Option<String> {
    Some(format!("{v}px"))
}

/// Render an overlay mutation.
pub fn overlay_edit<K: Copy>(mutation: &Mutation<K>) -> (StyleTarget<K>, StyleEdit) {
    match *mutation {
        Mutation::SetHover { card, on } => {
            (StyleTarget::Element(card), StyleEdit::class(HOVER_CLASS, on))
        }
        Mutation::SetDisplay { tooltip, display } => (
            StyleTarget::Element(tooltip),
            StyleEdit::default().set(
                "display",
                match display {
                    TooltipDisplay::Default => None,
                    TooltipDisplay::Block => Some("block".into()),
                },
            ),
        ),
        Mutation::SetVisibility {
            tooltip,
            visibility,
        } => (
            StyleTarget::Element(tooltip),
            StyleEdit::default().set(
                "visibility",
                match visibility {
                    TooltipVisibility::Unset => None,
                    TooltipVisibility::Hidden => Some("hidden".into()),
                    TooltipVisibility::Visible => Some("visible".into()),
                },
            ),
        ),
        Mutation::SetMinWidth { tooltip, width } => (
            StyleTarget::Element(tooltip),
            StyleEdit::default().set("min-width", px(width)),
        ),
        Mutation::SetPosition { tooltip, placement } => {
            let classes = Corner::CLASS_NAMES
                .iter()
                .map(|&name| (name, name == placement.corner.class_name()))
                .collect();
            let edit = StyleEdit {
                classes,
                declarations: Vec::new(),
            }
            .set("left", px(placement.origin.x))
            .set("top", px(placement.origin.y));
            (StyleTarget::Element(tooltip), edit)
        }
        Mutation::SetCursor(mode) => (
            StyleTarget::Overlay,
            StyleEdit::default().set(
                "cursor",
                Some(
                    match mode {
                        CursorMode::Initial => "initial",
                        CursorMode::Hidden => "none",
                    }
                    .into(),
                ),
            ),
        ),
    }
}

/// Render a search mutation.
pub fn search_edit<K: Copy>(mutation: &SearchMutation<K>) -> (StyleTarget<K>, StyleEdit) {
    match *mutation {
        SearchMutation::SearchMode(on) => {
            (StyleTarget::Grid, StyleEdit::class(SEARCH_RESULTS_CLASS, on))
        }
        SearchMutation::SetMatched { card, on } => {
            (StyleTarget::Element(card), StyleEdit::class(HIT_CLASS, on))
        }
        SearchMutation::ClearOrder(card) => (
            StyleTarget::Element(card),
            StyleEdit::default().set("order", None),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_renders_min_width() {
        let (target, edit) = overlay_edit(&Mutation::SetMinWidth {
            tooltip: 5_u32,
            width: 212.0,
        });
        assert_eq!(target, StyleTarget::Element(5));
        assert_eq!(edit.css_text(), "min-width: 212px;");
    }

    #[test]
    fn resets_remove_inline_properties() {
        let (_, edit) = overlay_edit(&Mutation::SetDisplay {
            tooltip: 5_u32,
            display: TooltipDisplay::Default,
        });
        assert_eq!(
            edit.declarations,
            [Declaration {
                property: "display",
                value: None
            }]
        );
        assert_eq!(edit.css_text(), "");
    }

    #[test]
    fn exactly_one_corner_class_is_on() {
        let (_, edit) = overlay_edit(&Mutation::SetPosition {
            tooltip: 1_u32,
            placement: covergrid_overlay::types::Placement {
                origin: kurbo::Point::new(0.0, 0.0),
                corner: Corner::FLIP_X | Corner::FLIP_Y,
            },
        });
        let on: Vec<_> = edit.classes.iter().filter(|(_, on)| *on).collect();
        assert_eq!(on, [&("br", true)]);
        assert_eq!(edit.classes.len(), 4);
    }

    #[test]
    fn cursor_targets_the_overlay() {
        let (target, edit) = overlay_edit(&Mutation::<u32>::SetCursor(CursorMode::Hidden));
        assert_eq!(target, StyleTarget::Overlay);
        assert_eq!(edit.css_text(), "cursor: none;");
    }

    #[test]
    fn search_mutations_toggle_classes() {
        assert_eq!(
            search_edit(&SearchMutation::<u32>::SearchMode(true)),
            (StyleTarget::Grid, StyleEdit::class(SEARCH_RESULTS_CLASS, true))
        );
        let (target, edit) = search_edit(&SearchMutation::SetMatched { card: 4_u32, on: false });
        assert_eq!(target, StyleTarget::Element(4));
        assert_eq!(edit.classes, [(HIT_CLASS, false)]);
    }
}
