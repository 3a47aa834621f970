// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core page implementation: structure, styles, point queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size, Vec2};

use crate::types::{
    Cursor, Display, ElementFlags, ElementId, ElementState, ElementStyle, LocalElement, Visibility,
};

/// An in-memory document holding a grid of cards.
///
/// A fresh page contains two elements: the document root, which covers the
/// whole plane at the bottom of the stack, and the overlay layer, a
/// viewport-sized pickable element on top of everything that receives pointer
/// input. Cards are inserted as children of the root; tooltips as children of
/// their card.
#[derive(Clone)]
pub struct Page {
    elements: Vec<Element>,
    cards: Vec<ElementId>,
    root: ElementId,
    overlay: ElementId,
    viewport: Size,
    scroll: Vec2,
    cursor: Cursor,
    search_mode: bool,
}

impl core::fmt::Debug for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Page")
            .field("elements", &self.elements.len())
            .field("cards", &self.cards.len())
            .field("viewport", &self.viewport)
            .field("scroll", &self.scroll)
            .field("cursor", &self.cursor)
            .field("search_mode", &self.search_mode)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Element {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    depth: u32,
    local: LocalElement,
    natural: Size,
    style: ElementStyle,
}

impl Element {
    fn new(parent: Option<ElementId>, depth: u32, local: LocalElement) -> Self {
        let natural = local.bounds.size();
        Self {
            parent,
            children: Vec::new(),
            depth,
            local,
            natural,
            style: ElementStyle::default(),
        }
    }
}

impl Page {
    /// Create a page with the given viewport size.
    pub fn new(viewport: Size) -> Self {
        let mut page = Self {
            elements: Vec::new(),
            cards: Vec::new(),
            root: ElementId::new(0),
            overlay: ElementId::new(0),
            viewport,
            scroll: Vec2::ZERO,
            cursor: Cursor::default(),
            search_mode: false,
        };
        page.root = page.insert(
            None,
            LocalElement {
                bounds: Rect::new(
                    f64::NEG_INFINITY,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    f64::INFINITY,
                ),
                z_index: 0,
                flags: ElementFlags::default() | ElementFlags::FIXED,
            },
        );
        page.overlay = page.insert(
            Some(page.root),
            LocalElement {
                bounds: Rect::from_origin_size(Point::ORIGIN, viewport),
                z_index: 1,
                flags: ElementFlags::default() | ElementFlags::FIXED,
            },
        );
        page
    }

    /// Insert an element as a child of `parent` (or as a detached root if `None`).
    pub fn insert(&mut self, parent: Option<ElementId>, local: LocalElement) -> ElementId {
        let depth = parent
            .and_then(|p| self.element(p))
            .map(|p| p.depth + 1)
            .unwrap_or(0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        let id = ElementId::new(self.elements.len() as u32);
        self.elements.push(Element::new(parent, depth, local));
        if let Some(p) = parent
            && let Some(parent) = self.elements.get_mut(p.idx())
        {
            parent.children.push(id);
        }
        id
    }

    /// Insert a card with document-space `bounds`.
    pub fn add_card(&mut self, bounds: Rect) -> ElementId {
        let id = self.insert(
            Some(self.root),
            LocalElement {
                bounds,
                ..Default::default()
            },
        );
        self.cards.push(id);
        id
    }

    /// Insert the tooltip of `card`; `natural` is the size its content lays out to.
    ///
    /// Tooltips never take part in point queries.
    pub fn add_tooltip(&mut self, card: ElementId, natural: Size) -> ElementId {
        self.insert(
            Some(card),
            LocalElement {
                bounds: Rect::from_origin_size(Point::ORIGIN, natural),
                z_index: 2,
                flags: ElementFlags::VISIBLE | ElementFlags::TOOLTIP,
            },
        )
    }

    /// The document root.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The overlay layer receiving pointer input.
    pub fn overlay(&self) -> ElementId {
        self.overlay
    }

    /// Cards in document order.
    pub fn cards(&self) -> &[ElementId] {
        &self.cards
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport; the overlay layer follows.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        let overlay = self.overlay;
        if let Some(e) = self.element_mut(overlay) {
            e.local.bounds = Rect::from_origin_size(Point::ORIGIN, viewport);
        }
    }

    /// Current scroll offset.
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Scroll the document to `offset`.
    pub fn scroll_to(&mut self, offset: Vec2) {
        self.scroll = offset;
    }

    /// Cursor currently shown over the overlay.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Set the cursor shown over the overlay.
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Whether the grid is in search-results mode.
    pub fn search_mode(&self) -> bool {
        self.search_mode
    }

    /// Toggle search-results mode.
    pub fn set_search_mode(&mut self, on: bool) {
        self.search_mode = on;
    }

    /// Inline style of an element.
    pub fn style(&self, id: ElementId) -> Option<&ElementStyle> {
        self.element(id).map(|e| &e.style)
    }

    /// Parent of an element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).and_then(|e| e.parent)
    }

    /// The first child flagged as a tooltip.
    pub fn tooltip_of(&self, card: ElementId) -> Option<ElementId> {
        let card = self.element(card)?;
        card.children.iter().copied().find(|c| {
            self.element(*c)
                .is_some_and(|e| e.local.flags.contains(ElementFlags::TOOLTIP))
        })
    }

    /// Set or clear state classes.
    pub fn set_state(&mut self, id: ElementId, state: ElementState, on: bool) {
        if let Some(e) = self.element_mut(id) {
            e.style.state.set(state, on);
        }
    }

    /// Set the display override.
    pub fn set_display(&mut self, id: ElementId, display: Display) {
        if let Some(e) = self.element_mut(id) {
            e.style.display = display;
        }
    }

    /// Set the visibility override.
    pub fn set_visibility(&mut self, id: ElementId, visibility: Visibility) {
        if let Some(e) = self.element_mut(id) {
            e.style.visibility = visibility;
        }
    }

    /// Set the minimum width floor.
    pub fn set_min_width(&mut self, id: ElementId, width: f64) {
        if let Some(e) = self.element_mut(id) {
            e.style.min_width = Some(width);
        }
    }

    /// Place an element at `origin` (viewport space) with the given corner class.
    pub fn set_position(&mut self, id: ElementId, origin: Point, corner: u8) {
        if let Some(e) = self.element_mut(id) {
            e.style.position = Some(origin);
            e.style.corner = Some(corner);
        }
    }

    /// Set or clear the ordering override.
    pub fn set_order(&mut self, id: ElementId, order: Option<i32>) {
        if let Some(e) = self.element_mut(id) {
            e.style.order = order;
        }
    }

    /// Whether the element currently takes part in layout.
    ///
    /// Tooltips are suppressed by style rules unless forced to block display
    /// or their card is hovered.
    pub fn is_laid_out(&self, id: ElementId) -> bool {
        let Some(e) = self.element(id) else {
            return false;
        };
        if !e.local.flags.contains(ElementFlags::TOOLTIP) {
            return e.local.flags.contains(ElementFlags::VISIBLE);
        }
        e.style.display == Display::Block
            || e.parent
                .and_then(|p| self.element(p))
                .is_some_and(|p| p.style.state.contains(ElementState::HOVER))
    }

    /// Whether the element is laid out and not hidden.
    pub fn is_shown(&self, id: ElementId) -> bool {
        self.is_laid_out(id)
            && self
                .element(id)
                .is_some_and(|e| e.style.visibility != Visibility::Hidden)
    }

    /// Laid-out size of an element; zero when it is not laid out.
    ///
    /// The width honors any applied minimum width.
    pub fn natural_size(&self, id: ElementId) -> Size {
        if !self.is_laid_out(id) {
            return Size::ZERO;
        }
        let Some(e) = self.element(id) else {
            return Size::ZERO;
        };
        let width = match e.style.min_width {
            Some(min) => e.natural.width.max(min),
            None => e.natural.width,
        };
        Size::new(width, e.natural.height)
    }

    /// Bounding box of an element in viewport space.
    pub fn bounding_box(&self, id: ElementId) -> Option<Rect> {
        let e = self.element(id)?;
        if e.local.flags.contains(ElementFlags::FIXED) {
            Some(e.local.bounds)
        } else {
            Some(e.local.bounds - self.scroll)
        }
    }

    /// All pickable elements under a viewport-space point, topmost first.
    ///
    /// Higher `z_index` comes first; on equal z, deeper elements come before
    /// their ancestors, then newer elements before older ones.
    pub fn elements_from_point(&self, pt: Point) -> Vec<ElementId> {
        let mut hits: Vec<ElementId> = Vec::new();
        for (i, e) in self.elements.iter().enumerate() {
            if !e
                .local
                .flags
                .contains(ElementFlags::VISIBLE | ElementFlags::PICKABLE)
            {
                continue;
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            let id = ElementId::new(i as u32);
            if self.bounding_box(id).is_some_and(|b| contains(b, pt)) {
                hits.push(id);
            }
        }
        hits.sort_by(|a, b| {
            let (ea, eb) = (&self.elements[a.idx()], &self.elements[b.idx()]);
            eb.local
                .z_index
                .cmp(&ea.local.z_index)
                .then(eb.depth.cmp(&ea.depth))
                .then(b.cmp(a))
        });
        hits
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.idx())
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.idx())
    }
}

// Half-open on the far edges so adjacent cards never both claim a point.
fn contains(r: Rect, pt: Point) -> bool {
    pt.x >= r.x0 && pt.x < r.x1 && pt.y >= r.y0 && pt.y < r.y1
}
