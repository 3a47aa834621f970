// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement near the viewport edges.
//!
//! Places a fixed-size tooltip at pointer positions around an 800x600
//! viewport and prints the chosen corner and the inline CSS a browser host
//! would apply.
//!
//! Run:
//! - `cargo run -p covergrid_demos --example tooltip_placement`

use covergrid::style::overlay_edit;
use covergrid_overlay::tooltip::place;
use covergrid_overlay::types::{Corner, Mutation};
use kurbo::{Point, Size};

fn main() {
    let viewport = Size::new(800.0, 600.0);
    let tooltip = Size::new(220.0, 120.0);

    let pointers = [
        ("middle", Point::new(300.0, 200.0)),
        ("right edge", Point::new(700.0, 200.0)),
        ("bottom edge", Point::new(300.0, 550.0)),
        ("bottom-right", Point::new(790.0, 590.0)),
        ("narrow left", Point::new(100.0, 200.0)),
    ];

    println!(
        "== Tooltip {}x{} in {}x{} ==",
        tooltip.width, tooltip.height, viewport.width, viewport.height
    );
    for (label, pt) in pointers {
        let placement = place(pt, tooltip, viewport);
        let (_, edit) = overlay_edit(&Mutation::SetPosition {
            tooltip: 0_u32,
            placement,
        });
        println!(
            "  {label:<13} pointer=({:>5}, {:>5}) corner={} css=\"{}\"",
            pt.x,
            pt.y,
            placement.corner.class_name(),
            edit.css_text()
        );
    }

    let corner = place(Point::new(790.0, 590.0), tooltip, viewport).corner;
    assert_eq!(corner, Corner::FLIP_X | Corner::FLIP_Y);
}
