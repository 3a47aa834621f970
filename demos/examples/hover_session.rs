// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hover over a grid of cards on the in-memory page.
//!
//! Moves the pointer across two cards and the gap between them, advancing
//! time like a 60 Hz event loop, and prints the page state after each step.
//!
//! Run:
//! - `RUST_LOG=covergrid_overlay=debug cargo run -p covergrid_demos --example hover_session`

use std::time::Duration;

use covergrid::config::Config;
use covergrid::session::{InputEvent, Session};
use covergrid_scene::{ElementState, Page};
use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = Page::new(Size::new(640.0, 400.0));
    let mut cards = Vec::new();
    let mut tips = Vec::new();
    for (i, natural) in [Size::new(180.0, 90.0), Size::new(260.0, 140.0)]
        .into_iter()
        .enumerate()
    {
        let x = i as f64 * 130.0;
        let card = page.add_card(Rect::new(x, 0.0, x + 120.0, 180.0));
        tips.push(page.add_tooltip(card, natural));
        cards.push((card, r#"["Demo"]"#));
    }
    let mut session = Session::new(&Config::default(), cards.iter().copied());

    let path = [
        InputEvent::PointerMove(Point::new(20.0, 40.0)),
        InputEvent::PointerMove(Point::new(60.0, 40.0)),
        InputEvent::PointerMove(Point::new(125.0, 40.0)),
        InputEvent::PointerMove(Point::new(200.0, 40.0)),
        InputEvent::PointerLeave,
    ];

    let frame = Duration::from_millis(16);
    let mut now = Duration::ZERO;
    for event in path {
        println!("== {event:?} at {now:?} ==");
        session.handle(&mut page, event, now);
        now += frame;
        session.advance(&mut page, now, "");
        for (i, (&(card, _), &tip)) in cards.iter().zip(&tips).enumerate() {
            let hovered = page
                .style(card)
                .is_some_and(|s| s.state.contains(ElementState::HOVER));
            let tip_style = page.style(tip);
            println!(
                "  card {i}: hovered={hovered} tooltip shown={} at {:?}",
                page.is_shown(tip),
                tip_style.and_then(|s| s.position)
            );
        }
        println!("  cursor={:?}", page.cursor());
    }

    // The cursor comes back once the restore delay has passed.
    now += Duration::from_millis(100);
    session.advance(&mut page, now, "");
    println!("== settled at {now:?} ==\n  cursor={:?}", page.cursor());
}
