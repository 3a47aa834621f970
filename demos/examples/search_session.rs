// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental search as the user types.
//!
//! Loads session options from an inline JSON document, feeds one query
//! change per keystroke, and prints the matching cards. One card has a
//! malformed corpus and is reported once, then never matches. Finally,
//! corpora built from bare titles show which punctuation-free forms match.
//!
//! Run:
//! - `RUST_LOG=covergrid_search=debug cargo run -p covergrid_demos --example search_session`

use std::time::Duration;

use covergrid::config::Config;
use covergrid::session::{InputEvent, Session};
use covergrid::style::search_edit;
use covergrid_scene::{ElementId, Page};
use covergrid_search::{Corpus, SearchEngine};
use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;

const CATALOG: &[(&str, &str)] = &[
    ("Super Game", r#"["Super Game", "SPRGM"]"#),
    ("Legend of the Hero", r#"["Legend of the Hero", "LOTH"]"#),
    ("Hero Kart", r#"["Hero Kart", "HK"]"#),
    ("Broken Entry", r#"["Broken"#),
    ("Super Star Racing", r#"["Super Star Racing", "SSR"]"#),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_json_str(
        r#"{
            /* re-read the search box shortly after it loses focus */
            "blurRefreshMs": 10
        }"#,
    )
    .unwrap_or_default();

    let mut page = Page::new(Size::new(800.0, 600.0));
    let cards: Vec<_> = CATALOG
        .iter()
        .enumerate()
        .map(|(i, &(_, payload))| {
            let x = i as f64 * 130.0;
            (page.add_card(Rect::new(x, 0.0, x + 120.0, 180.0)), payload)
        })
        .collect();
    let name_of = |id: ElementId| {
        cards
            .iter()
            .position(|&(c, _)| c == id)
            .map_or("?", |i| CATALOG[i].0)
    };

    let mut session = Session::new(&config, cards.iter().copied());
    let mut now = Duration::ZERO;
    let keystrokes = [
        "s",
        "su",
        "super",
        "super ",
        "super r",
        "hero",
        "legend hero",
        "  LEGEND   hero ",
    ];
    for typed in keystrokes {
        session.handle(&mut page, InputEvent::QueryInput(typed.to_owned()), now);
        let names: Vec<_> = session
            .search()
            .results()
            .iter()
            .map(|&id| name_of(id))
            .collect();
        println!("{typed:<20} -> {names:?}");
        now += Duration::from_millis(120);
    }

    println!("== blur with an empty box ==");
    session.handle(&mut page, InputEvent::QueryBlur, now);
    let due = session.next_deadline().unwrap_or(now);
    session.advance(&mut page, due, "");
    println!(
        "search mode={} results={:?}",
        page.search_mode(),
        session.search().results()
    );

    println!("== mutations for one query, as CSS edits ==");
    let mut engine = SearchEngine::from_payloads(cards.iter().copied());
    for m in engine.on_query_change("hero") {
        let (target, edit) = search_edit(&m);
        println!("  {target:?}: {:?}", edit.classes);
    }

    println!("== corpora built from titles ==");
    let titles = ["The Legend of Zelda: A Link to the Past", "Half-Life / Opposing Force"];
    let mut by_title = SearchEngine::new(
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| (i, Ok(Corpus::from_title(title)))),
    );
    for typed in ["zelda a link", "legend zelda the", "halflife opposing"] {
        by_title.on_query_change(typed);
        let names: Vec<_> = by_title.results().iter().map(|&i| titles[i]).collect();
        println!("{typed:<20} -> {names:?}");
    }
}
