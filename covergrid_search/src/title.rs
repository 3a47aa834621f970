// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Searchable forms of a catalog title.
//!
//! A title is searched in its lower-cased form, its sortable form (leading
//! article moved to the end, trademark marks dropped), and one extra form per
//! cleanup step. Steps are cumulative and a form is only added when it is new:
//!
//! 1. `,` `.` `…` removed.
//! 2. `;` `:` `'` `-` removed; `|` `\` `/` `(` `)` become spaces; space runs collapsed.
//! 3. Trailing zero groups abbreviated: `3000` becomes `3k`, then `m`, `g`, `t`.
//!
//! Step 2 is what lets `"zelda a link"` find `"Zelda: A Link"`, since a query
//! gap needs whitespace where the title has a colon.

use std::sync::LazyLock;

use regex::Regex;

/// English and Italian articles, with their trailing separator.
const ARTICLES: &str = r"(an?\s+|the\s+|il?\s+|l[oiae]\s+|gli\s+|un[oa]?\s+|(?:l|un)')";

fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid regex")
}

static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| rx(&format!(r"^{ARTICLES}(.+?)$")));

static SORTABLE_CLEANUP: LazyLock<[Regex; 2]> =
    LazyLock::new(|| [rx(&format!(r", {ARTICLES}$")), rx(r"\(tm\)|\(r\)")]);

static STEPS: LazyLock<[Vec<(Regex, &'static str)>; 3]> = LazyLock::new(|| {
    [
        vec![(rx(r"[,.…]"), "")],
        vec![
            (rx(r"[;:'-]"), ""),
            (rx(r"[|\\/()]"), " "),
            (rx(r"\s{2,}"), " "),
        ],
        vec![
            (rx(r"([0-9])0{12}(\s|$)"), "${1}t${2}"),
            (rx(r"([0-9])0{9}(\s|$)"), "${1}g${2}"),
            (rx(r"([0-9])0{6}(\s|$)"), "${1}m${2}"),
            (rx(r"([0-9])0{3}(\s|$)"), "${1}k${2}"),
        ],
    ]
});

/// The sortable form: lower-cased, leading article moved to the end.
pub(crate) fn sortable(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut out = LEADING_ARTICLE
        .replace(&lower, "${2}, ${1}")
        .trim()
        .to_owned();
    for re in SORTABLE_CLEANUP.iter() {
        out = re.replace_all(&out, "").into_owned();
    }
    out
}

/// Every distinct searchable form of `title`, most literal first.
pub(crate) fn searchable_forms(title: &str) -> Vec<String> {
    let title = title.trim().replace("...", "…");
    let mut forms = vec![title.to_lowercase()];
    let mut item = sortable(&title);
    push_new(&mut forms, item.clone());
    for step in STEPS.iter() {
        for (re, with) in step {
            let next = re.replace_all(&item, *with).trim().to_owned();
            item = next;
        }
        push_new(&mut forms, item.clone());
    }
    forms
}

fn push_new(forms: &mut Vec<String>, form: String) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}
