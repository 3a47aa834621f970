// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenient template substitution.
//!
//! Placeholders are `{}` (next positional argument), `{N}` (positional
//! argument `N`) and `{name}` (named argument). A placeholder with no matching
//! argument is left in the output unchanged, so a template can be filled in
//! several passes. `{{` and `}}` produce literal braces.
//!
//! ```
//! use covergrid::template::{TemplateKey, format_template};
//!
//! let out = format_template(
//!     "#card-{0} {{ order: {0}; background: {image}; {unused} }}",
//!     &["12"],
//!     &[("image", "url(a.png)")],
//! );
//! assert_eq!(out.text, "#card-12 { order: 12; background: url(a.png); {unused} }");
//! assert_eq!(out.used_keys, [TemplateKey::Index(0), TemplateKey::Name("image".into())]);
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{(\w*)\}").expect("invalid regex"));

/// An argument referenced by a template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// A positional argument.
    Index(usize),
    /// A named argument.
    Name(String),
}

/// Result of [`format_template`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formatted {
    /// The substituted text.
    pub text: String,
    /// Arguments that were substituted, in first-use order, without repeats.
    pub used_keys: Vec<TemplateKey>,
}

/// Substitute `positional` and `named` arguments into `template`.
pub fn format_template(template: &str, positional: &[&str], named: &[(&str, &str)]) -> Formatted {
    let mut next_auto = 0;
    let mut used_keys = Vec::new();
    let text = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        let whole = &caps[0];
        let Some(key) = caps.get(1).map(|m| m.as_str()) else {
            return whole[..1].to_owned();
        };
        let key = if key.is_empty() {
            let k = TemplateKey::Index(next_auto);
            next_auto += 1;
            k
        } else if let Ok(index) = key.parse::<usize>() {
            TemplateKey::Index(index)
        } else {
            TemplateKey::Name(key.to_owned())
        };
        let value = match &key {
            TemplateKey::Index(i) => positional.get(*i).copied(),
            TemplateKey::Name(name) => named
                .iter()
                .find_map(|(n, v)| (n == name).then_some(*v)),
        };
        match value {
            Some(v) => {
                if !used_keys.contains(&key) {
                    used_keys.push(key);
                }
                v.to_owned()
            }
            None => whole.to_owned(),
        }
    });
    Formatted {
        text: text.into_owned(),
        used_keys,
    }
}
