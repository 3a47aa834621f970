// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query normalization.

/// Normalize a raw query string.
///
/// Trims surrounding whitespace, collapses internal whitespace runs to a
/// single space, and lower-cases the result.
///
/// ```
/// use covergrid_search::normalize_query;
///
/// assert_eq!(normalize_query("  Foo \t  BAR "), "foo bar");
/// assert_eq!(normalize_query(" \n "), "");
/// ```
pub fn normalize_query(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_normal_is_unchanged() {
        assert_eq!(normalize_query("super game"), "super game");
    }

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize_query("foo \u{a0}\n\tbaz"), "foo baz");
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(normalize_query("ÉCOLE Über"), "école über");
    }
}
