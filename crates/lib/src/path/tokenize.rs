//! String path grammar.
//!
//! A path string is a sequence of segments:
//!
//! - a run of characters containing none of `.`, `[` and `]`;
//! - a bracketed segment `[...]` holding either a quoted run (`"..."` or
//!   `'...'`, backslash escapes the next character) or a bare run.
//!
//! Dots only separate. Empty brackets are dropped, so `a[]` reads as `a`.

use std::sync::LazyLock;

use regex::Regex;

use super::{Key, RawPath};

/// Matches one segment. Group 1 and 2 hold double and single quoted content,
/// group 3 holds bare bracket content. A dotted run has no group.
static PROP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"[^.\[\]]+|\[(?:"((?:[^"\\]|\\(?s:.))*)"|'((?:[^'\\]|\\(?s:.))*)'|([^\[\]]*))\]"#,
    )
    .expect("segment pattern is valid")
});

/// Converts a path expression into its segments without looking at any
/// container.
///
/// Key sequences are returned unchanged and an integer becomes a single
/// index key. Strings are parsed with [`parse`].
pub fn to_segments(raw: &RawPath) -> Vec<Key> {
    match raw {
        RawPath::Text(text) => parse(text),
        RawPath::Int(n) => vec![Key::Index(*n)],
        RawPath::Keys(keys) => keys.clone(),
    }
}

/// Parses a path string into segments.
///
/// ```
/// # use keypath::{Key, path::tokenize::parse};
/// let segments = parse(r#"a[0].b["c.d"]"#);
/// assert_eq!(
///     segments,
///     vec![Key::from("a"), Key::from("0"), Key::from("b"), Key::from("c.d")]
/// );
///
/// // The empty path is a single empty key
/// assert_eq!(parse(""), vec![Key::from("")]);
/// ```
pub fn parse(path: &str) -> Vec<Key> {
    if path.is_empty() {
        return vec![Key::Name(String::new())];
    }

    PROP_NAME
        .captures_iter(path)
        .filter_map(|caps| {
            if let Some(quoted) = caps.get(1).or_else(|| caps.get(2)) {
                return Some(unescape(quoted.as_str()));
            }
            match caps.get(3) {
                Some(bare) if bare.as_str().is_empty() => None,
                Some(bare) => Some(bare.as_str().to_string()),
                None => caps.get(0).map(|run| run.as_str().to_string()),
            }
        })
        .map(Key::Name)
        .collect()
}

/// Resolves backslash escapes: `\X` becomes `X`.
fn unescape(quoted: &str) -> String {
    let mut result = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                result.push(escaped);
            }
        } else {
            result.push(c);
        }
    }
    result
}
