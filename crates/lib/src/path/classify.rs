//! Key classification.
//!
//! Two questions are answered here: whether a raw path is one literal key
//! (rather than something to tokenize), and whether a segment is a list index.

use std::sync::LazyLock;

use regex::Regex;

use super::{Key, RawPath};
use crate::{Value, constants::MAX_SAFE_INTEGER};

static PLAIN_PROP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]*$").expect("plain pattern is valid"));

/// A `.` or any complete bracket segment.
static DEEP_PROP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.|\[(?:[^\[\]]*|"(?:[^"\\]|\\(?s:.))*"|'(?:[^'\\]|\\(?s:.))*')\]"#)
        .expect("deep pattern is valid")
});

static UNSIGNED_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0|[1-9][0-9]*)$").expect("index pattern is valid"));

/// Returns true if `raw` should be used as a single key against `container`.
///
/// Integers are always literal and key sequences never are. A string is
/// literal when it is a plain identifier, when it has no path syntax, or when
/// `container` is a map that already holds the whole string as a key. The
/// last rule makes the answer depend on the container:
///
/// ```
/// # use keypath::{Map, RawPath, Value, path::classify::is_literal_key};
/// let raw = RawPath::from("a.b");
/// let flat = Value::from(Map::new().with("a.b", 1));
///
/// assert!(is_literal_key(&raw, &flat));
/// assert!(!is_literal_key(&raw, &Value::map()));
/// ```
pub fn is_literal_key(raw: &RawPath, container: &Value) -> bool {
    match raw {
        RawPath::Int(_) => true,
        RawPath::Keys(_) => false,
        RawPath::Text(text) => {
            PLAIN_PROP.is_match(text)
                || !DEEP_PROP.is_match(text)
                || container
                    .as_map()
                    .is_some_and(|map| map.contains_key(text))
        }
    }
}

/// Returns the list position `key` denotes, if any.
///
/// Only non-negative integers and canonical unsigned decimal strings (no
/// sign, no leading zero, no fraction) qualify, and the position must be
/// below `bound`. Without a bound the limit is [`MAX_SAFE_INTEGER`].
pub fn as_index(key: &Key, bound: Option<usize>) -> Option<usize> {
    let position = match key {
        Key::Index(n) => u64::try_from(*n).ok()?,
        Key::Name(name) if UNSIGNED_INT.is_match(name) => name.parse::<u64>().ok()?,
        Key::Name(_) => return None,
    };
    let limit = bound.map_or(MAX_SAFE_INTEGER, |b| b as u64);
    if position < limit {
        usize::try_from(position).ok()
    } else {
        None
    }
}

/// Returns true if `key` is a list index below `bound`.
pub fn is_index(key: &Key, bound: Option<usize>) -> bool {
    as_index(key, bound).is_some()
}
