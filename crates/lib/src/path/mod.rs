//! Path types for addressing nested values.
//!
//! A path can be given in three forms, all captured by [`RawPath`]:
//!
//! - a string using dot and bracket syntax (`a[0].b["c.d"]`),
//! - a single integer key,
//! - an explicit sequence of [`Key`]s, used as-is.
//!
//! Every form resolves to a [`KeyPath`], the canonical ordered list of
//! segments the engine walks. String resolution is two-phase: the whole
//! string is first checked as a literal key of the container
//! ([`classify::is_literal_key`]) and only otherwise tokenized
//! ([`tokenize::parse`]).
//!
//! # Usage
//!
//! ```rust
//! use keypath::{Key, KeyPath, keypath};
//! use std::str::FromStr;
//!
//! // Parse from a string
//! let path = KeyPath::from_str("user.tags[1]")?;
//!
//! // Or build from keys
//! let built = keypath!["user", "tags", 1];
//!
//! let parsed: Vec<String> = path.iter().map(Key::to_string).collect();
//! assert_eq!(parsed, vec!["user", "tags", "1"]);
//! assert_eq!(built.to_string(), "user.tags[1]");
//! # Ok::<(), std::convert::Infallible>(())
//! ```

use std::{borrow::Cow, fmt, num::TryFromIntError, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Value, constants::EMPTY_PATH_DISPLAY};

pub mod classify;
pub mod tokenize;

pub use classify::{as_index, is_index, is_literal_key};
pub use tokenize::{parse, to_segments};

/// Identifiers that render without brackets in [`KeyPath`]'s `Display`.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

/// One segment of a path.
///
/// Map keys are strings; an integer key addresses the map entry named by its
/// decimal form. Whether a key is a list index is decided by
/// [`classify::as_index`], not by the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// An integer key
    Index(i64),
    /// A string key
    Name(String),
}

impl Key {
    /// Returns the map key this segment addresses.
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            Key::Name(name) => Cow::Borrowed(name),
            Key::Index(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{name}"),
            Key::Index(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Index(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Index(n as i64)
    }
}

impl TryFrom<usize> for Key {
    type Error = TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        i64::try_from(n).map(Key::Index)
    }
}

/// A path expression as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPath {
    /// Dot/bracket syntax, or a literal key of the container
    Text(String),
    /// A single integer key
    Int(i64),
    /// Keys used verbatim, never parsed
    Keys(Vec<Key>),
}

impl fmt::Display for RawPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawPath::Text(text) => write!(f, "{text:?}"),
            RawPath::Int(n) => write!(f, "{n}"),
            RawPath::Keys(keys) => {
                write!(f, "[")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for RawPath {
    fn from(text: &str) -> Self {
        RawPath::Text(text.to_string())
    }
}

impl From<String> for RawPath {
    fn from(text: String) -> Self {
        RawPath::Text(text)
    }
}

impl From<&String> for RawPath {
    fn from(text: &String) -> Self {
        RawPath::Text(text.clone())
    }
}

impl From<i64> for RawPath {
    fn from(n: i64) -> Self {
        RawPath::Int(n)
    }
}

impl From<i32> for RawPath {
    fn from(n: i32) -> Self {
        RawPath::Int(n as i64)
    }
}

impl TryFrom<usize> for RawPath {
    type Error = TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        i64::try_from(n).map(RawPath::Int)
    }
}

impl From<Key> for RawPath {
    fn from(key: Key) -> Self {
        RawPath::Keys(vec![key])
    }
}

impl From<Vec<Key>> for RawPath {
    fn from(keys: Vec<Key>) -> Self {
        RawPath::Keys(keys)
    }
}

impl From<&[Key]> for RawPath {
    fn from(keys: &[Key]) -> Self {
        RawPath::Keys(keys.to_vec())
    }
}

impl From<Vec<&str>> for RawPath {
    fn from(keys: Vec<&str>) -> Self {
        RawPath::Keys(keys.into_iter().map(Key::from).collect())
    }
}

impl From<Vec<String>> for RawPath {
    fn from(keys: Vec<String>) -> Self {
        RawPath::Keys(keys.into_iter().map(Key::from).collect())
    }
}

impl From<&[&str]> for RawPath {
    fn from(keys: &[&str]) -> Self {
        RawPath::Keys(keys.iter().copied().map(Key::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RawPath {
    fn from(keys: [&str; N]) -> Self {
        RawPath::Keys(keys.into_iter().map(Key::from).collect())
    }
}

impl From<KeyPath> for RawPath {
    fn from(path: KeyPath) -> Self {
        RawPath::Keys(path.segments)
    }
}

impl From<&KeyPath> for RawPath {
    fn from(path: &KeyPath) -> Self {
        RawPath::Keys(path.segments.clone())
    }
}

/// Resolves `raw` into segments against `container`.
///
/// A raw path that is a literal key of the container becomes that single
/// key; anything else is tokenized.
pub fn resolve(raw: &RawPath, container: &Value) -> KeyPath {
    if is_literal_key(raw, container) {
        let key = match raw {
            RawPath::Text(text) => Key::Name(text.clone()),
            RawPath::Int(n) => Key::Index(*n),
            // Sequences are never literal
            RawPath::Keys(keys) => return KeyPath::from(keys.clone()),
        };
        tracing::trace!(path = %raw, "Resolved as literal key");
        KeyPath::from(vec![key])
    } else {
        let path = KeyPath::from(to_segments(raw));
        tracing::trace!(path = %raw, segments = path.len(), "Resolved by tokenizing");
        path
    }
}

/// An owned, canonical sequence of path segments.
///
/// # Examples
///
/// ```rust
/// # use keypath::{Key, KeyPath};
/// # use std::str::FromStr;
/// let path = KeyPath::new().push("a").push(0).push("b.c");
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.last(), Some(&Key::from("b.c")));
/// assert_eq!(path.to_string(), r#"a[0]["b.c"]"#);
///
/// // Display output parses back to the same segments
/// let reparsed = KeyPath::from_str(&path.to_string()).unwrap();
/// assert_eq!(reparsed.to_string(), path.to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath {
    segments: Vec<Key>,
}

impl KeyPath {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    pub fn push(mut self, key: impl Into<Key>) -> Self {
        self.segments.push(key.into());
        self
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.segments.iter()
    }

    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    /// Returns the path without its last segment, or `None` if empty.
    pub fn parent(&self) -> Option<KeyPath> {
        let (_, parent) = self.segments.split_last()?;
        Some(KeyPath::from(parent.to_vec()))
    }

    /// Returns the last segment, or `None` if empty.
    pub fn last(&self) -> Option<&Key> {
        self.segments.last()
    }

    pub fn into_segments(self) -> Vec<Key> {
        self.segments
    }
}

impl From<Vec<Key>> for KeyPath {
    fn from(segments: Vec<Key>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Key> for KeyPath {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromStr for KeyPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KeyPath::from(parse(s)))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str(EMPTY_PATH_DISPLAY);
        }
        for (i, key) in self.segments.iter().enumerate() {
            match key {
                Key::Index(n) if *n >= 0 => write!(f, "[{n}]")?,
                Key::Name(name) if is_index(key, None) => write!(f, "[{name}]")?,
                Key::Name(name) if IDENTIFIER.is_match(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                other => {
                    let field = other.as_field();
                    write!(f, "[\"")?;
                    for c in field.chars() {
                        if c == '"' || c == '\\' {
                            f.write_str("\\")?;
                        }
                        write!(f, "{c}")?;
                    }
                    write!(f, "\"]")?;
                }
            }
        }
        Ok(())
    }
}

/// Builds a [`KeyPath`] from a list of keys.
///
/// Each argument goes through `Key::from`, so strings become name keys and
/// integers become index keys. Strings are not parsed.
///
/// ```rust
/// # use keypath::{Key, keypath};
/// let path = keypath!["a.b", 0];
/// assert_eq!(path.segments(), &[Key::from("a.b"), Key::Index(0)]);
///
/// assert!(keypath![].is_empty());
/// ```
#[macro_export]
macro_rules! keypath {
    () => {
        $crate::KeyPath::new()
    };

    ($($key:expr),+ $(,)?) => {
        $crate::KeyPath::from(vec![$($crate::Key::from($key)),+])
    };
}
