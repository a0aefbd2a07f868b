//!
//! keypath: read, write and delete values deep inside nested maps and lists
//! by path.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: The nested structure being addressed. Maps keep
//!   insertion order; lists may contain holes (`Value::Null` slots).
//! * **Paths (`path::RawPath`, `path::KeyPath`)**: A path is a string such as
//!   `a[0].b["c.d"]`, a single integer, or an explicit list of keys. Strings are
//!   resolved against the container they are applied to: a string that is
//!   already a key of the container is used whole, anything else is tokenized.
//! * **Engine (`engine::Engine`)**: Walks a value along a path. `get` reads,
//!   `set` writes and creates missing containers (a list when the next segment
//!   is an index, a map otherwise), `unset` removes.
//!
//! ## Example
//!
//! ```
//! use keypath::{Value, get, set, unset};
//!
//! let mut root = Value::from_json_str(r#"{"a": [{"b": {"c": 3}}]}"#)?;
//!
//! set(&mut root, "a[0].b.c", 4)?;
//! set(&mut root, "x[0].y.z", 5)?;
//! assert_eq!(get(&root, "a[0].b.c"), Some(&Value::Int(4)));
//! assert_eq!(get(&root, ["x", "0", "y", "z"]), Some(&Value::Int(5)));
//!
//! assert!(unset(&mut root, "a[0].b.c"));
//! assert_eq!(root.to_json_string(), r#"{"a":[{"b":{}}],"x":[{"y":{"z":5}}]}"#);
//! # Ok::<(), keypath::Error>(())
//! ```

pub mod constants;
pub mod engine;
pub mod path;
pub mod value;

pub use engine::{Engine, EngineConfig, EngineError, get, get_as, get_or, set, unset};
pub use path::{Key, KeyPath, RawPath};
pub use value::{List, Map, Value, ValueError};

/// Result type used throughout the keypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the keypath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from path operations
    #[error(transparent)]
    Engine(engine::EngineError),

    /// Structured errors from value conversions
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Engine(_) => "engine",
            Error::Value(_) => "value",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error comes from calling `set` on a non-map root.
    pub fn is_usage_error(&self) -> bool {
        match self {
            Error::Engine(engine_err) => engine_err.is_usage_error(),
            _ => false,
        }
    }

    /// Check if this error is a configured limit being exceeded.
    pub fn is_limit_error(&self) -> bool {
        match self {
            Error::Engine(engine_err) => engine_err.is_limit_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Engine(engine_err) => engine_err.is_type_error(),
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
