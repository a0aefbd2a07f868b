//! Error types for value conversions.

use thiserror::Error;

use super::Value;

/// Errors raised when reading a [`Value`] as a concrete Rust type.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value held a different type than requested
    #[error("Value type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl ValueError {
    pub(crate) fn mismatch(expected: &'static str, value: &Value) -> Self {
        ValueError::TypeMismatch {
            expected,
            found: value.type_name(),
        }
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }
}

impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
