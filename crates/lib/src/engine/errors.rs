//! Error types for path operations.
//!
//! Missing paths are not errors: `get` reports them as absent and `unset`
//! succeeds anyway. What remains are misuse of `set` and violations of the
//! limits in [`EngineConfig`](super::EngineConfig).

use thiserror::Error;

/// Structured error types for engine operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `set` was called on a root that is neither a map nor null
    #[error("Cannot set a path on a {found} root: the root must be a map")]
    RootNotMapping { found: &'static str },

    /// The resolved path has more segments than allowed
    #[error("Path has {depth} segments, exceeding the limit of {max}")]
    PathTooDeep { depth: usize, max: usize },

    /// `set` would grow a list beyond the allowed index
    #[error("List index {index} exceeds the limit of {max}")]
    IndexTooLarge { index: usize, max: usize },

    /// An intermediate slot holds a value of the wrong shape
    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl EngineError {
    /// Check if this error comes from calling `set` on a non-map root
    pub fn is_usage_error(&self) -> bool {
        matches!(self, EngineError::RootNotMapping { .. })
    }

    /// Check if this error is a configured limit being exceeded
    pub fn is_limit_error(&self) -> bool {
        matches!(
            self,
            EngineError::PathTooDeep { .. } | EngineError::IndexTooLarge { .. }
        )
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, EngineError::TypeMismatch { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            EngineError::TypeMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from EngineError to the main Error type
impl From<EngineError> for crate::Error {
    fn from(err: EngineError) -> Self {
        crate::Error::Engine(err)
    }
}
