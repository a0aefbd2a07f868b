//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_INDEX};

/// Limits and policies applied by an [`Engine`](super::Engine).
///
/// # Examples
///
/// ```
/// use keypath::EngineConfig;
///
/// // Defaults match the free functions at the crate root
/// let config = EngineConfig::default();
/// assert!(config.overwrite_mismatched);
///
/// // Or override individual settings
/// let strict = EngineConfig {
///     overwrite_mismatched: false,
///     ..Default::default()
/// };
///
/// // Configs are plain serde structs; missing fields take defaults
/// let loaded: EngineConfig = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
/// assert_eq!(loaded.max_depth, 16);
/// assert_eq!(loaded.max_index, EngineConfig::default().max_index);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of segments a path may resolve to.
    pub max_depth: usize,

    /// Largest list index `set` will create. Writing further out would pad
    /// the list with that many holes.
    pub max_index: usize,

    /// What `set` does when an intermediate slot holds a value of the wrong
    /// shape for the next segment (a scalar, or a map where a list is
    /// needed). `true` replaces it with a fresh container, discarding the old
    /// value. `false` fails with
    /// [`EngineError::TypeMismatch`](super::EngineError::TypeMismatch).
    pub overwrite_mismatched: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_index: DEFAULT_MAX_INDEX,
            overwrite_mismatched: true,
        }
    }
}

impl EngineConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }

    pub fn with_overwrite_mismatched(mut self, overwrite: bool) -> Self {
        self.overwrite_mismatched = overwrite;
        self
    }
}
