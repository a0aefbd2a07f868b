//! Constants used throughout the keypath library.
//!
//! This module provides central definitions for numeric limits and the
//! defaults used by [`EngineConfig`](crate::EngineConfig).

/// Largest integer that is still treated as a list index when no explicit
/// bound is known (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Default maximum number of segments a single path may resolve to.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default largest list index that `set` will create.
pub const DEFAULT_MAX_INDEX: usize = 1 << 20;

/// Rendering used by `Display` for a path with no segments.
pub const EMPTY_PATH_DISPLAY: &str = "(empty path)";
