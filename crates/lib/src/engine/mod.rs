//! Path traversal: `get`, `set` and `unset`.
//!
//! Every operation first resolves its raw path against the container (see
//! [`crate::path::resolve`]) and then walks the container one segment at a
//! time. Lists are only descended through valid indices; maps through any
//! key.
//!
//! `set` creates what is missing along the way. The kind of container it
//! creates for a segment is decided by looking at the *next* segment: an
//! index calls for a list, anything else for a map.
//!
//! # Usage
//!
//! ```
//! use keypath::{Engine, Value};
//!
//! let engine = Engine::default();
//! let mut root = Value::map();
//!
//! engine.set(&mut root, "a[1].b.c", 4)?;
//! assert_eq!(root.to_json_string(), r#"{"a":[null,{"b":{"c":4}}]}"#);
//!
//! assert_eq!(engine.get(&root, "a[1].b.c"), Some(&Value::Int(4)));
//! assert_eq!(engine.get(&root, ["a", "1", "b", "c"]), Some(&Value::Int(4)));
//!
//! assert!(engine.unset(&mut root, "a[1].b.c"));
//! assert_eq!(engine.get(&root, "a[1].b.c"), None);
//! # Ok::<(), keypath::EngineError>(())
//! ```

use crate::{
    Value,
    path::{Key, KeyPath, RawPath, as_index, is_index, resolve},
    value::ValueError,
};

pub mod config;
pub mod errors;

pub use config::EngineConfig;
pub use errors::EngineError;

/// Runs path operations under an [`EngineConfig`].
///
/// The engine holds configuration only. It keeps no state between calls and
/// never retains references into the containers it walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gets the value at `path`.
    ///
    /// Returns `None` when any part of the path is missing, when the path
    /// runs into a scalar, when a list is addressed with something other than
    /// an in-bounds index, and when the value found is null. A null root
    /// always yields `None`.
    pub fn get<'v>(&self, container: &'v Value, path: impl Into<RawPath>) -> Option<&'v Value> {
        if container.is_null() {
            return None;
        }
        let raw = path.into();
        let path = resolve(&raw, container);
        self.check_depth(&path, &raw).ok()?;

        walk(container, path.segments()).filter(|found| !found.is_null())
    }

    /// Gets the value at `path`, or `default` when [`get`](Self::get) would
    /// return `None`.
    pub fn get_or<'v>(
        &self,
        container: &'v Value,
        path: impl Into<RawPath>,
        default: &'v Value,
    ) -> &'v Value {
        self.get(container, path).unwrap_or(default)
    }

    /// Gets the value at `path` converted to `T`.
    ///
    /// Returns `None` if the path is missing or the value has another type.
    pub fn get_as<'v, T>(&self, container: &'v Value, path: impl Into<RawPath>) -> Option<T>
    where
        T: TryFrom<&'v Value, Error = ValueError>,
    {
        T::try_from(self.get(container, path)?).ok()
    }

    /// Sets `value` at `path`, creating intermediate containers as needed,
    /// and returns the root.
    ///
    /// A null root is returned untouched. Any other non-map root is an
    /// [`EngineError::RootNotMapping`].
    ///
    /// Intermediate slots that are missing or null receive a new list when
    /// the following segment is an index and a new map otherwise. Lists are
    /// padded with holes, never with materialized values. A slot that holds a
    /// value of the wrong shape is replaced by a new container, dropping its
    /// contents, unless [`EngineConfig::overwrite_mismatched`] is `false`.
    pub fn set<'v>(
        &self,
        container: &'v mut Value,
        path: impl Into<RawPath>,
        value: impl Into<Value>,
    ) -> Result<&'v mut Value, EngineError> {
        if container.is_null() {
            return Ok(container);
        }
        if !container.is_map() {
            return Err(EngineError::RootNotMapping {
                found: container.type_name(),
            });
        }

        let raw = path.into();
        let path = resolve(&raw, container);
        self.check_depth(&path, &raw)?;
        self.check_writable(container, path.segments())?;

        self.assign(container, path.segments(), value.into())?;
        Ok(container)
    }

    /// Removes the value at `path`.
    ///
    /// A map entry is removed outright. A list element is replaced by a hole
    /// so that later elements keep their positions. Missing paths are left
    /// alone.
    ///
    /// Always returns `true`, including for a null root, an empty path, and
    /// a path that does not exist.
    pub fn unset(&self, container: &mut Value, path: impl Into<RawPath>) -> bool {
        if container.is_null() {
            return true;
        }
        let raw = path.into();
        let path = resolve(&raw, container);
        if self.check_depth(&path, &raw).is_err() {
            return true;
        }
        let Some((last, parents)) = path.segments().split_last() else {
            return true;
        };

        let parent = if parents.is_empty() {
            Some(container)
        } else {
            walk_mut(container, parents)
        };

        match parent {
            Some(Value::List(list)) => {
                if let Some(index) = as_index(last, Some(list.len())) {
                    list.punch(index);
                    tracing::trace!(path = %path, index, "Punched list element");
                }
            }
            Some(Value::Map(map)) => {
                if map.remove(&last.as_field()).is_some() {
                    tracing::trace!(path = %path, "Removed map entry");
                }
            }
            _ => {}
        }
        true
    }

    fn check_depth(&self, path: &KeyPath, raw: &RawPath) -> Result<(), EngineError> {
        if path.len() > self.config.max_depth {
            tracing::warn!(
                path = %raw,
                depth = path.len(),
                max = self.config.max_depth,
                "Path exceeds maximum depth"
            );
            return Err(EngineError::PathTooDeep {
                depth: path.len(),
                max: self.config.max_depth,
            });
        }
        Ok(())
    }

    /// Walks the write `segments` would make without mutating `root`.
    ///
    /// Every error `set` can raise while walking is raised here, so a failed
    /// `set` leaves the container exactly as it was.
    fn check_writable(&self, root: &Value, segments: &[Key]) -> Result<(), EngineError> {
        // `None` once the walk leaves existing data; `fresh_list` then tells
        // which kind of container `assign` would have created.
        let mut node = Some(root);
        let mut fresh_list = false;

        for (position, key) in segments.iter().enumerate() {
            let walked = &segments[..=position];
            let slot = match node {
                Some(Value::Map(map)) => map.get(&key.as_field()),
                Some(Value::List(list)) => list.get(self.list_index(key, walked)?),
                Some(other) => {
                    return Err(EngineError::TypeMismatch {
                        path: describe(walked),
                        expected: "map or list",
                        found: other.type_name(),
                    });
                }
                None if fresh_list => {
                    self.list_index(key, walked)?;
                    None
                }
                None => None,
            };

            let Some(next) = segments.get(position + 1) else {
                return Ok(());
            };
            let wants_list = is_index(next, None);
            match slot {
                Some(existing) if fits(existing, wants_list) => node = Some(existing),
                Some(existing) if !existing.is_null() && !self.config.overwrite_mismatched => {
                    return Err(EngineError::TypeMismatch {
                        path: describe(walked),
                        expected: if wants_list { "list" } else { "map" },
                        found: existing.type_name(),
                    });
                }
                _ => {
                    node = None;
                    fresh_list = wants_list;
                }
            }
        }
        Ok(())
    }

    fn assign(&self, root: &mut Value, segments: &[Key], value: Value) -> Result<(), EngineError> {
        let mut nested = root;
        for (position, key) in segments.iter().enumerate() {
            let walked = &segments[..=position];
            let slot = self.vivify(nested, key, walked)?;
            let Some(next) = segments.get(position + 1) else {
                *slot = value;
                return Ok(());
            };
            self.shape(slot, next, walked)?;
            nested = slot;
        }
        Ok(())
    }

    /// Returns the list position `key` denotes, within `max_index`.
    fn list_index(&self, key: &Key, walked: &[Key]) -> Result<usize, EngineError> {
        let index = as_index(key, None).ok_or_else(|| EngineError::TypeMismatch {
            path: describe(walked),
            expected: "list index",
            found: "key",
        })?;
        if index > self.config.max_index {
            return Err(EngineError::IndexTooLarge {
                index,
                max: self.config.max_index,
            });
        }
        Ok(index)
    }

    /// Returns the slot for `key` inside `node`, creating a null slot if it
    /// is missing.
    fn vivify<'v>(
        &self,
        node: &'v mut Value,
        key: &Key,
        walked: &[Key],
    ) -> Result<&'v mut Value, EngineError> {
        match node {
            Value::Map(map) => Ok(map.slot(&key.as_field())),
            Value::List(list) => Ok(list.slot(self.list_index(key, walked)?)),
            other => Err(EngineError::TypeMismatch {
                path: describe(walked),
                expected: "map or list",
                found: other.type_name(),
            }),
        }
    }

    /// Makes `slot` the container kind that `next` needs.
    fn shape(&self, slot: &mut Value, next: &Key, walked: &[Key]) -> Result<(), EngineError> {
        let wants_list = is_index(next, None);
        if fits(slot, wants_list) {
            return Ok(());
        }

        let expected = if wants_list { "list" } else { "map" };
        if !slot.is_null() {
            if !self.config.overwrite_mismatched {
                return Err(EngineError::TypeMismatch {
                    path: describe(walked),
                    expected,
                    found: slot.type_name(),
                });
            }
            tracing::debug!(
                path = %describe(walked),
                found = slot.type_name(),
                expected,
                "Replacing mismatched value with a new container"
            );
        }
        *slot = if wants_list {
            Value::list()
        } else {
            Value::map()
        };
        Ok(())
    }
}

fn fits(slot: &Value, wants_list: bool) -> bool {
    if wants_list {
        slot.is_list()
    } else {
        slot.is_map()
    }
}

fn describe(walked: &[Key]) -> String {
    KeyPath::from(walked.to_vec()).to_string()
}

/// Follows `segments` from `node`. An empty walk finds nothing.
fn walk<'v>(mut node: &'v Value, segments: &[Key]) -> Option<&'v Value> {
    if segments.is_empty() {
        return None;
    }
    for key in segments {
        node = match node {
            Value::List(list) => list.get(as_index(key, Some(list.len()))?)?,
            Value::Map(map) => map.get(&key.as_field())?,
            _ => return None,
        };
    }
    Some(node)
}

fn walk_mut<'v>(mut node: &'v mut Value, segments: &[Key]) -> Option<&'v mut Value> {
    for key in segments {
        node = match node {
            Value::List(list) => {
                let index = as_index(key, Some(list.len()))?;
                list.get_mut(index)?
            }
            Value::Map(map) => map.get_mut(&key.as_field())?,
            _ => return None,
        };
    }
    Some(node)
}

/// Gets the value at `path` with the default configuration.
///
/// See [`Engine::get`].
pub fn get<'v>(container: &'v Value, path: impl Into<RawPath>) -> Option<&'v Value> {
    Engine::default().get(container, path)
}

/// Gets the value at `path`, or `default`, with the default configuration.
///
/// ```
/// # use keypath::{Value, get_or};
/// let root = Value::from_json_str(r#"{"a": {"b": null}}"#)?;
/// let fallback = Value::from(898);
///
/// assert_eq!(get_or(&root, "a.b", &fallback), &fallback);
/// # Ok::<(), keypath::Error>(())
/// ```
pub fn get_or<'v>(container: &'v Value, path: impl Into<RawPath>, default: &'v Value) -> &'v Value {
    Engine::default().get_or(container, path, default)
}

/// Gets the value at `path` converted to `T`, with the default configuration.
pub fn get_as<'v, T>(container: &'v Value, path: impl Into<RawPath>) -> Option<T>
where
    T: TryFrom<&'v Value, Error = ValueError>,
{
    Engine::default().get_as(container, path)
}

/// Sets `value` at `path` with the default configuration.
///
/// See [`Engine::set`].
pub fn set<'v>(
    container: &'v mut Value,
    path: impl Into<RawPath>,
    value: impl Into<Value>,
) -> crate::Result<&'v mut Value> {
    Ok(Engine::default().set(container, path, value)?)
}

/// Removes the value at `path` with the default configuration. Always `true`.
pub fn unset(container: &mut Value, path: impl Into<RawPath>) -> bool {
    Engine::default().unset(container, path)
}

// Path methods on Value, using the default configuration
impl Value {
    /// See [`Engine::get`].
    pub fn get_path(&self, path: impl Into<RawPath>) -> Option<&Value> {
        get(self, path)
    }

    /// See [`Engine::get_or`].
    pub fn get_path_or<'v>(&'v self, path: impl Into<RawPath>, default: &'v Value) -> &'v Value {
        get_or(self, path, default)
    }

    /// See [`Engine::set`].
    pub fn set_path(
        &mut self,
        path: impl Into<RawPath>,
        value: impl Into<Value>,
    ) -> Result<&mut Self, EngineError> {
        Engine::default().set(self, path, value)
    }

    /// See [`Engine::unset`].
    pub fn unset_path(&mut self, path: impl Into<RawPath>) -> bool {
        unset(self, path)
    }
}
