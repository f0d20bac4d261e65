//! Reading, writing and deleting a single value at a path.
//!
//! All three functions are pure. Writes copy only the containers on the
//! route from the root to the edited location; everything else is shared
//! with the input through `Arc`.

use crate::{
    error::{PathwiseError, PathwiseResult},
    Map, Path, Seg, Value,
};
use std::sync::Arc;

/// How many `null` slots a single write may pad between the end of an array
/// and the written index.
pub const MAX_INDEX_GAP: usize = 1024;

/// Resolve `path` against `root`.
///
/// Returns `None` (absent) when any segment fails to resolve: a missing key,
/// an index past the end, a key into an array or an index into an object,
/// or a scalar reached with segments left over. Never fails.
///
/// # Examples
///
/// ```
/// use pathwise::{get, path, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": 1}}));
/// assert_eq!(get(&root, &path!("a", "b")), Some(&Value::from(1)));
/// assert_eq!(get(&root, &path!("a", "z")), None);
/// assert_eq!(get(&root, &path!("a", "b", "c")), None);
/// ```
pub fn get<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter().try_fold(root, |current, seg| current.child(seg))
}

/// Return a new root with `value` installed at `path`.
///
/// Missing (or `null`) intermediates are created: an object for a key
/// segment, an array for an index segment. Writing past the end of an array
/// pads the gap with `null`, up to [`MAX_INDEX_GAP`] slots. An empty path
/// replaces the whole root.
///
/// # Errors
///
/// [`PathwiseError::PathTraversal`] if the route runs through a scalar, or
/// through a container of the wrong kind for the next segment.
/// [`PathwiseError::IndexOutOfBounds`] if an index lies more than
/// [`MAX_INDEX_GAP`] slots past the end of its array.
///
/// # Examples
///
/// ```
/// use pathwise::{path, set, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": 1, "c": [1, 2]}}));
/// let next = set(&root, &path!("a", "b"), Value::from(5)).unwrap();
///
/// assert_eq!(next, Value::from(json!({"a": {"b": 5, "c": [1, 2]}})));
/// assert!(Value::ptr_eq(&root["a"]["c"], &next["a"]["c"]));
/// assert_eq!(root["a"]["b"], Value::from(1));
/// ```
pub fn set(root: &Value, path: &Path, value: Value) -> PathwiseResult<Value> {
    set_in(Some(root), path, 0, value)
}

fn set_in(current: Option<&Value>, path: &Path, depth: usize, value: Value) -> PathwiseResult<Value> {
    let Some(seg) = path.segments().get(depth) else {
        return Ok(value);
    };

    match (current, seg) {
        (Some(Value::Object(map)), Seg::Key(key)) => {
            let child = set_in(map.get(key), path, depth + 1, value)?;
            let mut next = Map::clone(map);
            next.insert(key.clone(), child);
            Ok(Value::Object(Arc::new(next)))
        }
        (Some(Value::Array(items)), Seg::Index(idx)) => {
            check_gap(path, depth, *idx, items.len())?;
            let child = set_in(items.get(*idx), path, depth + 1, value)?;
            let mut next = Vec::clone(items);
            write_index(&mut next, *idx, child);
            Ok(Value::Array(Arc::new(next)))
        }
        (None | Some(Value::Null), Seg::Key(key)) => {
            let child = set_in(None, path, depth + 1, value)?;
            let mut next = Map::new();
            next.insert(key.clone(), child);
            Ok(Value::object(next))
        }
        (None | Some(Value::Null), Seg::Index(idx)) => {
            check_gap(path, depth, *idx, 0)?;
            let child = set_in(None, path, depth + 1, value)?;
            let mut next = Vec::new();
            write_index(&mut next, *idx, child);
            Ok(Value::array(next))
        }
        (Some(found), seg) => Err(PathwiseError::path_traversal(
            path.prefix(depth),
            seg.container_kind(),
            found.type_name(),
        )),
    }
}

fn check_gap(path: &Path, depth: usize, idx: usize, len: usize) -> PathwiseResult<()> {
    if idx.saturating_sub(len) > MAX_INDEX_GAP {
        return Err(PathwiseError::index_out_of_bounds(
            path.prefix(depth),
            idx,
            len,
            MAX_INDEX_GAP,
        ));
    }
    Ok(())
}

/// `idx` has passed [`check_gap`].
fn write_index(items: &mut Vec<Value>, idx: usize, value: Value) {
    if idx < items.len() {
        items[idx] = value;
    } else {
        items.resize(idx, Value::Null);
        items.push(value);
    }
}

/// Return a new root with the value at `path` deleted from its parent.
///
/// Object members are removed outright, so the key is no longer present
/// (this is not the same as setting it to `null`). Array elements are
/// spliced out and later elements shift down by one.
///
/// If the path does not resolve, or is empty, the input root is returned
/// unchanged. Removing twice is the same as removing once.
///
/// # Examples
///
/// ```
/// use pathwise::{path, remove, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": 1, "c": 2}}));
/// let next = remove(&root, &path!("a", "b"));
/// assert_eq!(next, Value::from(json!({"a": {"c": 2}})));
/// assert_eq!(remove(&next, &path!("a", "b")), next);
/// ```
pub fn remove(root: &Value, path: &Path) -> Value {
    remove_in(root, path.segments()).unwrap_or_else(|| root.clone())
}

/// `None` means nothing was removed and the caller keeps its own node.
fn remove_in(current: &Value, segments: &[Seg]) -> Option<Value> {
    let (seg, rest) = segments.split_first()?;

    match (current, seg) {
        (Value::Object(map), Seg::Key(key)) => {
            let replacement = if rest.is_empty() {
                map.get(key)?;
                None
            } else {
                Some(remove_in(map.get(key)?, rest)?)
            };
            let mut next = Map::clone(map);
            match replacement {
                Some(child) => next.insert(key.clone(), child),
                None => next.remove(key),
            };
            Some(Value::Object(Arc::new(next)))
        }
        (Value::Array(items), Seg::Index(idx)) => {
            let replacement = if rest.is_empty() {
                items.get(*idx)?;
                None
            } else {
                Some(remove_in(items.get(*idx)?, rest)?)
            };
            let mut next = Vec::clone(items);
            match replacement {
                Some(child) => next[*idx] = child,
                None => {
                    next.remove(*idx);
                }
            }
            Some(Value::Array(Arc::new(next)))
        }
        _ => None,
    }
}
