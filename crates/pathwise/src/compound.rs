//! Copy, move and swap, built from `get`, `set` and `remove`.
//!
//! An absent source is written as `null`. When the two paths overlap (one
//! is a prefix of the other) the result follows from the fixed order of the
//! underlying steps and is not symmetric.

use crate::{
    access::{get, remove, set},
    error::PathwiseResult,
    Path, Value,
};

fn read_or_null(root: &Value, path: &Path) -> Value {
    get(root, path).cloned().unwrap_or_default()
}

/// Duplicate the value at `from` into `to`, leaving `from` intact.
///
/// # Examples
///
/// ```
/// use pathwise::{copy, path, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": 1, "c": 2}}));
/// let next = copy(&root, &path!("a", "b"), &path!("a", "d")).unwrap();
/// assert_eq!(next, Value::from(json!({"a": {"b": 1, "c": 2, "d": 1}})));
/// ```
pub fn copy(root: &Value, from: &Path, to: &Path) -> PathwiseResult<Value> {
    let value = read_or_null(root, from);
    set(root, to, value)
}

/// Relocate the value at `from` to `to`.
///
/// The source is removed first and the write is applied to the result of
/// that removal. With `to` nested under `from`, the write recreates the
/// removed branch; with `from` nested under `to`, the write overwrites the
/// branch the removal just edited.
///
/// # Examples
///
/// ```
/// use pathwise::{move_value, path, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": 1, "c": 2}}));
/// let next = move_value(&root, &path!("a", "b"), &path!("a", "d")).unwrap();
/// assert_eq!(next, Value::from(json!({"a": {"c": 2, "d": 1}})));
/// ```
pub fn move_value(root: &Value, from: &Path, to: &Path) -> PathwiseResult<Value> {
    let value = read_or_null(root, from);
    let removed = remove(root, from);
    set(&removed, to, value)
}

/// Exchange the values at `path1` and `path2`.
///
/// Both values are read from `root` before anything is written. `path2` is
/// written first, then `path1` is written on top of that result, so
/// overlapping paths let the `path1` write win.
///
/// # Examples
///
/// ```
/// use pathwise::{path, swap, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": 1, "c": 2}}));
/// let next = swap(&root, &path!("a", "b"), &path!("a", "c")).unwrap();
/// assert_eq!(next, Value::from(json!({"a": {"b": 2, "c": 1}})));
/// ```
pub fn swap(root: &Value, path1: &Path, path2: &Path) -> PathwiseResult<Value> {
    let value1 = read_or_null(root, path1);
    let value2 = read_or_null(root, path2);
    let intermediate = set(root, path2, value1)?;
    set(&intermediate, path1, value2)
}
