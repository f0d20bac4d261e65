//! Dispatching ops and folding batches of them over a root.
//!
//! ```text
//! root' = apply(root, op)
//! root_n = applies(root_0, [op_1, .., op_n])
//! ```
//!
//! Both are pure: the input root is never modified, and the same inputs
//! always produce the same output.

use crate::{
    access::{remove, set},
    compound::{copy, move_value, swap},
    error::PathwiseResult,
    Op, Patch, Shape, Value,
};

/// Apply a single op and return the new root.
///
/// # Examples
///
/// ```
/// use pathwise::{apply, path, Op, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": 1, "c": 2}}));
/// let next = apply(&root, &Op::swap(path!("a", "b"), path!("a", "c"))).unwrap();
/// assert_eq!(next, Value::from(json!({"a": {"b": 2, "c": 1}})));
/// ```
pub fn apply(root: &Value, op: &Op) -> PathwiseResult<Value> {
    tracing::trace!(op = op.name(), "applying op");
    if op.has_overlapping_paths() {
        tracing::debug!(op = op.name(), "op paths overlap; result is order-dependent");
    }

    match op {
        Op::Set { path, value } => set(root, path, value.clone()),
        Op::Remove { path } => Ok(remove(root, path)),
        Op::Move { from, to } => move_value(root, from, to),
        Op::Copy { from, to } => copy(root, from, to),
        Op::Swap { path1, path2 } => swap(root, path1, path2),
    }
}

/// Apply ops in order, each one seeing the result of the previous ones.
///
/// Stops at the first failing op and returns its error; no intermediate
/// root is exposed.
///
/// # Examples
///
/// ```
/// use pathwise::{applies, path, Op, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"count": 0}));
/// let ops = [
///     Op::set(path!("count"), 1),
///     Op::copy(path!("count"), path!("backup")),
///     Op::set(path!("count"), 2),
/// ];
///
/// let next = applies(&root, &ops).unwrap();
/// assert_eq!(next, Value::from(json!({"count": 2, "backup": 1})));
/// assert_eq!(root, Value::from(json!({"count": 0})));
/// ```
pub fn applies<'a>(root: &Value, ops: impl IntoIterator<Item = &'a Op>) -> PathwiseResult<Value> {
    ops.into_iter()
        .enumerate()
        .try_fold(root.clone(), |acc, (index, op)| {
            apply(&acc, op).inspect_err(|e| {
                tracing::debug!(index, op = op.name(), error = %e, "op failed; batch aborted");
            })
        })
}

/// Apply every op of `patch` in order. See [`applies`].
pub fn apply_patch(root: &Value, patch: &Patch) -> PathwiseResult<Value> {
    applies(root, patch)
}

/// Decode an untyped op with [`Op::from_json`] and apply it.
///
/// ```
/// use pathwise::{apply_json, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": 1}));
/// let next = apply_json(&root, &json!({"op": "move", "from": ["a"], "to": ["b"]})).unwrap();
/// assert_eq!(next, Value::from(json!({"b": 1})));
///
/// assert!(apply_json(&root, &json!({"op": "replace", "path": ["a"]})).is_err());
/// ```
pub fn apply_json(root: &Value, raw: &serde_json::Value) -> PathwiseResult<Value> {
    let op = Op::from_json(raw)?;
    apply(root, &op)
}

/// Validate `op` against `shape`, then apply it.
pub fn apply_checked(shape: &Shape, root: &Value, op: &Op) -> PathwiseResult<Value> {
    shape.check(op)?;
    apply(root, op)
}

/// Validate and apply ops in order; the first rejected or failing op aborts.
pub fn applies_checked<'a>(
    shape: &Shape,
    root: &Value,
    ops: impl IntoIterator<Item = &'a Op>,
) -> PathwiseResult<Value> {
    ops.into_iter()
        .try_fold(root.clone(), |acc, op| apply_checked(shape, &acc, op))
}
