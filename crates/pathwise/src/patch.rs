//! Ordered batches of ops.

use crate::{error::PathwiseResult, Op, PathwiseError};
use serde::{Deserialize, Serialize};

/// An ordered list of ops, replayed left to right.
///
/// A patch has no atomicity of its own: applying it either yields the root
/// after every op, or the first error.
///
/// # Examples
///
/// ```
/// use pathwise::{path, Op, Patch};
///
/// let patch = Patch::new()
///     .with_op(Op::set(path!("name"), "Alice"))
///     .with_op(Op::copy(path!("name"), path!("display_name")));
///
/// assert_eq!(patch.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch {
    ops: Vec<Op>,
}

impl Patch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_ops(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// Add an op (builder style).
    #[inline]
    pub fn with_op(mut self, op: Op) -> Self {
        self.ops.push(op);
        self
    }

    #[inline]
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Append all ops of `other` after the ops of `self`.
    #[inline]
    pub fn extend(&mut self, other: Patch) {
        self.ops.extend(other.ops);
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    /// Decode a JSON array of untyped ops.
    ///
    /// Every element goes through [`Op::from_json`], so an unknown tag
    /// anywhere in the array is reported as an unsupported operation.
    pub fn from_json(raw: &serde_json::Value) -> PathwiseResult<Patch> {
        let items = raw.as_array().ok_or_else(|| {
            PathwiseError::unsupported_operation(format!("expected an array of ops, found {raw}"))
        })?;
        items.iter().map(Op::from_json).collect()
    }
}

impl FromIterator<Op> for Patch {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Patch {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
