//! Edit operations.
//!
//! An `Op` describes one intended edit and carries its own operands. Ops
//! serialize with an internal `"op"` tag:
//!
//! ```text
//! {"op": "set",    "path": ["a", "b"], "value": 5}
//! {"op": "remove", "path": ["a", "b"]}
//! {"op": "move",   "from": ["a", "b"], "to": ["a", "d"]}
//! {"op": "copy",   "from": ["a", "b"], "to": ["a", "d"]}
//! {"op": "swap",   "path1": ["a", "b"], "path2": ["a", "c"]}
//! ```

use crate::{
    error::{PathwiseError, PathwiseResult},
    Path, Value,
};
use serde::{Deserialize, Serialize};

/// A single edit to apply to a value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Write `value` at `path`, creating missing parents.
    Set {
        /// Target path.
        path: Path,
        /// Value to write.
        value: Value,
    },

    /// Delete whatever is at `path`. No-op if the path doesn't resolve.
    Remove {
        /// Target path.
        path: Path,
    },

    /// Remove the value at `from` and write it at `to`.
    Move {
        /// Source path.
        from: Path,
        /// Destination path, resolved after the removal.
        to: Path,
    },

    /// Write the value at `from` to `to`, leaving `from` intact.
    Copy {
        /// Source path.
        from: Path,
        /// Destination path.
        to: Path,
    },

    /// Exchange the values at two paths.
    Swap {
        /// Written second.
        path1: Path,
        /// Written first.
        path2: Path,
    },
}

impl Op {
    /// Every tag `Op` deserializes from.
    pub const TAGS: [&'static str; 5] = ["set", "remove", "move", "copy", "swap"];

    #[inline]
    pub fn set(path: Path, value: impl Into<Value>) -> Self {
        Op::Set {
            path,
            value: value.into(),
        }
    }

    #[inline]
    pub fn remove(path: Path) -> Self {
        Op::Remove { path }
    }

    #[inline]
    pub fn move_value(from: Path, to: Path) -> Self {
        Op::Move { from, to }
    }

    #[inline]
    pub fn copy(from: Path, to: Path) -> Self {
        Op::Copy { from, to }
    }

    #[inline]
    pub fn swap(path1: Path, path2: Path) -> Self {
        Op::Swap { path1, path2 }
    }

    /// The serialized tag of this op.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Op::Set { .. } => "set",
            Op::Remove { .. } => "remove",
            Op::Move { .. } => "move",
            Op::Copy { .. } => "copy",
            Op::Swap { .. } => "swap",
        }
    }

    /// Paths this op reads or writes, in operand order.
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Op::Set { path, .. } | Op::Remove { path } => vec![path],
            Op::Move { from, to } | Op::Copy { from, to } => vec![from, to],
            Op::Swap { path1, path2 } => vec![path1, path2],
        }
    }

    /// True for a two-path op whose paths are equal or prefix-related.
    ///
    /// Such ops still apply, but their outcome depends on the order of the
    /// internal steps rather than being symmetric.
    pub fn has_overlapping_paths(&self) -> bool {
        match self {
            Op::Set { .. } | Op::Remove { .. } => false,
            Op::Move { from, to } | Op::Copy { from, to } => from.overlaps(to),
            Op::Swap { path1, path2 } => path1.overlaps(path2),
        }
    }

    /// Decode an op from untyped JSON.
    ///
    /// # Errors
    ///
    /// [`PathwiseError::UnsupportedOperation`] if the `"op"` tag is missing,
    /// not a string, or not one of [`Op::TAGS`].
    /// [`PathwiseError::Serialization`] if the tag is known but the operands
    /// are malformed.
    ///
    /// ```
    /// use pathwise::{Op, PathwiseError};
    /// use serde_json::json;
    ///
    /// let op = Op::from_json(&json!({"op": "remove", "path": ["a"]})).unwrap();
    /// assert_eq!(op.name(), "remove");
    ///
    /// let err = Op::from_json(&json!({"op": "increment", "path": ["a"]})).unwrap_err();
    /// assert!(matches!(err, PathwiseError::UnsupportedOperation { .. }));
    /// ```
    pub fn from_json(raw: &serde_json::Value) -> PathwiseResult<Op> {
        let tag = match raw.get("op") {
            Some(serde_json::Value::String(tag)) => tag.as_str(),
            Some(other) => {
                return Err(PathwiseError::unsupported_operation(format!(
                    "non-string tag {other}"
                )))
            }
            None => return Err(PathwiseError::unsupported_operation("missing \"op\" tag")),
        };
        if !Op::TAGS.contains(&tag) {
            return Err(PathwiseError::unsupported_operation(tag));
        }
        Ok(Op::deserialize(raw)?)
    }
}
