//! Path-addressed immutable updates over nested values.
//!
//! `pathwise` reads, writes and deletes values deep inside a JSON-like tree
//! without ever mutating the tree it was given. Every edit returns a new
//! root; containers that the edit did not touch are shared with the old
//! root by reference, so old and new versions can be kept side by side
//! cheaply.
//!
//! # Core Concepts
//!
//! - **Value**: the tree being edited, with `Arc`-shared containers
//! - **Path**: a list of object keys and array indices from the root
//! - **Op**: a serializable description of one edit (set, remove, move,
//!   copy, swap)
//! - **Patch**: an ordered batch of ops
//! - **Shape**: an optional declared shape that ops are checked against
//!
//! # Quick Start
//!
//! ```
//! use pathwise::{applies, get, path, Op, Value};
//! use serde_json::json;
//!
//! let root = Value::from(json!({"a": {"b": 1, "c": 2}}));
//!
//! let next = applies(&root, &[
//!     Op::set(path!("a", "b"), 5),
//!     Op::move_value(path!("a", "c"), path!("z")),
//! ])
//! .unwrap();
//!
//! assert_eq!(next, Value::from(json!({"a": {"b": 5}, "z": 2})));
//! assert_eq!(get(&root, &path!("a", "c")), Some(&Value::from(2))); // original unchanged
//! ```
//!
//! # Absence and failure
//!
//! A path that does not resolve is not an error: `get` returns `None`,
//! `remove` returns the root unchanged, and `copy`/`move`/`swap` write
//! `null` for an absent source. Writes fail with
//! [`PathwiseError::PathTraversal`] when the route runs through a scalar,
//! and untyped ops with an unknown tag fail with
//! [`PathwiseError::UnsupportedOperation`].

mod access;
mod apply;
mod compound;
mod error;
mod op;
mod patch;
mod path;
mod shape;
mod value;

pub use access::{get, remove, set, MAX_INDEX_GAP};
pub use apply::{applies, applies_checked, apply, apply_checked, apply_json, apply_patch};
pub use compound::{copy, move_value, swap};
pub use error::{PathwiseError, PathwiseResult};
pub use op::Op;
pub use patch::Patch;
pub use path::{Path, Seg};
pub use shape::Shape;
pub use value::{Map, Value};
