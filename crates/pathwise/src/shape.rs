//! Declared shapes for runtime validation of ops.
//!
//! Paths are plain data, so nothing stops a caller from addressing a key
//! its document does not have, or from swapping a string with an array.
//! A `Shape` describes what a document is supposed to look like, and
//! [`Shape::check`] rejects ops that would leave that description before
//! they run.
//!
//! Shapes can be declared in code or loaded from JSON:
//!
//! ```
//! use pathwise::Shape;
//! use serde_json::json;
//!
//! let shape: Shape = serde_json::from_value(json!({
//!     "type": "record",
//!     "of": {
//!         "name": {"type": "string"},
//!         "tags": {"type": "array", "of": {"type": "string"}},
//!         "nickname": {"type": "optional", "of": {"type": "string"}}
//!     }
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     shape,
//!     Shape::record([
//!         ("name", Shape::String),
//!         ("tags", Shape::array(Shape::String)),
//!         ("nickname", Shape::optional(Shape::String)),
//!     ])
//! );
//! ```

use crate::{
    error::{PathwiseError, PathwiseResult},
    Op, Path, Seg, Value,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The declared shape of a value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "of", rename_all = "snake_case")]
pub enum Shape {
    /// Anything, including whatever lies below it.
    Any,
    Bool,
    Number,
    String,
    /// Array whose elements all have the given shape.
    Array(Box<Shape>),
    /// Object with arbitrary keys whose values all have the given shape.
    Map(Box<Shape>),
    /// Object with exactly the declared fields.
    Record(BTreeMap<String, Shape>),
    /// The inner shape, or null. As a record field: may also be missing.
    Optional(Box<Shape>),
}

impl Shape {
    pub fn array(elem: Shape) -> Self {
        Shape::Array(Box::new(elem))
    }

    pub fn map(value: Shape) -> Self {
        Shape::Map(Box::new(value))
    }

    pub fn optional(inner: Shape) -> Self {
        Shape::Optional(Box::new(inner))
    }

    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Shape)>) -> Self {
        Shape::Record(fields.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        matches!(self, Shape::Optional(_))
    }

    /// JSON type name this shape stands for, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Any => "any",
            Shape::Bool => "boolean",
            Shape::Number => "number",
            Shape::String => "string",
            Shape::Array(_) => "array",
            Shape::Map(_) | Shape::Record(_) => "object",
            Shape::Optional(inner) => inner.kind(),
        }
    }

    fn required(&self) -> &Shape {
        match self {
            Shape::Optional(inner) => inner.required(),
            other => other,
        }
    }

    /// Walk `path` through the shape and return the shape declared there.
    ///
    /// # Errors
    ///
    /// [`PathwiseError::UnknownKey`] for a key a record does not declare,
    /// [`PathwiseError::ShapeMismatch`] for a segment that does not fit the
    /// container kind (or a scalar) declared at that point.
    pub fn resolve(&self, path: &Path) -> PathwiseResult<&Shape> {
        path.iter()
            .enumerate()
            .try_fold(self, |shape, (depth, seg)| shape.step(seg, path, depth))
    }

    fn step(&self, seg: &Seg, path: &Path, depth: usize) -> PathwiseResult<&Shape> {
        match (self.required(), seg) {
            (any @ Shape::Any, _) => Ok(any),
            (Shape::Record(fields), Seg::Key(key)) => fields
                .get(key)
                .ok_or_else(|| PathwiseError::unknown_key(path.prefix(depth + 1))),
            (Shape::Map(value), Seg::Key(_)) => Ok(&**value),
            (Shape::Array(elem), Seg::Index(_)) => Ok(&**elem),
            (shape, seg) => Err(PathwiseError::shape_mismatch(
                path.prefix(depth),
                seg.container_kind(),
                shape.kind(),
            )),
        }
    }

    /// True if `value` conforms to this shape.
    pub fn accepts(&self, value: &Value) -> bool {
        self.conform(value, &Path::root()).is_ok()
    }

    /// Check `value` against this shape, reporting the first offending
    /// location relative to `at`.
    pub fn conform(&self, value: &Value, at: &Path) -> PathwiseResult<()> {
        match (self, value) {
            (Shape::Any, _) | (Shape::Optional(_), Value::Null) => Ok(()),
            (Shape::Optional(inner), value) => inner.conform(value, at),
            (Shape::Bool, Value::Bool(_))
            | (Shape::Number, Value::Number(_))
            | (Shape::String, Value::String(_)) => Ok(()),
            (Shape::Array(elem), Value::Array(items)) => items
                .iter()
                .enumerate()
                .try_for_each(|(i, item)| elem.conform(item, &at.clone().index(i))),
            (Shape::Map(shape), Value::Object(map)) => map
                .iter()
                .try_for_each(|(k, v)| shape.conform(v, &at.clone().key(k.as_str()))),
            (Shape::Record(fields), Value::Object(map)) => {
                if let Some(extra) = map.keys().find(|k| !fields.contains_key(*k)) {
                    return Err(PathwiseError::unknown_key(at.clone().key(extra.as_str())));
                }
                fields.iter().try_for_each(|(k, shape)| match map.get(k) {
                    Some(v) => shape.conform(v, &at.clone().key(k.as_str())),
                    None if shape.is_optional() => Ok(()),
                    None => Err(PathwiseError::shape_mismatch(
                        at.clone().key(k.as_str()),
                        shape.kind(),
                        "absent",
                    )),
                })
            }
            (shape, value) => Err(PathwiseError::shape_mismatch(
                at.clone(),
                shape.kind(),
                value.type_name(),
            )),
        }
    }

    /// Whether a value of shape `from` may be written where `to` is declared.
    fn assignable(from: &Shape, to: &Shape) -> bool {
        match to {
            Shape::Any => true,
            Shape::Optional(inner) => from == to || Shape::assignable(from, inner),
            _ => from == to,
        }
    }

    fn check_removable(&self, path: &Path) -> PathwiseResult<()> {
        let Some(parent) = path.parent() else {
            // Removing the root is a no-op.
            return Ok(());
        };
        let target = self.resolve(path)?;
        match self.resolve(&parent)?.required() {
            Shape::Record(_) if !target.is_optional() => {
                Err(PathwiseError::not_removable(path.clone()))
            }
            _ => Ok(()),
        }
    }

    fn check_endpoints(&self, from: &Path, to: &Path) -> PathwiseResult<(&Shape, &Shape)> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        if Shape::assignable(source, target) {
            Ok((source, target))
        } else {
            Err(PathwiseError::incompatible_endpoints(from.clone(), to.clone()))
        }
    }

    /// Reject `op` if applying it could leave this shape.
    ///
    /// - `set`: the value must conform to the shape at the path.
    /// - `remove`: the target must be an optional record field, or an
    ///   element of an array, map or `any`.
    /// - `copy`: the source shape must be assignable to the destination.
    /// - `move`: as `copy`, and the source must be removable.
    /// - `swap`: each side must be assignable to the other.
    ///
    /// The check is static: it looks at the shape, not at the value being
    /// edited. A `set` that creates intermediates can therefore still leave
    /// the shape. Setting one field below an `optional(record)` that is
    /// currently `null` builds a record holding only that field, and writing
    /// past the end of an array pads it with `null`. Run [`Shape::accepts`]
    /// on the result where that matters.
    pub fn check(&self, op: &Op) -> PathwiseResult<()> {
        match op {
            Op::Set { path, value } => self.resolve(path)?.conform(value, path),
            Op::Remove { path } => self.check_removable(path),
            Op::Copy { from, to } => self.check_endpoints(from, to).map(|_| ()),
            Op::Move { from, to } => {
                self.check_endpoints(from, to)?;
                self.check_removable(from)
            }
            Op::Swap { path1, path2 } => {
                let (first, second) = self.check_endpoints(path1, path2)?;
                if Shape::assignable(second, first) {
                    Ok(())
                } else {
                    Err(PathwiseError::incompatible_endpoints(
                        path2.clone(),
                        path1.clone(),
                    ))
                }
            }
        }
    }
}
