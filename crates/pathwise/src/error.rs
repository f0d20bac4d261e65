//! Error types for pathwise operations.

use crate::Path;
use thiserror::Error;

/// Result type alias for pathwise operations.
pub type PathwiseResult<T> = Result<T, PathwiseError>;

/// Errors that can occur while editing or validating a value.
///
/// Unresolved reads, removals of missing paths and absent copy sources are
/// not errors; they are handled as ordinary absence.
#[derive(Debug, Error)]
pub enum PathwiseError {
    /// A write had to step through a scalar or a container of the wrong kind.
    #[error("cannot traverse {path}: expected {expected}, found {found}")]
    PathTraversal {
        /// Prefix of the requested path where traversal stopped.
        path: Path,
        /// Container kind the next segment needed.
        expected: &'static str,
        /// Kind of value actually found there.
        found: &'static str,
    },

    /// A write landed further past the end of an array than padding allows.
    #[error("index {index} out of bounds at {path}: array length is {len}, at most {max_gap} slots may be padded")]
    IndexOutOfBounds {
        /// Path to the array.
        path: Path,
        /// The index that was written.
        index: usize,
        /// Length of the array before the write.
        len: usize,
        /// Largest gap between `len` and `index` that is filled with `null`.
        max_gap: usize,
    },

    /// An op with an unknown or missing tag arrived from untyped data.
    #[error("unsupported operation: {op}")]
    UnsupportedOperation {
        /// The offending tag, or a description of what was found instead.
        op: String,
    },

    /// The shape declared at a path does not match what the op needs.
    #[error("shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Where the mismatch occurred.
        path: Path,
        /// What was required.
        expected: &'static str,
        /// What the shape or value actually is.
        found: &'static str,
    },

    /// A record shape does not declare the requested key.
    #[error("unknown key at {path}")]
    UnknownKey {
        /// Path ending in the undeclared key.
        path: Path,
    },

    /// The target of a remove is a required field.
    #[error("cannot remove required field at {path}")]
    NotRemovable {
        /// Path of the required field.
        path: Path,
    },

    /// The two endpoints of a copy, move or swap hold different shapes.
    #[error("incompatible endpoints: {from} -> {to}")]
    IncompatibleEndpoints {
        /// Source path.
        from: Path,
        /// Destination path.
        to: Path,
    },

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PathwiseError {
    #[inline]
    pub fn path_traversal(path: Path, expected: &'static str, found: &'static str) -> Self {
        PathwiseError::PathTraversal {
            path,
            expected,
            found,
        }
    }

    #[inline]
    pub fn index_out_of_bounds(path: Path, index: usize, len: usize, max_gap: usize) -> Self {
        PathwiseError::IndexOutOfBounds {
            path,
            index,
            len,
            max_gap,
        }
    }

    #[inline]
    pub fn unsupported_operation(op: impl Into<String>) -> Self {
        PathwiseError::UnsupportedOperation { op: op.into() }
    }

    #[inline]
    pub fn shape_mismatch(path: Path, expected: &'static str, found: &'static str) -> Self {
        PathwiseError::ShapeMismatch {
            path,
            expected,
            found,
        }
    }

    #[inline]
    pub fn unknown_key(path: Path) -> Self {
        PathwiseError::UnknownKey { path }
    }

    #[inline]
    pub fn not_removable(path: Path) -> Self {
        PathwiseError::NotRemovable { path }
    }

    #[inline]
    pub fn incompatible_endpoints(from: Path, to: Path) -> Self {
        PathwiseError::IncompatibleEndpoints { from, to }
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathwiseError::PathTraversal { path, .. }
            | PathwiseError::IndexOutOfBounds { path, .. }
            | PathwiseError::ShapeMismatch { path, .. }
            | PathwiseError::UnknownKey { path }
            | PathwiseError::NotRemovable { path } => Some(path),
            PathwiseError::IncompatibleEndpoints { from, .. } => Some(from),
            PathwiseError::UnsupportedOperation { .. } | PathwiseError::Serialization(_) => None,
        }
    }
}
