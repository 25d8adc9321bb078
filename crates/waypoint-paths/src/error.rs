//! Error types for graph and grid construction.

use crate::graph::NodeId;

/// Errors raised by graph and grid operations.
///
/// Searches never fail: an unreachable target yields an empty path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// A cost field does not hold exactly `width * height` cells.
    #[error("size of costs ({actual}) doesn't match width * height ({expected})")]
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied cost field.
        actual: usize,
    },

    /// [`DirectedGraph::split`](crate::DirectedGraph::split) was called on a
    /// pair without a direct edge.
    #[error("nodes {from} and {to} aren't connected")]
    NotConnected {
        /// Source of the missing edge.
        from: NodeId,
        /// Target of the missing edge.
        to: NodeId,
    },
}

/// Result alias for fallible operations in this crate.
pub type Result<T, E = PathError> = std::result::Result<T, E>;

/// Check that a cost field matches its declared dimensions.
pub(crate) fn check_size(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PathError::SizeMismatch { expected, actual });
    }
    Ok(())
}
