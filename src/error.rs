use thiserror::Error;

/// A caller contract violation reported by [`OrderedTree`](crate::OrderedTree).
///
/// A missing key is never an error: lookups that can miss return [`Option`].
/// These variants cover the operations that have no meaningful answer at all.
///
/// # Examples
///
/// ```
/// use osbst::{OrderedTree, TreeError};
///
/// let mut tree: OrderedTree<i32, &str> = OrderedTree::new();
/// assert_eq!(tree.min(), Err(TreeError::EmptyTable { operation: "min" }));
///
/// tree.put(1, "one");
/// assert_eq!(tree.select(1), Err(TreeError::IndexOutOfRange { index: 1, len: 1 }));
/// ```
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum TreeError {
    /// `min`, `max`, `delete_min` or `delete_max` was called on an empty table.
    #[error("{operation}() called on an empty table")]
    EmptyTable {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// `select` was asked for a position outside `0..len`.
    #[error("index {index} is out of range for a table of {len} keys")]
    IndexOutOfRange {
        /// The requested zero-based position.
        index: usize,
        /// Number of keys in the table at the time of the call.
        len: usize,
    },
}
