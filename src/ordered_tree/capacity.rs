use super::OrderedTree;
use crate::raw::RawOrderedTree;

impl<K, V> OrderedTree<K, V> {
    /// Creates an empty tree with room for at least `capacity` nodes.
    ///
    /// Nodes freed by deletes are reused before new room is reserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree: OrderedTree<i32, i32> = OrderedTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedTree {
            raw: RawOrderedTree::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes the tree can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
