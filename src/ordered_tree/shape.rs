use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use alloc::collections::VecDeque;

use super::OrderedTree;
use crate::raw::{Handle, RawOrderedTree};

/// A breadth-first walk over the values of one subtree of an `OrderedTree`.
///
/// This `struct` is created by the [`level_order`] method on [`OrderedTree`]. It only
/// reads the tree, and yields nodes level by level, left to right within a level.
///
/// [`level_order`]: OrderedTree::level_order
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LevelOrder<'a, K, V> {
    tree: &'a RawOrderedTree<K, V>,
    queue: VecDeque<Handle>,
}

impl<K, V> OrderedTree<K, V> {
    /// Rebuilds the tree into minimum height, keeping the same bindings.
    ///
    /// The nodes are collected in key order and relinked so that every run is rooted
    /// at its middle node; a run of even length is rooted at the upper of its two
    /// middle nodes. Balancing an already balanced tree leaves its shape unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_, _> = (0..100).map(|i| (i, i)).collect();
    /// assert_eq!(tree.height(), 100);
    ///
    /// tree.balance();
    /// assert_eq!(tree.height(), 7);
    /// assert_eq!(tree.len(), 100);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn balance(&mut self) {
        self.raw.balance();
    }

    /// Returns the number of levels in the tree; zero for an empty tree.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns the key stored at the root of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, "TEN"), (3, "THREE")]);
    /// assert_eq!(tree.root_key(), Some(&10));
    /// ```
    #[must_use]
    pub fn root_key(&self) -> Option<&K> {
        self.raw.root().map(|root| self.raw.node(root).key())
    }
}

impl<K: Ord, V> OrderedTree<K, V> {
    /// Walks the subtree rooted at `key` breadth first, yielding each node's value.
    ///
    /// Yields nothing when `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for (key, value) in [(10, "TEN"), (3, "THREE"), (1, "ONE"), (5, "FIVE"), (2, "TWO"), (7, "SEVEN")] {
    ///     tree.put(key, value);
    /// }
    ///
    /// let levels: Vec<_> = tree.level_order(&10).copied().collect();
    /// assert_eq!(levels, ["TEN", "THREE", "ONE", "FIVE", "TWO", "SEVEN"]);
    ///
    /// tree.balance();
    /// let levels: Vec<_> = tree.level_order(&5).copied().collect();
    /// assert_eq!(levels, ["FIVE", "TWO", "TEN", "ONE", "THREE", "SEVEN"]);
    /// ```
    pub fn level_order<Q>(&self, key: &Q) -> LevelOrder<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        LevelOrder {
            tree: &self.raw,
            queue: self.raw.search(key).into_iter().collect(),
        }
    }
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = tree.node(self.queue.pop_front()?);
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl<K, V> FusedIterator for LevelOrder<'_, K, V> {}

impl<K, V> Clone for LevelOrder<'_, K, V> {
    fn clone(&self) -> Self {
        LevelOrder {
            tree: self.tree,
            queue: self.queue.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for LevelOrder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
