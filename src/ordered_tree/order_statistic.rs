use core::borrow::Borrow;
use core::ops::{Bound, Index, IndexMut};

use super::OrderedTree;
use crate::{Rank, TreeError};

impl<K: Ord, V> OrderedTree<K, V> {
    /// Returns the number of keys strictly less than `key`.
    ///
    /// `key` does not have to be present; the answer is the position it would take.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (3, ()), (1, ()), (5, ())]);
    /// assert_eq!(tree.rank(&5), 2);
    /// assert_eq!(tree.rank(&4), 2);
    /// assert_eq!(tree.rank(&0), 0);
    /// assert_eq!(tree.rank(&11), 4);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the key with exactly `index` smaller keys.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`] unless `index < self.len()`.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::{OrderedTree, TreeError};
    ///
    /// let tree = OrderedTree::from([(10, ()), (3, ()), (1, ()), (5, ())]);
    /// assert_eq!(tree.select(2), Ok(&5));
    /// assert_eq!(tree.select(4), Err(TreeError::IndexOutOfRange { index: 4, len: 4 }));
    /// ```
    pub fn select(&self, index: usize) -> Result<&K, TreeError> {
        match self.get_by_rank(index) {
            Some((key, _)) => Ok(key),
            None => {
                let len = self.len();
                tracing::trace!(index, len, "rejected select outside the table");
                Err(TreeError::IndexOutOfRange { index, len })
            }
        }
    }

    /// Returns the key-value pair at position `rank` in sorted order, or `None` if
    /// `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.put("a", 10);
    /// tree.put("c", 30);
    /// tree.put("b", 20);
    ///
    /// assert_eq!(tree.get_by_rank(1), Some((&"b", &20)));
    /// assert!(tree.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.get_by_rank(rank)?);
        Some((node.key(), node.value()))
    }

    /// Returns a mutable reference to the value at position `rank` in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(10, "a"), (5, "b")]);
    /// if let Some(value) = tree.get_by_rank_mut(0) {
    ///     *value = "updated";
    /// }
    /// assert_eq!(tree.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<&mut V> {
        let handle = self.raw.get_by_rank(rank)?;
        Some(self.raw.node_mut(handle).value_mut())
    }

    /// Returns the greatest key less than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (3, ()), (5, ())]);
    /// assert_eq!(tree.floor(&4), Some(&3));
    /// assert_eq!(tree.floor(&5), Some(&5));
    /// assert_eq!(tree.floor(&2), None);
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Some(self.raw.node(self.raw.floor(key)?).key())
    }

    /// Returns the least key greater than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (3, ()), (5, ())]);
    /// assert_eq!(tree.ceiling(&4), Some(&5));
    /// assert_eq!(tree.ceiling(&11), None);
    /// ```
    #[must_use]
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Some(self.raw.node(self.raw.ceiling(key)?).key())
    }

    /// Returns the number of keys in `[lo, hi]`; zero when `hi < lo`.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (3, ()), (1, ()), (5, ()), (2, ()), (7, ())]);
    /// assert_eq!(tree.range_count(&2, &7), 4);
    /// assert_eq!(tree.range_count(&4, &6), 1);
    /// assert_eq!(tree.range_count(&7, &2), 0);
    /// ```
    #[must_use]
    pub fn range_count<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.count_between(Bound::Included(lo), Bound::Included(hi))
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osbst::{OrderedTree, Rank};
///
/// let tree = OrderedTree::from([("a", 1), ("b", 2)]);
/// assert_eq!(tree[Rank(1)], 2);
/// ```
impl<K: Ord, V> Index<Rank> for OrderedTree<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}

/// Mutably indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osbst::{OrderedTree, Rank};
///
/// let mut tree = OrderedTree::from([("a", 1), ("b", 2)]);
/// tree[Rank(1)] = 5;
/// assert_eq!(tree.get(&"b"), Some(&5));
/// ```
impl<K: Ord, V> IndexMut<Rank> for OrderedTree<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).expect("rank out of bounds")
    }
}
