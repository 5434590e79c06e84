use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Bound, Index, RangeBounds};

use alloc::vec::Vec;

use crate::TreeError;
use crate::raw::{Handle, RawOrderedTree, Side};

mod capacity;
mod order_statistic;
mod shape;

pub use crate::Rank;
pub use shape::LevelOrder;

/// An ordered symbol table based on a size-augmented [binary search tree].
///
/// Given a key type with a [total order], an `OrderedTree` stores its entries in key order.
/// Keys must implement [`Ord`]; each key is bound to at most one value, and binding a key
/// that is already present replaces its value.
///
/// Every node caches the number of nodes in its subtree, which turns rank and selection
/// queries into a single root-to-leaf descent. All operations therefore cost O(h), where
/// h is the height of the tree. The tree does not rebalance itself: inserting keys in
/// sorted order yields a path of height n. Call [`balance`](Self::balance) to rebuild it
/// into minimum height whenever that matters.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the tree. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated to the
/// `OrderedTree` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use osbst::OrderedTree;
///
/// let mut planets = OrderedTree::new();
/// planets.put("Mercury", 0.4);
/// planets.put("Venus", 0.7);
/// planets.put("Earth", 1.0);
/// planets.put("Mars", 1.5);
///
/// assert_eq!(planets.get("Earth"), Some(&1.0));
/// assert!(!planets.contains("Pluto"));
///
/// // Order statistics.
/// assert_eq!(planets.min(), Ok(&"Earth"));
/// assert_eq!(planets.rank("Mercury"), 2);
/// assert_eq!(planets.select(3), Ok(&"Venus"));
///
/// // Keys come back in ascending order.
/// let names: Vec<_> = planets.keys().copied().collect();
/// assert_eq!(names, ["Earth", "Mars", "Mercury", "Venus"]);
///
/// planets.delete("Mars");
/// assert_eq!(planets.len(), 3);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct OrderedTree<K, V> {
    raw: RawOrderedTree<K, V>,
}

/// An iterator over a sub-range of the entries of an `OrderedTree`, in ascending key order.
///
/// This `struct` is created by the [`range`] method on [`OrderedTree`]. The number of entries
/// it yields is fixed when it is created, from the ranks of its bounds, so it stops as soon as
/// the last entry inside the range has been produced.
///
/// # Examples
///
/// ```
/// use osbst::OrderedTree;
///
/// let tree = OrderedTree::from([(1, "a"), (2, "b"), (3, "c")]);
/// let mut range = tree.range(2..);
/// assert_eq!(range.len(), 2);
/// assert_eq!(range.next(), Some((&2, &"b")));
/// ```
///
/// [`range`]: OrderedTree::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, K, V> {
    tree: &'a RawOrderedTree<K, V>,
    // Nodes still to be visited, next one on top.
    stack: Vec<Handle>,
    remaining: usize,
}

/// An iterator over the entries of an `OrderedTree`.
///
/// This `struct` is created by the [`iter`] method on [`OrderedTree`]. See its
/// documentation for more.
///
/// [`iter`]: OrderedTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: Range<'a, K, V>,
}

/// An iterator over the keys of an `OrderedTree`.
///
/// This `struct` is created by the [`keys`] and [`keys_between`] methods on [`OrderedTree`].
///
/// [`keys`]: OrderedTree::keys
/// [`keys_between`]: OrderedTree::keys_between
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Range<'a, K, V>,
}

/// An iterator over the values of an `OrderedTree`, in the order of their keys.
///
/// This `struct` is created by the [`values`] method on [`OrderedTree`].
///
/// [`values`]: OrderedTree::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Range<'a, K, V>,
}

impl<'a, K, V> Range<'a, K, V> {
    /// A walk over every entry of `tree`.
    fn full(tree: &'a RawOrderedTree<K, V>) -> Self {
        let mut stack = Vec::new();
        tree.push_left_spine(tree.root(), &mut stack);
        Range {
            tree,
            stack,
            remaining: tree.len(),
        }
    }

    fn empty(tree: &'a RawOrderedTree<K, V>) -> Self {
        Range {
            tree,
            stack: Vec::new(),
            remaining: 0,
        }
    }
}

impl<K, V> OrderedTree<K, V> {
    /// Makes a new, empty `OrderedTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// // entries can now be inserted into the empty tree
    /// tree.put(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> OrderedTree<K, V> {
        OrderedTree {
            raw: RawOrderedTree::new(),
        }
    }

    /// Clears the tree, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.put(1, "a");
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of bindings in the tree.
    ///
    /// This is the cached size of the root, so it never walks the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.put(1, "a");
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no bindings.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.is_empty());
    /// tree.put(1, "a");
    /// assert!(!tree.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTable`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.min(), Err(TreeError::EmptyTable { operation: "min" }));
    /// tree.put(2, "b");
    /// tree.put(1, "a");
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn min(&self) -> Result<&K, TreeError> {
        self.extreme(Side::Left, "min")
    }

    /// Returns the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTable`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.put(2, "b");
    /// tree.put(1, "a");
    /// assert_eq!(tree.max(), Ok(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn max(&self) -> Result<&K, TreeError> {
        self.extreme(Side::Right, "max")
    }

    fn extreme(&self, side: Side, operation: &'static str) -> Result<&K, TreeError> {
        match self.raw.first(side) {
            Some(handle) => Ok(self.raw.node(handle).key()),
            None => Err(empty_table(operation)),
        }
    }

    /// Removes the binding with the smallest key and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTable`] if the tree is empty; the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a"), (2, "b")]);
    /// assert_eq!(tree.delete_min(), Ok((1, "a")));
    /// assert_eq!(tree.delete_min(), Ok((2, "b")));
    /// assert!(tree.delete_min().is_err());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn delete_min(&mut self) -> Result<(K, V), TreeError> {
        self.raw.pop(Side::Left).ok_or_else(|| empty_table("delete_min"))
    }

    /// Removes the binding with the largest key and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTable`] if the tree is empty; the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a"), (2, "b")]);
    /// assert_eq!(tree.delete_max(), Ok((2, "b")));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn delete_max(&mut self) -> Result<(K, V), TreeError> {
        self.raw.pop(Side::Right).ok_or_else(|| empty_table("delete_max"))
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(3, "c"), (2, "b"), (1, "a")]);
    ///
    /// for (key, value) in tree.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = tree.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: Range::full(&self.raw),
        }
    }

    /// Gets an iterator over all keys of the tree, in ascending order.
    ///
    /// An empty tree yields an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = tree.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: Range::full(&self.raw),
        }
    }

    /// Gets an iterator over the values of the tree, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(2, "b"), (1, "a")]);
    /// let values: Vec<&str> = tree.values().copied().collect();
    /// assert_eq!(values, ["a", "b"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: Range::full(&self.raw),
        }
    }
}

impl<K: Ord, V> OrderedTree<K, V> {
    /// Returns a reference to the value bound to `key`, or `None` if the key is absent.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.put(1, None);
    /// assert_eq!(tree.get(&1), Some(&None::<&str>));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key)?;
        Some(self.raw.node(handle).value())
    }

    /// Returns a mutable reference to the value bound to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.put(1, "a");
    /// if let Some(x) = tree.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(tree[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key)?;
        Some(self.raw.node_mut(handle).value_mut())
    }

    /// Returns the stored key and its value for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(1, "a")]);
    /// assert_eq!(tree.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(tree.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.raw.node(self.raw.search(key)?);
        Some((node.key(), node.value()))
    }

    /// Returns `true` if the tree holds a binding for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, "a"), (3, "b"), (5, "c")]);
    /// assert!(tree.contains(&5));
    /// assert!(!tree.contains(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Binds `value` to `key`.
    ///
    /// If the key was absent a new node is linked in as a leaf and `None` is returned.
    /// Otherwise the value is replaced, the size is unchanged and the old value is returned.
    /// The key itself is not updated.
    ///
    /// A value that means "nothing" is an ordinary value here; wrap `V` in an
    /// [`Option`] if you need one. Use [`delete`](Self::delete) to remove a binding.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.put(37, "a"), None);
    /// assert!(!tree.is_empty());
    ///
    /// tree.put(37, "b");
    /// assert_eq!(tree.put(37, "c"), Some("b"));
    /// assert_eq!(tree[&37], "c");
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes the binding for `key`, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op. A node with two children is replaced by
    /// the smallest node of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a")]);
    /// assert_eq!(tree.delete(&1), Some("a"));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the binding for `key`, returning the stored key and value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(1, "a")]);
    /// assert_eq!(tree.delete_entry(&1), Some((1, "a")));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Constructs an iterator over a sub-range of entries in the tree, in ascending order.
    ///
    /// The simplest way is to use the range syntax `min..max`, thus `range(min..max)` will
    /// yield entries from min (inclusive) to max (exclusive). The range may also be entered
    /// as `(Bound<T>, Bound<T>)`. A range whose start lies above its end is empty.
    ///
    /// The walk skips every subtree that lies wholly outside the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    /// use std::ops::Bound::Included;
    ///
    /// let tree = OrderedTree::from([(3, "a"), (5, "b"), (8, "c")]);
    /// for (&key, &value) in tree.range((Included(&4), Included(&8))) {
    ///     println!("{key}: {value}");
    /// }
    /// assert_eq!(Some((&5, &"b")), tree.range(4..).next());
    /// assert_eq!(tree.range(6..4).count(), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) to create, amortized O(1) per element yielded on a balanced tree.
    pub fn range<T, R>(&self, range: R) -> Range<'_, K, V>
    where
        T: ?Sized + Ord,
        K: Borrow<T>,
        R: RangeBounds<T>,
    {
        let lower = range.start_bound();
        let remaining = self.raw.count_between(lower, range.end_bound());
        if remaining == 0 {
            return Range::empty(&self.raw);
        }

        let mut stack = Vec::new();
        self.raw.seek(lower, &mut stack);
        Range {
            tree: &self.raw,
            stack,
            remaining,
        }
    }

    /// Gets an iterator over the keys in `[lo, hi]`, in ascending order.
    ///
    /// Yields nothing when `hi < lo`. Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([(10, ()), (3, ()), (1, ()), (5, ()), (2, ()), (7, ())]);
    /// let keys: Vec<_> = tree.keys_between(&2, &7).copied().collect();
    /// assert_eq!(keys, [2, 3, 5, 7]);
    /// assert_eq!(tree.keys_between(&7, &2).count(), 0);
    /// ```
    pub fn keys_between<'a, Q>(&'a self, lo: &'a Q, hi: &'a Q) -> Keys<'a, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Keys {
            inner: self.range::<Q, _>((Bound::Included(lo), Bound::Included(hi))),
        }
    }
}

fn empty_table(operation: &'static str) -> TreeError {
    tracing::trace!(operation, "rejected call on an empty table");
    TreeError::EmptyTable { operation }
}

impl<K: Clone, V: Clone> Clone for OrderedTree<K, V> {
    fn clone(&self) -> Self {
        OrderedTree { raw: self.raw.clone() }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedTree<K, V> {
    /// Two trees are equal when they hold the same bindings, whatever their shapes.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedTree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedTree<K, V> {
    /// Creates an empty `OrderedTree`.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedTree<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedTree<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, Q, V> Index<&Q> for OrderedTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value bound to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `OrderedTree`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedTree<K, V> {
    /// Converts a `[(K, V); N]` into an `OrderedTree<K, V>`, inserting in array order.
    ///
    /// ```
    /// use osbst::OrderedTree;
    ///
    /// let tree1 = OrderedTree::from([(1, 2), (3, 4)]);
    /// let tree2: OrderedTree<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(tree1, tree2);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        OrderedTree::from_iter(arr)
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let tree = self.tree;
        let handle = self.stack.pop()?;
        self.remaining -= 1;
        let node = tree.node(handle);
        if self.remaining > 0 {
            tree.push_left_spine(node.right(), &mut self.stack);
        }
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Range<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Range<'_, K, V> {}

impl<K, V> Clone for Range<'_, K, V> {
    fn clone(&self) -> Self {
        Range {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Range<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
