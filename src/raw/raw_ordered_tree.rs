use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::Bound;

use alloc::vec::Vec;
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// The unbalanced, size-augmented binary search tree backing `OrderedTree`.
#[derive(Clone)]
pub(crate) struct RawOrderedTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

/// Path element for tracking traversal during mutations.
struct PathElement {
    /// Handle to the node at this level.
    node: Handle,
    /// Child link we descended through.
    side: Side,
}

/// Stack of path elements from the root down to the parent of the current node.
///
/// Unbalanced trees can be deep, so this spills to the heap instead of recursing.
type Path = SmallVec<[PathElement; 32]>;

impl<K, V> RawOrderedTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of node slots reserved.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of key-value pairs in the tree, read from the root's cached count.
    pub(crate) fn len(&self) -> usize {
        self.count(self.root)
    }

    /// Returns true if the tree contains no elements.
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears all elements from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Returns a reference to a node by handle.
    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Returns a mutable reference to a node by handle.
    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Size of the (possibly absent) subtree at `handle`.
    #[inline]
    fn count(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |h| self.nodes.get(h).count())
    }

    /// Recomputes a node's count from its children.
    fn update_count(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let count = self.count(node.left()) + self.count(node.right()) + 1;
        self.nodes.get_mut(handle).set_count(count);
    }

    /// Recomputes counts bottom-up along a descent path.
    fn update_counts_along_path(&mut self, path: &Path) {
        for element in path.iter().rev() {
            self.update_count(element.node);
        }
    }

    /// Points the link recorded by `parent` (or the root, when there is none) at `child`.
    fn relink(&mut self, parent: Option<&PathElement>, child: Option<Handle>) {
        match parent {
            Some(parent) => self.nodes.get_mut(parent.node).set_child(parent.side, child),
            None => self.root = child,
        }
    }

    /// Follows `side` links from `from` until the last node on that spine.
    fn extreme(&self, from: Handle, side: Side) -> Handle {
        let mut current = from;
        while let Some(next) = self.nodes.get(current).child(side) {
            current = next;
        }
        current
    }

    /// Returns the handle of the minimum (`Side::Left`) or maximum (`Side::Right`) node.
    pub(crate) fn first(&self, side: Side) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, side))
    }

    /// Unlinks the extreme node of the subtree rooted at `top`.
    ///
    /// Returns the new root of that subtree and the detached node, whose own links
    /// are left untouched for the caller to overwrite or drop.
    fn detach_extreme(&mut self, top: Handle, side: Side) -> (Option<Handle>, Handle) {
        let mut path = Path::new();
        let mut current = top;
        while let Some(next) = self.nodes.get(current).child(side) {
            path.push(PathElement { node: current, side });
            current = next;
        }

        let replacement = self.nodes.get(current).child(side.opposite());
        let Some(parent) = path.last() else {
            return (replacement, current);
        };
        self.nodes.get_mut(parent.node).set_child(side, replacement);
        self.update_counts_along_path(&path);
        (Some(top), current)
    }

    /// Removes and returns the minimum (`Side::Left`) or maximum (`Side::Right`) entry.
    pub(crate) fn pop(&mut self, side: Side) -> Option<(K, V)> {
        let root = self.root?;
        let (root, detached) = self.detach_extreme(root, side);
        self.root = root;
        Some(self.nodes.take(detached).into_entry())
    }

    /// Pushes `from` and its chain of left descendants onto `stack`.
    pub(crate) fn push_left_spine(&self, from: Option<Handle>, stack: &mut Vec<Handle>) {
        let mut current = from;
        while let Some(handle) = current {
            stack.push(handle);
            current = self.nodes.get(handle).left();
        }
    }

    /// Collects every handle in ascending key order.
    fn in_order(&self) -> Vec<Handle> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        self.push_left_spine(self.root, &mut stack);
        while let Some(handle) = stack.pop() {
            order.push(handle);
            self.push_left_spine(self.nodes.get(handle).right(), &mut stack);
        }
        order
    }

    /// Rebuilds the tree into minimum height, keeping every node (and handle) in place.
    pub(crate) fn balance(&mut self) {
        let order = self.in_order();
        debug_assert_eq!(order.len(), self.nodes.len(), "balance: reachable nodes differ from live nodes");
        self.root = self.build_balanced(&order);
        tracing::debug!(
            len = order.len(),
            height = usize::BITS - order.len().leading_zeros(),
            "rebuilt tree into minimum-height shape"
        );
    }

    /// Links the ascending run `order` into a balanced subtree and returns its root.
    fn build_balanced(&mut self, order: &[Handle]) -> Option<Handle> {
        if order.is_empty() {
            return None;
        }

        // An even-length run is rooted at the upper of its two middle nodes.
        let mid = order.len() / 2;
        let root = order[mid];
        let left = self.build_balanced(&order[..mid]);
        let right = self.build_balanced(&order[mid + 1..]);

        let node = self.nodes.get_mut(root);
        node.set_children(left, right);
        node.set_count(order.len());
        Some(root)
    }

    /// Returns the number of levels in the tree; zero when empty.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Handle, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }
}

impl<K: Ord, V> RawOrderedTree<K, V> {
    /// Searches for a key and returns its node handle if found.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut path = Path::new();
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get_mut(handle);
            let side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                // Replacing a value leaves every count as it was.
                Ordering::Equal => return Some(core::mem::replace(node.value_mut(), value)),
            };
            path.push(PathElement { node: handle, side });
            current = node.child(side);
        }

        let handle = self.nodes.alloc(Node::new(key, value));
        self.relink(path.last(), Some(handle));
        self.update_counts_along_path(&path);
        None
    }

    /// Removes a key from the tree, returning the stored key and value if present.
    ///
    /// A node with two children is replaced by the minimum of its right subtree.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path = Path::new();
        let mut current = self.root;

        let target = loop {
            let Some(handle) = current else {
                tracing::trace!(len = self.len(), "remove of an absent key is a no-op");
                return None;
            };
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.key().borrow()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break handle,
            };
            path.push(PathElement { node: handle, side });
            current = node.child(side);
        };

        let node = self.nodes.get(target);
        let replacement = match (node.left(), node.right()) {
            (None, child) | (child, None) => child,
            (Some(left), Some(right)) => {
                let (right, successor) = self.detach_extreme(right, Side::Left);
                self.nodes.get_mut(successor).set_children(Some(left), right);
                self.update_count(successor);
                Some(successor)
            }
        };

        self.relink(path.last(), replacement);
        self.update_counts_along_path(&path);
        Some(self.nodes.take(target).into_entry())
    }

    /// Greatest key less than or equal to `key`.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.nearest(key, Side::Left)
    }

    /// Least key greater than or equal to `key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.nearest(key, Side::Right)
    }

    /// Shared descent for `floor` (`toward == Left`) and `ceiling` (`toward == Right`).
    ///
    /// Every node passed while heading away from `toward` is a candidate; the last
    /// one seen is the closest.
    fn nearest<Q>(&self, key: &Q, toward: Side) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.key().borrow()) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            if side != toward {
                best = Some(handle);
            }
            current = node.child(side);
        }
        best
    }

    /// Number of keys strictly less than `key`.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.key().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => {
                    rank += self.count(node.left()) + 1;
                    current = node.right();
                }
                Ordering::Equal => return rank + self.count(node.left()),
            }
        }
        rank
    }

    /// Gets the node with exactly `rank` smaller keys.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<Handle> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root?;
        let mut remaining = rank;
        loop {
            let node = self.nodes.get(current);
            let left = self.count(node.left());
            current = match remaining.cmp(&left) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => {
                    remaining -= left + 1;
                    node.right()?
                }
            };
        }
    }

    /// Finds where an in-order walk starting at `lower` begins.
    ///
    /// Leaves on `stack` exactly the nodes an in-order walk would still visit before
    /// climbing past them, skipping every subtree wholly below the bound.
    pub(crate) fn seek<Q>(&self, lower: Bound<&Q>, stack: &mut Vec<Handle>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let (inside, go_left) = match lower {
                Bound::Unbounded => (true, true),
                Bound::Included(lo) => match lo.cmp(node.key().borrow()) {
                    Ordering::Less => (true, true),
                    Ordering::Equal => (true, false),
                    Ordering::Greater => (false, false),
                },
                Bound::Excluded(lo) => (lo < node.key().borrow(), lo < node.key().borrow()),
            };

            if inside {
                stack.push(handle);
                if !go_left {
                    break;
                }
                current = node.left();
            } else {
                current = node.right();
            }
        }
    }

    /// Number of keys that fall between `lower` and `upper`; zero for inverted bounds.
    pub(crate) fn count_between<Q>(&self, lower: Bound<&Q>, upper: Bound<&Q>) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let below = match lower {
            Bound::Unbounded => 0,
            Bound::Included(lo) => self.rank(lo),
            Bound::Excluded(lo) => self.rank(lo) + usize::from(self.search(lo).is_some()),
        };
        let through = match upper {
            Bound::Unbounded => self.len(),
            Bound::Included(hi) => self.rank(hi) + usize::from(self.search(hi).is_some()),
            Bound::Excluded(hi) => self.rank(hi),
        };
        through.saturating_sub(below)
    }
}
