/// A zero-based position in the ascending key order of an [`OrderedTree`](crate::OrderedTree).
///
/// Indexing by `Rank` is the panicking counterpart of
/// [`OrderedTree::get_by_rank`](crate::OrderedTree::get_by_rank).
///
/// # Examples
///
/// ```
/// use osbst::{OrderedTree, Rank};
///
/// let mut tree = OrderedTree::new();
/// tree.put("b", 20);
/// tree.put("a", 10);
///
/// assert_eq!(tree[Rank(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
