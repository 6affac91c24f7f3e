use std::fmt::{self, Debug, Formatter};

use super::red_black::{IntoIter, Iter, RedBlackTree};
use crate::collections::traits::{Compare, Natural, Set};

/// An ordered set of unique items, backed by a [`RedBlackTree`].
///
/// # Examples
/// ```
/// # use containers::collections::tree::TreeSet;
/// let mut set: TreeSet<_> = [8, 2, 5].into_iter().collect();
/// assert!(!set.insert(2));
/// assert_eq!(set.first(), Some(&2));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [2, 5, 8]);
/// ```
pub struct TreeSet<T, C: Compare<T> = Natural> {
    pub(crate) inner: RedBlackTree<T, C>,
}

impl<T: Ord> TreeSet<T> {
    pub const fn new() -> TreeSet<T> {
        TreeSet {
            inner: RedBlackTree::new(),
        }
    }
}

impl<T, C: Compare<T>> TreeSet<T, C> {
    pub const fn with_compare(compare: C) -> TreeSet<T, C> {
        TreeSet {
            inner: RedBlackTree::with_compare(compare),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `item` to the set, returning false if an equivalent item was already present.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    pub fn get(&self, item: &T) -> Option<&T> {
        self.inner.get(item)
    }

    pub fn remove(&mut self, item: &T) -> Option<T> {
        self.inner.remove(item)
    }

    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.inner.pop_first()
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.inner.pop_last()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Iterates over the items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns the underlying tree.
    pub fn into_inner(self) -> RedBlackTree<T, C> {
        self.inner
    }
}

impl<T, C: Compare<T>> Set<T> for TreeSet<T, C> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, C: Compare<T> + Default> Default for TreeSet<T, C> {
    fn default() -> Self {
        TreeSet {
            inner: RedBlackTree::default(),
        }
    }
}

impl<T, C: Compare<T>> From<RedBlackTree<T, C>> for TreeSet<T, C> {
    fn from(inner: RedBlackTree<T, C>) -> Self {
        TreeSet { inner }
    }
}

impl<T, C: Compare<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for TreeSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TreeSet {
            inner: RedBlackTree::from_iter(iter),
        }
    }
}

impl<T, C: Compare<T>> IntoIterator for TreeSet<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Clone, C: Compare<T> + Clone> Clone for TreeSet<T, C> {
    fn clone(&self) -> Self {
        TreeSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq, C: Compare<T>> PartialEq for TreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, C: Compare<T>> Eq for TreeSet<T, C> {}

impl<T: Debug, C: Compare<T>> Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
