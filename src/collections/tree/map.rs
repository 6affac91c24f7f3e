use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::red_black::{IntoIter as TreeIntoIter, Iter as TreeIter, Link, RedBlackTree};
use crate::collections::traits::{Compare, Natural};

/// Orders `(key, value)` entries by their keys alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByKey<C>(pub C);

impl<K, V, C: Compare<K>> Compare<(K, V)> for ByKey<C> {
    fn less(&self, a: &(K, V), b: &(K, V)) -> bool {
        self.0.less(&a.0, &b.0)
    }
}

/// An ordered map of unique keys to values, backed by a [`RedBlackTree`] of `(key, value)` entries
/// which is ordered by key only.
///
/// # Examples
/// ```
/// # use containers::collections::tree::TreeMap;
/// let mut map = TreeMap::new();
/// assert!(map.insert("b", 2));
/// assert!(map.insert("a", 1));
/// assert!(!map.insert("a", 100));
/// assert_eq!(map.get(&"a"), Some(&1));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
/// ```
pub struct TreeMap<K, V, C: Compare<K> = Natural> {
    pub(crate) inner: RedBlackTree<(K, V), ByKey<C>>,
}

impl<K: Ord, V> TreeMap<K, V> {
    pub const fn new() -> TreeMap<K, V> {
        TreeMap::with_compare(Natural)
    }
}

impl<K, V, C: Compare<K>> TreeMap<K, V, C> {
    /// Creates a new, empty TreeMap with keys ordered by `compare`.
    pub const fn with_compare(compare: C) -> TreeMap<K, V, C> {
        TreeMap {
            inner: RedBlackTree::with_compare(ByKey(compare)),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Inserts the provided `key`-`value` pair, returning true if it was added. If the key is
    /// already present, the existing entry is kept and false is returned.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.inner.insert((key, value))
    }

    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        let node = self.find(key)?;
        // SAFETY: The node is owned by the tree, which is borrowed for the returned lifetime.
        let (k, v) = unsafe { &node.node().value };
        Some((k, v))
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_entry(key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let node = self.find(key)?;
        // SAFETY: The node is owned by the tree, which is mutably borrowed for the returned
        // lifetime. Keys stay immutable so the order can't be broken.
        Some(unsafe { &mut node.node_mut().value.1 })
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes the entry for `key`, returning it if it exists.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let node = self.find(key)?;
        // SAFETY: The node was just found in this tree.
        Some(unsafe { self.inner.remove_node(node) })
    }

    /// Removes the entry for `key`, returning the value if it exists.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.inner.first().map(|(k, v)| (k, v))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.inner.last().map(|(k, v)| (k, v))
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.inner.pop_first()
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.inner.pop_last()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    fn find(&self, key: &K) -> Link<(K, V)> {
        let compare = &self.inner.compare.0;
        self.inner.find_by(|(existing, _)| compare.compare(key, existing))
    }
}

impl<K, V, C: Compare<K> + Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        TreeMap::with_compare(C::default())
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for TreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TreeMap::default();
        map.extend(iter);
        map
    }
}

impl<K: Clone, V: Clone, C: Compare<K> + Clone> Clone for TreeMap<K, V, C> {
    fn clone(&self) -> Self {
        TreeMap {
            inner: self.inner.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C: Compare<K>> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Eq, V: Eq, C: Compare<K>> Eq for TreeMap<K, V, C> {}

impl<K: Debug, V: Debug, C: Compare<K>> Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Compare<K>> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);

    type IntoIter = TreeIntoIter<(K, V), ByKey<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V, C: Compare<K>> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.iter())
    }
}

/// A borrowed iterator over the entries of a [`TreeMap`], in key order.
pub struct Iter<'a, K, V>(pub(crate) TreeIter<'a, (K, V)>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}
