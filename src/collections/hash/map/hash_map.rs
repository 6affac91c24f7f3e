use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::contiguous::{Array, Vector};
use crate::collections::linked::ForwardList;
use crate::util::fmt::DebugRaw;

pub const DEFAULT_BUCKETS: usize = 10;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 7;
const LOAD_FACTOR_DENOMINATOR: usize = 10;

/// A map of keys to values which relies on the keys implementing [`Hash`], resolving collisions by
/// separate chaining.
///
/// Every bucket is a [`ForwardList`] of the entries whose hash maps to it. Once the load factor
/// (`len / bucket_count`) exceeds 7/10, the next insertion first doubles the number of buckets and
/// redistributes every entry.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
/// - `c`: The length of the chain for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains_key` | `O(c)` |
/// | `rehash` | `O(n)` |
///
/// \* If the HashMap has exceeded its load factor, `insert` will rehash first and take `O(n)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Array<Chain<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Chain<K, V> = ForwardList<(K, V)>;

impl<K: Hash + Eq, V> HashMap<K, V> {
    /// Creates a new HashMap with [`DEFAULT_BUCKETS`] buckets and a randomly seeded hasher.
    pub fn new() -> HashMap<K, V> {
        HashMap::with_buckets_and_hasher(DEFAULT_BUCKETS, RandomState::new())
    }

    /// Creates a new HashMap with `bucket_count` buckets (at least one).
    pub fn with_buckets(bucket_count: usize) -> HashMap<K, V> {
        HashMap::with_buckets_and_hasher(bucket_count, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with [`DEFAULT_BUCKETS`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap::with_buckets_and_hasher(DEFAULT_BUCKETS, hasher)
    }

    /// Creates a new HashMap with `bucket_count` buckets (at least one) and the provided `hasher`.
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: Self::empty_buckets(bucket_count),
            len: 0,
            hasher,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn bucket_count(&self) -> usize {
        self.buckets.size()
    }

    /// Returns the average number of entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    /// Inserts the provided `key`-`value` pair, returning true if it was added. If the key is
    /// already present, the map is left unchanged and false is returned.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::hash::HashMap;
    /// let mut map = HashMap::new();
    /// assert!(map.insert("a", 1));
    /// assert!(!map.insert("a", 2));
    /// assert_eq!(map.get("a"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.should_grow() {
            self.rehash(self.bucket_count() * GROWTH_FACTOR);
        }

        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];
        if chain.iter().any(|(existing, _)| *existing == key) {
            return false;
        }

        chain.push_front((key, value));
        self.len += 1;
        true
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q is a borrowed form of K, where hashing and equality carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with `key`, if there is one.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with `key`, if there is one.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists. Only the chain for
    /// `key` is scanned, and the length only changes if an entry was actually removed.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let removed = self.buckets[index].remove_first(|(existing, _)| existing.borrow() == key)?;
        self.len -= 1;
        Some(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Redistributes every entry into `bucket_count` new buckets (at least one). Entries are moved,
    /// never cloned, so none can be lost or duplicated.
    pub fn rehash(&mut self, bucket_count: usize) {
        let old_count = self.bucket_count();
        let old_buckets = mem::replace(&mut self.buckets, Self::empty_buckets(bucket_count));

        for (key, value) in old_buckets.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets[index].push_front((key, value));
        }

        log::debug!(
            "HashMap rehashed {} entries from {} to {} buckets",
            self.len,
            old_count,
            self.bucket_count()
        );
    }

    /// Removes every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, allowing mutation of values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the load factor has exceeded 7/10, meaning the map should grow before
    /// inserting new entries.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR > self.buckets.size() * LOAD_FACTOR_NUMERATOR
    }

    /// Calculates the bucket for the provided `hashable`. There is always at least one bucket.
    pub(crate) fn bucket_index<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        (self.hasher.hash_one(hashable) % self.bucket_count() as u64) as usize
    }

    pub(crate) fn empty_buckets(bucket_count: usize) -> Array<Chain<K, V>> {
        Array::from_fn(bucket_count.max(1), |_| ForwardList::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(k, v)| other.get(k).is_some_and(|o| o == v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::default();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vector<DebugRaw> = self.buckets.iter()
            .map(|chain| DebugRaw(if chain.is_empty() {
                "-".into()
            } else {
                chain.iter()
                    .map(|(k, v)| format!("({k:?}: {v:?})"))
                    .collect::<Vector<_>>()
                    .join(" -> ")
            }))
            .collect();

        f.debug_struct("HashMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
