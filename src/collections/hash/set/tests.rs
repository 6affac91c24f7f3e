#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::Set;
use crate::util::hash::{ManualHash, PassThroughBuilder};

#[test]
fn test_unique_elements() {
    let mut set = HashSet::new();
    for item in [5, 3, 5, 9, 3, 1] {
        set.insert(item);
    }

    assert_eq!(set.len(), 4);
    assert!(set.contains(&9));
    assert!(!set.contains(&2));

    let mut items = set.into_iter().collect::<Vector<_>>();
    items.sort();
    assert_eq!(*items, [1, 3, 5, 9]);
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_buckets_and_hasher(3, PassThroughBuilder);
    set.insert(ManualHash::new(0, "zero"));
    set.insert(ManualHash::new(3, "one"));
    set.insert(ManualHash::new(6, "two"));

    assert_eq!(set.len(), 3, "Items in the same bucket should all be kept.");
    assert_eq!(set.remove(&ManualHash::new(3, "one")).map(ManualHash::value), Some("one"));
    assert!(set.contains(&ManualHash::new(0, "zero")));
    assert!(set.contains(&ManualHash::new(6, "two")));
    assert_eq!(set.remove(&ManualHash::new(3, "one")).map(ManualHash::value), None);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_growth_keeps_items() {
    let mut set = HashSet::new();
    for i in 0..1000 {
        assert!(set.insert(i));
    }

    assert_eq!(set.len(), 1000);
    assert!(set.load_factor() <= 0.7);
    assert!((0..1000).all(|i| set.contains(&i)));
}

#[test]
fn test_set_operations() {
    let a: HashSet<i32> = (0..6).collect();
    let b: HashSet<i32> = (3..9).collect();

    let mut union = a.union(&b).copied().collect::<Vector<_>>();
    union.sort();
    assert_eq!(*union, [0, 1, 2, 3, 4, 5, 6, 7, 8]);

    let mut intersection = (&a & &b).into_iter().collect::<Vector<_>>();
    intersection.sort();
    assert_eq!(*intersection, [3, 4, 5]);

    let mut difference = (&a - &b).into_iter().collect::<Vector<_>>();
    difference.sort();
    assert_eq!(*difference, [0, 1, 2]);

    let mut symmetric = (&a ^ &b).into_iter().collect::<Vector<_>>();
    symmetric.sort();
    assert_eq!(*symmetric, [0, 1, 2, 6, 7, 8]);

    assert_eq!(&a | &b, (0..9).collect::<HashSet<_>>());
    assert!((&a & &b).is_subset(&a));
    assert!(a.is_superset(&(0..3).collect()));
}

#[test]
fn test_borrowed_lookup() {
    let mut set = HashSet::new();
    set.insert(String::from("hello"));

    assert!(set.contains("hello"));
    assert_eq!(set.get("hello").map(String::as_str), Some("hello"));
    assert_eq!(set.remove("hello"), Some(String::from("hello")));
    assert!(set.is_empty());
}
