#![cfg(test)]

use std::collections::BTreeSet;

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::Reversed;
use crate::util::alloc::{DropCounter, Tracked};

/// A deterministic shuffle of `0..count`.
fn scrambled(count: u64) -> Vector<u64> {
    let mut state = 0x2545_f491_u64;
    let mut items: Vector<u64> = (0..count).collect();
    for i in (1..items.len()).rev() {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        items.swap(i, (state >> 33) as usize % (i + 1));
    }
    items
}

fn height<T>(link: Link<T>) -> usize {
    match link {
        // SAFETY: Only called on links of a live tree.
        Some(node) => unsafe { 1 + height(node.node().left).max(height(node.node().right)) },
        None => 0,
    }
}

#[test]
fn test_small_insert() {
    let mut tree = RedBlackTree::new();
    assert!(tree.insert(5));
    assert!(tree.insert(3));
    assert!(tree.insert(7));

    assert_eq!(*tree.iter().copied().collect::<Vector<_>>(), [3, 5, 7]);
    // SAFETY: The tree is non-empty.
    let root = unsafe { tree.root.map(|root| root.node()) };
    assert_eq!(root.map(|root| (root.value, root.color)), Some((5, Color::Black)));
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn test_duplicates_are_ignored() {
    let mut tree: RedBlackTree<_> = [4, 2, 6].into_iter().collect();
    assert!(!tree.insert(4), "Inserting an equal value should be rejected.");
    assert!(!tree.insert(6));
    assert_eq!(tree.len(), 3);
    assert_eq!(*tree.iter().copied().collect::<Vector<_>>(), [2, 4, 6]);
}

#[test]
fn test_rotations_on_sorted_input() {
    let mut tree = RedBlackTree::new();
    for i in 0..512 {
        tree.insert(i);
        assert_eq!(tree.validate(), Ok(()), "Invariants broken after inserting {i}.");
    }

    // 2 * log2(513) < 18
    assert!(height(tree.root) <= 18, "Sorted input should not degrade into a list.");

    let mut tree = RedBlackTree::new();
    for i in (0..512).rev() {
        tree.insert(i);
    }
    assert_eq!(tree.validate(), Ok(()));
    assert!(height(tree.root) <= 18);
}

#[test]
fn test_remove_matches_oracle() {
    let mut tree = RedBlackTree::new();
    let mut oracle = BTreeSet::new();
    for item in scrambled(600).iter().copied() {
        assert_eq!(tree.insert(item), oracle.insert(item));
    }

    let removals = scrambled(700);
    for (step, item) in removals.iter().enumerate() {
        assert_eq!(tree.remove(item), oracle.take(item));
        assert_eq!(tree.len(), oracle.len());
        if step % 7 == 0 {
            assert_eq!(tree.validate(), Ok(()), "Invariants broken after removing {item}.");
            assert!(tree.iter().eq(oracle.iter()));
        }
    }

    assert!(tree.is_empty());
    assert!(tree.root.is_none());
    assert_eq!(tree.remove(&3), None);
}

#[test]
fn test_interleaved_insert_and_remove() {
    let mut tree = RedBlackTree::new();
    let mut oracle = BTreeSet::new();

    for (i, item) in scrambled(2000).iter().map(|i| i % 300).enumerate() {
        if i % 3 == 0 {
            assert_eq!(tree.remove(&item).is_some(), oracle.remove(&item));
        } else {
            assert_eq!(tree.insert(item), oracle.insert(item));
        }
    }

    assert_eq!(tree.validate(), Ok(()));
    assert!(tree.iter().eq(oracle.iter()));
    assert!(tree.iter().rev().eq(oracle.iter().rev()));
    assert_eq!(tree.iter().len(), oracle.len());
}

#[test]
fn test_first_and_last() {
    let mut tree: RedBlackTree<_> = scrambled(50).into_iter().collect();
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.last(), Some(&49));

    assert_eq!(tree.pop_first(), Some(0));
    assert_eq!(tree.pop_last(), Some(49));
    assert_eq!(tree.first(), Some(&1));
    assert_eq!(tree.last(), Some(&48));
    assert_eq!(tree.validate(), Ok(()));

    let mut empty: RedBlackTree<u8> = RedBlackTree::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.pop_last(), None);
}

#[test]
fn test_custom_order() {
    let tree: RedBlackTree<_, Reversed> = (0..10).collect();
    assert!(tree.iter().copied().eq((0..10).rev()));
    assert_eq!(tree.validate(), Ok(()));

    let mut by_len = RedBlackTree::with_compare(|a: &&str, b: &&str| a.len() < b.len());
    assert!(by_len.insert("ccc"));
    assert!(by_len.insert("a"));
    assert!(!by_len.insert("bbb"), "Equivalent values should count as duplicates.");
    assert_eq!(by_len.get(&"xyz"), Some(&"ccc"));
    assert!(by_len.contains(&"q"));
}

#[test]
fn test_into_iter() {
    let tree: RedBlackTree<_> = scrambled(20).into_iter().collect();
    let mut iter = tree.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(19));
    assert_eq!(iter.len(), 18);
    assert!(iter.eq(1..19));
}

#[test]
fn test_drop_and_clear() {
    let counter = DropCounter::new();
    let by_value = |a: &Tracked<u64>, b: &Tracked<u64>| a.value < b.value;

    let mut tree = RedBlackTree::with_compare(by_value);
    for item in scrambled(100).iter() {
        tree.insert(counter.track(*item));
    }
    assert!(!tree.insert(counter.track(5)));
    assert_eq!(counter.dropped(), 1, "A rejected duplicate should be dropped immediately.");

    drop(tree.pop_first());
    assert_eq!(counter.dropped(), 2);

    tree.clear();
    assert_eq!(counter.dropped(), 101);
    assert!(tree.is_empty());

    tree.insert(counter.track(7));
    drop(tree);
    assert_eq!(counter.dropped(), 102, "Every value should be dropped exactly once.");
}

#[test]
fn test_validate_reports_violations() {
    let tree: RedBlackTree<_> = (0..10).collect();
    // SAFETY: The tree is non-empty and not borrowed elsewhere.
    unsafe { tree.root.unwrap().node_mut().color = Color::Red };
    assert!(tree.validate().unwrap_err().is_red_root());

    let mut tree: RedBlackTree<_> = (0..10).collect();
    tree.len = 11;
    assert_eq!(tree.validate(), Err(RedBlackViolation::LenMismatch { found: 10, len: 11 }));
    tree.len = 10;
}

#[test]
fn test_debug() {
    let tree: RedBlackTree<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    assert_eq!(format!("{tree:#?}"), "┌    ┌    -\n┌    (R 1)\n┌    └    -\n(B 2)\n└    ┌    -\n└    (R 3)\n└    └    -");
}
