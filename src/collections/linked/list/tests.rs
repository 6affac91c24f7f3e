#![cfg(test)]

use std::collections::VecDeque;

use super::*;
use crate::util::alloc::DropCounter;

#[test]
fn test_push_and_pop_both_ends() {
    let mut list = LinkedList::new();
    for i in 1..=4 {
        list.push_back(i);
    }
    for i in 1..=4 {
        list.push_front(-i);
    }
    list.verify_double_links();

    assert_eq!(list.len(), 8);
    assert_eq!(list.front(), Some(&-4));
    assert_eq!(list.back(), Some(&4));
    assert_eq!(
        list.iter().copied().collect::<VecDeque<_>>(),
        VecDeque::from([-4, -3, -2, -1, 1, 2, 3, 4])
    );

    assert_eq!(list.pop_back(), Some(4));
    assert_eq!(list.pop_front(), Some(-4));
    list.verify_double_links();
    assert_eq!(list.len(), 6);
}

#[test]
fn test_pop_empty_is_noop() {
    let mut list: LinkedList<u8> = LinkedList::new();
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.len(), 0);

    list.push_back(1);
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), None);
    assert!(list.front().is_none());
    assert!(list.back().is_none());
    list.verify_double_links();
}

#[test]
fn test_iterators_meet_in_the_middle() {
    let mut list: LinkedList<_> = (0..5).collect();
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(iter.next(), None);

    for value in list.iter_mut() {
        *value *= 10;
    }
    assert!(list.contains(&40));
    assert_eq!(list.into_iter().rev().collect::<VecDeque<_>>(), VecDeque::from([40, 30, 20, 10, 0]));
}

#[test]
fn test_drop_frees_every_node() {
    let counter = DropCounter::new();
    let list: LinkedList<_> = (0..10).map(|i| counter.track(i)).collect();
    drop(list);
    assert_eq!(counter.dropped(), 10);
}
