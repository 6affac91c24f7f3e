#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

fn collect<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_and_pop_front() {
    let mut list = ForwardList::new();
    for i in [6, 3, 2, 1] {
        list.push_front(i);
    }
    assert_eq!(list.len(), 4);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(collect(&list), [1, 2, 3, 6]);

    while list.pop_front().is_some() {}
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None, "Popping an empty list should be a no-op.");
}

#[test]
fn test_insert_after() {
    let mut list: ForwardList<_> = [1, 2, 3, 6].into_iter().collect();
    list.insert_after(2, 4);
    list.insert_after(3, 5);
    list.insert_after(5, 7);
    assert_eq!(collect(&list), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(list.len(), 7);

    assert_eq!(
        list.try_insert_after(7, 8),
        Err(IndexOutOfBounds { index: 7, len: 7 })
    );
    assert_eq!(list.len(), 7, "A failed insertion shouldn't change the length.");

    let mut empty = ForwardList::new();
    assert!(empty.try_insert_after(0, 1).is_err());
    assert_panics!({
        ForwardList::new().insert_after(0, 1);
    });
}

#[test]
fn test_erase_after_keeps_len_exact() {
    let mut list: ForwardList<_> = (0..5).collect();
    assert_eq!(list.erase_after(0), 1);
    assert_eq!(list.erase_after(2), 4);
    assert_eq!(collect(&list), [0, 2, 3]);
    assert_eq!(list.len(), 3);

    assert_eq!(
        list.try_erase_after(2),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "There is nothing after the last element."
    );
    assert_eq!(list.len(), 3);
}

#[test]
fn test_remove_first() {
    let mut list: ForwardList<_> = [1, 2, 3, 2].into_iter().collect();
    assert_eq!(list.remove_first(|v| *v == 2), Some(2));
    assert_eq!(collect(&list), [1, 3, 2]);
    assert_eq!(list.remove_first(|v| *v == 1), Some(1));
    assert_eq!(list.remove_first(|v| *v == 9), None);
    assert_eq!(collect(&list), [3, 2]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_drop_long_chain() {
    let counter = DropCounter::new();
    let list: ForwardList<_> = (0..100_000).map(|i| counter.track(i)).collect();
    drop(list);
    assert_eq!(counter.dropped(), 100_000);
}
