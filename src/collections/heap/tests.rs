#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::Reversed;

#[test]
fn test_top_is_maximum() {
    let mut pq = PriorityQueue::new();
    pq.push(10);
    pq.push(20);
    pq.push(15);
    assert_eq!(pq.top(), Some(&20));
    assert_eq!(pq.pop(), Some(20));
    assert_eq!(pq.top(), Some(&15));
    assert_eq!(pq.pop(), Some(15));
    assert_eq!(pq.top(), Some(&10));
    assert_eq!(pq.pop(), Some(10));
    assert_eq!(pq.top(), None);
    assert_eq!(pq.pop(), None, "Popping an empty queue should be a no-op.");
}

#[test]
fn test_reversed_is_min_heap() {
    let mut pq = PriorityQueue::with_compare(Reversed);
    pq.extend([5, 1, 8, 3, 9, 2]);
    pq.verify_heap();

    let mut popped = Vector::new();
    while let Some(value) = pq.pop() {
        popped.push(value);
    }
    assert_eq!(&*popped, &[1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_closure_compare() {
    let mut pq = PriorityQueue::with_compare(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
    pq.push((2, 'b'));
    pq.push((7, 'g'));
    pq.push((4, 'd'));
    assert_eq!(pq.top().map(|e| e.1), Some('g'));
}

#[test]
fn test_heapify_and_sort() {
    let pq: PriorityQueue<_> = [3, 14, 1, 5, 9, 2, 6, 5, 3, 5].into_iter().collect();
    pq.verify_heap();
    assert_eq!(pq.len(), 10);
    assert_eq!(pq.top(), Some(&14));
    assert_eq!(&*pq.into_sorted_vector(), &[1, 2, 3, 3, 5, 5, 5, 6, 9, 14]);
}
