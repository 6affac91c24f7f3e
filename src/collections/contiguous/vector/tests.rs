#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_capacity_doubles_from_one() {
    let mut vec = Vector::new();
    let mut caps = Vector::new();
    for i in 0..9 {
        vec.push(i);
        caps.push(vec.cap());
    }
    assert_eq!(&*caps, &[1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5, 6, 7, 8], "Growth should preserve every element.");
}

#[test]
fn test_access() {
    let mut vec: Vector<_> = (0..5).collect();
    assert_eq!(vec.at(4), Ok(&4));
    assert_eq!(vec.at(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    // SAFETY: 2 < 5.
    assert_eq!(unsafe { *vec.get_unchecked(2) }, 2);

    vec[0] = 100;
    assert_eq!(vec[0], 100);
    assert_panics!({
        let vec: Vector<u8> = Vector::new();
        let _ = vec[0];
    });
}

#[test]
fn test_pop_until_empty() {
    let mut vec: Vector<_> = (0..5).collect();
    for i in (0..5).rev() {
        assert_eq!(vec.pop(), Some(i));
    }
    assert_eq!(vec.pop(), None);
    assert!(vec.is_empty());
}

#[test]
fn test_drop_and_into_iter() {
    let counter = DropCounter::new();
    let mut vec = Vector::new();
    for i in 0..10 {
        vec.push(counter.track(i));
    }
    drop(vec.pop());
    assert_eq!(counter.dropped(), 1);
    drop(vec);
    assert_eq!(counter.dropped(), 10, "Every remaining element should be dropped exactly once.");

    let counter = DropCounter::new();
    let vec: Vector<_> = (0..4).map(|i| counter.track(i)).collect();
    let values: Vector<_> = vec.into_iter().map(|t| t.value).collect();
    assert_eq!(&*values, &[0, 1, 2, 3]);
    assert_eq!(counter.dropped(), 4);
}

#[test]
fn test_clone_and_eq() {
    let vec: Vector<_> = "abc".chars().collect();
    let other = vec.clone();
    assert_eq!(vec, other);
    vec.iter().zip(other.iter()).for_each(|(a, b)| assert_eq!(a, b));
}
