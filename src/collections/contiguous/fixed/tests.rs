#![cfg(test)]

use super::*;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_checked_and_unchecked_access() {
    let mut arr = FixedArray::new([1, 2, 3]);
    assert_eq!(arr.size(), 3);
    assert_eq!(arr.at(2), Ok(&3));
    assert_eq!(arr.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    *arr.at_mut(0).expect("index 0 is in bounds") = 10;
    // SAFETY: 1 < 3.
    assert_eq!(unsafe { *arr.get_unchecked(1) }, 2);
    assert_eq!(arr.into_inner(), [10, 2, 3]);

    assert_panics!({
        let arr = FixedArray::new([0_u8; 2]);
        let _ = arr[2];
    });
}

#[test]
fn test_default_is_zeroed() {
    let arr: FixedArray<u32, 4> = FixedArray::default();
    assert!(arr.iter().all(|v| *v == 0));
    assert_eq!(arr.into_iter().count(), 4);
}
