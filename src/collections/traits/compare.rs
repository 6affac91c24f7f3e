use std::cmp::Ordering;

/// An ordering policy used by the ordered collections of this crate, expressed as a strict weak
/// ordering through `less` alone. Two values are treated as equal when neither is less than the
/// other.
///
/// Implemented by [`Natural`] and [`Reversed`] for [`Ord`] types, and by any
/// `Fn(&T, &T) -> bool` closure.
///
/// # Examples
/// ```
/// # use containers::collections::traits::{Compare, Natural, Reversed};
/// assert!(Natural.less(&1, &2));
/// assert!(Reversed.less(&2, &1));
/// assert!(Natural.equivalent(&3, &3));
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.equivalent(&"abc", &"xyz"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if neither value is ordered before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    /// Derives a total [`Ordering`] between `a` and `b` from at most two calls to `less`.
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The natural ascending order of an [`Ord`] type. A [`PriorityQueue`] using it is a max-heap.
///
/// [`PriorityQueue`]: crate::collections::heap::PriorityQueue
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The reverse of the natural order of an [`Ord`] type. A [`PriorityQueue`] using it is a
/// min-heap.
///
/// [`PriorityQueue`]: crate::collections::heap::PriorityQueue
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed;

impl<T: Ord + ?Sized> Compare<T> for Reversed {
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Compare<T> for F {
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
