use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;
use crate::collections::traits::{Compare, Natural};

/// A priority queue implemented as a binary heap stored in a [`Vector`].
///
/// The element at the top is the greatest according to `C`: with the default [`Natural`] order it
/// is the maximum, with [`Reversed`](crate::collections::traits::Reversed) it is the minimum. For
/// the element at index `i`, its children are at `2i + 1` and `2i + 2` and its parent is at
/// `(i - 1) / 2`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PriorityQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `top` | `O(1)` |
/// | `push` | `O(log n)`* |
/// | `pop` | `O(log n)` |
/// | `from_iter` | `O(n)` |
///
/// \* Amortized, as the underlying Vector occasionally grows.
///
/// # Examples
/// ```
/// # use containers::collections::heap::PriorityQueue;
/// let mut pq = PriorityQueue::new();
/// pq.push(10);
/// pq.push(20);
/// pq.push(15);
/// assert_eq!(pq.top(), Some(&20));
/// pq.pop();
/// assert_eq!(pq.top(), Some(&15));
/// pq.pop();
/// assert_eq!(pq.top(), Some(&10));
/// ```
pub struct PriorityQueue<T, C: Compare<T> = Natural> {
    pub(crate) data: Vector<T>,
    pub(crate) compare: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates a new, empty max-heap.
    pub const fn new() -> PriorityQueue<T> {
        PriorityQueue {
            data: Vector::new(),
            compare: Natural,
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates a new, empty PriorityQueue ordered by `compare`.
    pub const fn with_compare(compare: C) -> PriorityQueue<T, C> {
        PriorityQueue {
            data: Vector::new(),
            compare,
        }
    }

    /// Builds a PriorityQueue from the elements of `data` in `O(n)`, by sifting down every parent
    /// from the middle of the Vector back to the root.
    pub fn from_vector(data: Vector<T>, compare: C) -> PriorityQueue<T, C> {
        let mut pq = PriorityQueue { data, compare };
        for index in (0..pq.len() / 2).rev() {
            pq.sift_down(index);
        }
        pq
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the greatest element according to the ordering, or [`None`] if the queue is empty.
    pub fn top(&self) -> Option<&T> {
        self.data.first()
    }

    /// Adds `value` to the queue.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.len() - 1);
    }

    /// Removes the greatest element and returns it, or [`None`] if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.data.swap(0, last);
        let top = self.data.pop();
        self.sift_down(0);
        top
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the elements in heap order, which isn't sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the queue, returning a Vector sorted in ascending order.
    pub fn into_sorted_vector(mut self) -> Vector<T> {
        let mut sorted = Vector::with_cap(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted.reverse();
        sorted
    }

    /// Consumes the queue, returning the underlying Vector in heap order.
    pub fn into_vector(self) -> Vector<T> {
        self.data
    }

    /// Moves the element at `index` up while it is greater than its parent.
    pub(crate) fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.compare.less(&self.data[parent], &self.data[index]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` down while either child is greater than it.
    pub(crate) fn sift_down(&mut self, mut index: usize) {
        let len = self.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.compare.less(&self.data[largest], &self.data[left]) {
                largest = left;
            }
            if right < len && self.compare.less(&self.data[largest], &self.data[right]) {
                largest = right;
            }
            if largest == index {
                break;
            }

            self.data.swap(index, largest);
            index = largest;
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_heap(&self) {
        for index in 1..self.len() {
            let parent = (index - 1) / 2;
            assert!(
                !self.compare.less(&self.data[parent], &self.data[index]),
                "parent at {parent} should not be less than its child at {index}"
            );
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_vector(iter.into_iter().collect(), Natural)
    }
}

impl<T: Clone, C: Compare<T> + Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        PriorityQueue {
            data: self.data.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T: Debug, C: Compare<T>> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.data)
            .field("len", &self.len())
            .finish()
    }
}
