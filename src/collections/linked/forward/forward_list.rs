use std::fmt::{self, Debug, Formatter};

use super::{Iter, IterMut};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A list with links in one direction. Each node owns the next, so the list is a single chain of
/// [`Box`]es starting at the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `insert_after` | `O(i)` |
/// | `erase_after` | `O(i)` |
/// | `remove_first` | `O(n)` |
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> ForwardList<T> {
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            head: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes the first element and returns it, or [`None`] if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    /// Inserts `value` directly after the element at `index`, so that it ends up at `index + 1`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::linked::ForwardList;
    /// let mut list: ForwardList<_> = [1, 2, 3, 6].into_iter().collect();
    /// list.insert_after(2, 4);
    /// list.insert_after(3, 5);
    /// assert!(list.iter().eq(&[1, 2, 3, 4, 5, 6]));
    /// ```
    pub fn insert_after(&mut self, index: usize, value: T) {
        self.try_insert_after(index, value).throw()
    }

    /// Inserts `value` directly after the element at `index`, returning an [`Err`] rather than
    /// panicking if there is no such element.
    pub fn try_insert_after(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        let node = self.node_at_mut(index).ok_or(IndexOutOfBounds { index, len })?;

        let next = node.next.take();
        node.next = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element following the one at `index`.
    ///
    /// # Panics
    /// Panics if `index + 1` is out of bounds.
    pub fn erase_after(&mut self, index: usize) -> T {
        self.try_erase_after(index).throw()
    }

    /// Removes and returns the element following the one at `index`, returning an [`Err`] rather
    /// than panicking if there is no such element.
    pub fn try_erase_after(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let err = IndexOutOfBounds {
            index: index.saturating_add(1),
            len: self.len,
        };
        let node = self.node_at_mut(index).ok_or(err)?;

        let mut erased = node.next.take().ok_or(err)?;
        node.next = erased.next.take();
        self.len -= 1;
        Ok(erased.value)
    }

    /// Removes the first element for which `pred` returns true, returning it.
    pub fn remove_first<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> Option<T> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| !pred(&node.value)) {
            link = &mut link.as_mut()?.next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        // Unlink iteratively, so that long chains don't drop recursively.
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut curr = self.head.as_deref_mut();
        for _ in 0..index {
            curr = curr?.next.as_deref_mut();
        }
        curr
    }
}

impl<T: PartialEq> ForwardList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    /// Collects the items in order, appending each one at the tail.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
