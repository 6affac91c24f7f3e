use std::fmt::{self, Debug, Formatter};

use super::{BlockDeque, Iter};

/// A first-in, first-out queue backed by a [`BlockDeque`]. Items are pushed to the back and popped
/// from the front.
///
/// # Examples
/// ```
/// # use containers::collections::deque::Queue;
/// let mut queue = Queue::new();
/// queue.push('a');
/// queue.push('b');
/// assert_eq!(queue.pop(), Some('a'));
/// assert_eq!(queue.front(), Some(&'b'));
/// ```
pub struct Queue<T> {
    pub(crate) inner: BlockDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            inner: BlockDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.inner.push_back(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns the item that will be popped next.
    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Returns the most recently pushed item.
    pub fn back(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    pub fn into_inner(self) -> BlockDeque<T> {
        self.inner
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BlockDeque<T>> for Queue<T> {
    fn from(inner: BlockDeque<T>) -> Self {
        Queue { inner }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            inner: BlockDeque::from_iter(iter),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.inner).finish()
    }
}

/// A last-in, first-out stack backed by a [`BlockDeque`]. Items are pushed to and popped from the
/// back.
pub struct Stack<T> {
    pub(crate) inner: BlockDeque<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            inner: BlockDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.inner.push_back(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// Returns the most recently pushed item.
    pub fn top(&self) -> Option<&T> {
        self.inner.back()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.inner.back_mut()
    }

    pub fn into_inner(self) -> BlockDeque<T> {
        self.inner
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BlockDeque<T>> for Stack<T> {
    fn from(inner: BlockDeque<T>) -> Self {
        Stack { inner }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            inner: BlockDeque::from_iter(iter),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.inner).finish()
    }
}
