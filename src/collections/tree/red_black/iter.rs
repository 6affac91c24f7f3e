use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, RedBlackTree};
use crate::collections::traits::Compare;
use crate::util::option::OptionExtension;

impl<T, C: Compare<T>> IntoIterator for RedBlackTree<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            tree: self,
        }
    }
}

/// An owned iterator over a [`RedBlackTree`], in order.
pub struct IntoIter<T, C: Compare<T>> {
    pub(crate) tree: RedBlackTree<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T, C: Compare<T>> DoubleEndedIterator for IntoIter<T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_last()
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIter<T, C> {}

impl<'a, T, C: Compare<T>> IntoIterator for &'a RedBlackTree<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            // SAFETY: The root and its descendants are owned by the tree, which is borrowed.
            front: self.root.map(|root| unsafe { root.minimum() }),
            back: self.root.map(|root| unsafe { root.maximum() }),
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

/// A borrowed, in-order iterator over a [`RedBlackTree`]. Each step follows child and parent
/// links to the next node, without any auxiliary stack.
pub struct Iter<'a, T> {
    pub(crate) front: Link<T>,
    pub(crate) back: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: While len is non-zero, front is a node of the borrowed tree.
        unsafe {
            let node = self.front.unreachable();
            self.front = node.successor();
            self.len -= 1;
            Some(&node.node().value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: While len is non-zero, back is a node of the borrowed tree.
        unsafe {
            let node = self.back.unreachable();
            self.back = node.predecessor();
            self.len -= 1;
            Some(&node.node().value)
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// SAFETY: Iter only hands out shared references, exactly like &'a T.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: As above.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}
