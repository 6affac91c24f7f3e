use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{locate, Block, BlockDeque};

impl<T> IntoIterator for BlockDeque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            deque: self,
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) deque: BlockDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a BlockDeque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }
}

/// A borrowed iterator over a [`BlockDeque`], yielding logical indices `front..back`.
pub struct Iter<'a, T> {
    pub(crate) deque: &'a BlockDeque<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back <= len.
        let item = unsafe { self.deque.get_unchecked(self.front) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.back - self.front, Some(self.back - self.front))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: front <= back < len.
        Some(unsafe { self.deque.get_unchecked(self.back) })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> IntoIterator for &'a mut BlockDeque<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            blocks: &self.blocks,
            block_front: self.block_front,
            index_front: self.index_front,
            block_size: self.block_size,
            front: 0,
            back: self.len,
            _phantom: PhantomData,
        }
    }
}

/// A mutable iterator over a [`BlockDeque`].
///
/// Only the directory is borrowed as shared. Elements are reached through each block's pointer, so
/// yielded references never overlap a reference to the block they live in.
pub struct IterMut<'a, T> {
    pub(crate) blocks: &'a [Block<T>],
    pub(crate) block_front: usize,
    pub(crate) index_front: usize,
    pub(crate) block_size: usize,
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// # Safety
    /// `index` must be in `front..back` and must not have been yielded before.
    unsafe fn slot(&self, index: usize) -> &'a mut T {
        let (block, offset) = locate(self.block_front, self.index_front, self.block_size, index);
        // SAFETY: The deque is mutably borrowed for 'a and each live slot is yielded at most once.
        unsafe {
            let slot = self.blocks.get_unchecked(block).ptr.as_ptr().add(offset);
            (*slot).assume_init_mut()
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back <= len, and front only increases.
        let item = unsafe { self.slot(self.front) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.back - self.front, Some(self.back - self.front))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: front <= back < len, and back only decreases.
        Some(unsafe { self.slot(self.back) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
