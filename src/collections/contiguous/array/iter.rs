use std::iter::FusedIterator;
use std::mem::MaybeUninit;

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let end = self.size;
        IntoIter {
            buf: self.forget_init(),
            start: 0,
            end,
        }
    }
}

/// An owned iterator over the elements of an [`Array`]. Elements which haven't been yielded are
/// dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: Slots in start..end are initialized and are read at most once, because start is
        // incremented immediately after.
        let value = unsafe { self.buf[self.start].assume_init_read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: The slot at the newly decremented end is initialized and no longer considered
        // part of the iterator.
        Some(unsafe { self.buf[self.end].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.start..self.end] {
            // SAFETY: Slots in start..end haven't been yielded and are still initialized.
            unsafe { slot.assume_init_drop() }
        }
        // The buffer itself only holds MaybeUninit values, so dropping it just deallocates.
    }
}
