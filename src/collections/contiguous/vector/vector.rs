use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

/// A growable contiguous collection, backed by an [`Array`] of possibly uninitialized slots.
///
/// Capacity grows 0 → 1 → 2 → 4 → ... as elements are pushed. Each growth allocates a new buffer,
/// moves the existing elements into it and releases the old one.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `get_unchecked` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `with_cap` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct Vector<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Nothing is allocated until the first push.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Array::new_uninit(cap),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Pushes `value` onto the end of the Vector, doubling the capacity first if it is full.
    ///
    /// # Panics
    /// Panics if the new capacity would have a layout larger than [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push(10);
    /// assert_eq!(vec.cap(), 1);
    /// vec.push(2);
    /// assert_eq!(vec.cap(), 2);
    /// vec.push(7);
    /// assert_eq!(vec.cap(), 4);
    /// assert_eq!(&*vec, &[10, 2, 7]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Removes the last element and returns it, or [`None`] if the Vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: The slot at the old last index is initialized and is now outside of len, so it
        // won't be read or dropped again.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has just been checked.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has just been checked.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees index < len, and every slot below len is initialized.
        unsafe { self.buf.get_unchecked(index).assume_init_ref() }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees index < len, and every slot below len is initialized.
        unsafe { self.buf.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: The first len slots were initialized, and len is zeroed before dropping so that
        // a panicking destructor can't cause a double drop.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.as_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Moves the elements into a freshly allocated buffer of double the capacity (or 1 for an
    /// empty Vector). The old buffer holds only [`MaybeUninit`] values, so dropping it releases
    /// the memory without touching the moved elements.
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap() {
            0 => 1,
            cap => cap.checked_mul(GROWTH_FACTOR).unwrap_or(usize::MAX),
        };
        log::trace!("Vector growing from {} to {} slots", self.cap(), new_cap);

        let new_buf = Array::new_uninit(new_cap);
        // SAFETY: Both buffers are valid for len elements, properly aligned and distinct
        // allocations.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr.as_ptr(), new_buf.ptr.as_ptr(), self.len);
        }
        self.buf = new_buf;
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        // The buffer is dropped implicitly, deallocating without dropping any slots.
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized, and MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots are initialized, and MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).throw()
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).throw()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.cap());
        vec.extend(self.iter().cloned());
        vec
    }
}

// SAFETY: Vector uniquely owns its buffer, so it can be sent whenever T can.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API follows the borrow rules with no interior mutability.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
