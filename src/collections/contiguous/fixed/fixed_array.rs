use std::array;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// An array with a size fixed at compile time and stored inline, wrapping `[T; N]` with the same
/// checked and unchecked accessors as the other contiguous collections.
///
/// # Examples
/// ```
/// # use containers::collections::contiguous::FixedArray;
/// let mut arr: FixedArray<i32, 3> = FixedArray::default();
/// arr[1] = 9;
/// assert_eq!(&*arr, &[0, 9, 0]);
/// assert!(arr.at(3).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    pub const fn new(data: [T; N]) -> FixedArray<T, N> {
        FixedArray { data }
    }

    /// Returns `N`, the number of elements in the FixedArray.
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index >= N`.
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.data.get(index).ok_or(IndexOutOfBounds { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.data.get_mut(index).ok_or(IndexOutOfBounds { index, len: N })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index is in bounds.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index is in bounds.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        FixedArray {
            data: array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(value: [T; N]) -> Self {
        FixedArray::new(value)
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).throw()
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).throw()
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;

    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: Debug, const N: usize> Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
