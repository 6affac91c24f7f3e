use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut};
use crate::collections::contiguous::Array;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// The number of slots in each block of a deque created with [`BlockDeque::new`].
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// The number of blocks in the directory of a newly created deque.
pub const INITIAL_BLOCKS: usize = 5;

const GROWTH_FACTOR: usize = 2;

pub(crate) type Block<T> = Array<MaybeUninit<T>>;

/// A double-ended queue which stores its elements in fixed-size blocks, referenced through a
/// directory of blocks.
///
/// Elements live in the slots from `(block_front, index_front)` to `(block_back, index_back)`
/// inclusive. Pushing at either end fills the current end block before moving into the adjacent
/// one. Once an end runs out of blocks, the directory doubles in size and the live blocks are moved
/// (as handles, the elements themselves stay put) to its centre, leaving equal room at both ends.
///
/// Elements never move once pushed, and random access is a division away.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BlockDeque.
/// - `b`: The number of blocks in the directory.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push_front` | `O(1)`*, `O(b)` |
/// | `push_back` | `O(1)`*, `O(b)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `at` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* When an end has no block left the directory grows, taking `O(b)` time.
pub struct BlockDeque<T> {
    pub(crate) blocks: Array<Block<T>>,
    pub(crate) block_size: usize,
    pub(crate) block_front: usize,
    pub(crate) index_front: usize,
    pub(crate) block_back: usize,
    pub(crate) index_back: usize,
    pub(crate) len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    Front,
    Back,
}

impl<T> BlockDeque<T> {
    /// Creates a new BlockDeque with [`INITIAL_BLOCKS`] blocks of [`DEFAULT_BLOCK_SIZE`] slots.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::deque::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// deque.push_back(2);
    /// deque.push_front(1);
    /// assert_eq!(deque.front(), Some(&1));
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn new() -> BlockDeque<T> {
        BlockDeque::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Creates a new BlockDeque with [`INITIAL_BLOCKS`] blocks of `block_size` slots each.
    ///
    /// # Panics
    /// Panics if `block_size` is zero.
    pub fn with_block_size(block_size: usize) -> BlockDeque<T> {
        assert!(block_size > 0, "BlockDeque block size must be non-zero!");

        let mut deque = BlockDeque {
            blocks: Array::from_fn(INITIAL_BLOCKS, |_| Array::new_uninit(block_size)),
            block_size,
            block_front: 0,
            index_front: 0,
            block_back: 0,
            index_back: 0,
            len: 0,
        };
        deque.recentre();
        deque
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in each block.
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the number of blocks in the directory, live or not.
    pub const fn num_blocks(&self) -> usize {
        self.blocks.size()
    }

    /// Returns the number of blocks holding at least one element.
    pub const fn blocks_used(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.block_back - self.block_front + 1
        }
    }

    /// Appends `value` to the back of the BlockDeque.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::deque::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// for i in 0..=20 {
    ///     deque.push_back(i);
    /// }
    /// assert_eq!(deque.len(), 21);
    /// assert_eq!(deque[20], 20);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == 0 {
            self.recentre();
        } else if self.index_back + 1 < self.block_size {
            self.index_back += 1;
        } else {
            if self.block_back + 1 == self.num_blocks() {
                self.grow(End::Back);
            }
            self.block_back += 1;
            self.index_back = 0;
        }

        self.blocks[self.block_back][self.index_back].write(value);
        self.len += 1;
    }

    /// Prepends `value` to the front of the BlockDeque.
    pub fn push_front(&mut self, value: T) {
        if self.len == 0 {
            self.recentre();
        } else if self.index_front > 0 {
            self.index_front -= 1;
        } else {
            if self.block_front == 0 {
                self.grow(End::Front);
            }
            self.block_front -= 1;
            self.index_front = self.block_size - 1;
        }

        self.blocks[self.block_front][self.index_front].write(value);
        self.len += 1;
    }

    /// Removes the last element and returns it, or None if the BlockDeque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let (block, index) = (self.block_back, self.index_back);
        self.len -= 1;

        if self.len > 0 {
            if self.index_back > 0 {
                self.index_back -= 1;
            } else {
                self.block_back -= 1;
                self.index_back = self.block_size - 1;
            }
        }

        // SAFETY: The slot was the live back of the deque and is now outside of the live range, so
        // it won't be read again.
        Some(unsafe { self.blocks[block][index].assume_init_read() })
    }

    /// Removes the first element and returns it, or None if the BlockDeque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let (block, index) = (self.block_front, self.index_front);
        self.len -= 1;

        if self.len > 0 {
            if self.index_front + 1 < self.block_size {
                self.index_front += 1;
            } else {
                self.block_front += 1;
                self.index_front = 0;
            }
        }

        // SAFETY: The slot was the live front of the deque and is now outside of the live range,
        // so it won't be read again.
        Some(unsafe { self.blocks[block][index].assume_init_read() })
    }

    pub fn front(&self) -> Option<&T> {
        self.at(0).ok()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.at_mut(0).ok()
    }

    pub fn back(&self) -> Option<&T> {
        self.at(self.len.checked_sub(1)?).ok()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.at_mut(self.len.checked_sub(1)?).ok()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error if `index`
    /// isn't less than the length.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::deque::BlockDeque;
    /// let deque: BlockDeque<_> = (0..=10).collect();
    /// assert_eq!(deque.at(10), Ok(&10));
    /// assert!(deque.at(11).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: The index has just been checked.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error if
    /// `index` isn't less than the length.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: The index has just been checked.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at `index` without checking that it is in bounds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Self::len), otherwise this is undefined behavior.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        let (block, offset) = self.locate(index);
        // SAFETY: Every logical index below len maps to an initialized slot of a live block.
        unsafe {
            self.blocks.get_unchecked(block).get_unchecked(offset).assume_init_ref()
        }
    }

    /// Returns a mutable reference to the element at `index` without checking that it is in
    /// bounds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Self::len), otherwise this is undefined behavior.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        let (block, offset) = self.locate(index);
        // SAFETY: Every logical index below len maps to an initialized slot of a live block.
        unsafe {
            self.blocks.get_unchecked_mut(block).get_unchecked_mut(offset).assume_init_mut()
        }
    }

    /// Drops every element, keeping the directory and its blocks for reuse.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        for index in 0..len {
            let (block, offset) = locate(self.block_front, self.index_front, self.block_size, index);
            // SAFETY: The slot was live and len has already been zeroed, so a panicking drop
            // leaks the remaining elements rather than dropping any twice.
            unsafe { self.blocks[block][offset].assume_init_drop() };
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> BlockDeque<T> {
    /// Maps a logical `index` to its `(block, offset)` position in the directory.
    pub(crate) const fn locate(&self, index: usize) -> (usize, usize) {
        locate(self.block_front, self.index_front, self.block_size, index)
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Places both ends of an empty deque on the middle slot of the middle block.
    pub(crate) const fn recentre(&mut self) {
        self.block_front = self.blocks.size() / 2;
        self.block_back = self.block_front;
        self.index_front = self.block_size / 2;
        self.index_back = self.index_front;
    }

    /// Doubles the directory, moving the live blocks to its centre with one extra block opened at
    /// `end`. Blocks outside the live range are freshly allocated.
    ///
    /// Afterwards, the block adjacent to the live range at `end` is free, so the caller only needs
    /// to step into it.
    pub(crate) fn grow(&mut self, end: End) {
        let used = self.blocks_used();
        let old_count = self.num_blocks();
        let new_count = old_count * GROWTH_FACTOR;

        // The live blocks plus the one about to be opened are centred.
        let new_front = (new_count - (used + 1)) / 2;
        let live_start = match end {
            End::Front => new_front + 1,
            End::Back => new_front,
        };

        let old_front = self.block_front;
        let block_size = self.block_size;

        // Every allocation happens before a live block is moved, so a failed allocation leaves
        // the directory untouched.
        let mut fresh = Array::from_fn(new_count - used, |_| Array::<T>::new_uninit(block_size))
            .into_iter();
        let mut directory = Array::<Block<T>>::new_uninit(new_count);

        for (i, slot) in directory.iter_mut().enumerate() {
            slot.write(if (live_start..live_start + used).contains(&i) {
                mem::take(&mut self.blocks[old_front + i - live_start])
            } else {
                fresh.next().unwrap_or_else(|| Array::new_uninit(block_size))
            });
        }

        // SAFETY: Every slot of the directory has just been written.
        self.blocks = unsafe { directory.assume_init() };
        self.block_front = live_start;
        self.block_back = live_start + used - 1;

        log::debug!(
            "BlockDeque directory grew from {} to {} blocks, {} live blocks now start at {}",
            old_count,
            new_count,
            used,
            live_start
        );
    }
}

/// The single mapping from a logical index to a `(block, offset)` pair: the index is counted from
/// `(block_front, index_front)` and carried across blocks of `block_size` slots.
pub(crate) const fn locate(
    block_front: usize,
    index_front: usize,
    block_size: usize,
    index: usize,
) -> (usize, usize) {
    let position = index_front + index;
    (block_front + position / block_size, position % block_size)
}

impl<T> Drop for BlockDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for BlockDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for BlockDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).throw()
    }
}

impl<T> IndexMut<usize> for BlockDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index).throw()
    }
}

impl<T> Extend<T> for BlockDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for BlockDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = BlockDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<T: Clone> Clone for BlockDeque<T> {
    fn clone(&self) -> Self {
        let mut deque = BlockDeque::with_block_size(self.block_size);
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T: PartialEq> PartialEq for BlockDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BlockDeque<T> {}

impl<T: Hash> Hash for BlockDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for BlockDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
