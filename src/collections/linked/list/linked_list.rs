use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{Iter, IterMut, Link, Node, NodePtr};

/// A list with links in both directions, supporting `O(1)` insertion and removal at either end.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: head is a live node owned by self, borrowed immutably with self.
        self.head.map(|node| unsafe { &node.node().value })
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: head is a live node owned by self, borrowed mutably with self.
        self.head.map(|node| unsafe { &mut node.node_mut().value })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail is a live node owned by self, borrowed immutably with self.
        self.tail.map(|node| unsafe { &node.node().value })
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: tail is a live node owned by self, borrowed mutably with self.
        self.tail.map(|node| unsafe { &mut node.node_mut().value })
    }

    /// Adds the provided element to the front of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_front(-1);
    /// assert_eq!(list.front(), Some(&-1));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            // SAFETY: The old head is a live node owned by self.
            Some(old_head) => unsafe { old_head.node_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            // SAFETY: The old tail is a live node owned by self.
            Some(old_tail) => unsafe { old_tail.node_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: head is owned by self and is unlinked below, so no other pointer to it is used.
        let node = unsafe { head.take_node() };

        self.head = node.next;
        match node.next {
            // SAFETY: The new head is a live node owned by self.
            Some(new_head) => unsafe { new_head.node_mut().prev = None },
            None => self.tail = None,
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: tail is owned by self and is unlinked below, so no other pointer to it is used.
        let node = unsafe { tail.take_node() };

        self.tail = node.prev;
        match node.prev {
            // SAFETY: The new tail is a live node owned by self.
            Some(new_tail) => unsafe { new_tail.node_mut().next = None },
            None => self.head = None,
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut prev: Link<T> = None;
        let mut curr = self.head;
        let mut count = 0;
        while let Some(node) = curr {
            // SAFETY: Every node reachable from head is live.
            let node_ref = unsafe { node.node() };
            assert!(node_ref.prev == prev, "prev link should point at the preceding node");
            prev = Some(node);
            curr = node_ref.next;
            count += 1;
        }
        assert!(self.tail == prev, "tail should be the last reachable node");
        assert_eq!(count, self.len, "len should match the number of reachable nodes");
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self {
            item.hash(state);
        }
    }
}

// SAFETY: LinkedList uniquely owns its nodes, so it can be sent whenever T can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access to a LinkedList only hands out shared references to its elements.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
