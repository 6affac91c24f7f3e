use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{color_of, Color, DebugLink, Iter, Link, NodePtr, RedBlackViolation};
use crate::collections::traits::{Compare, Natural};
use crate::util::option::OptionExtension;

/// A self-balancing binary search tree of unique values, ordered by `C`.
///
/// Every node is Red or Black. The root is Black, a Red node never has a Red child and every path
/// from a node down to a missing child passes the same number of Black nodes. Together these keep
/// the longest path from the root within twice the shortest, so the tree's height stays
/// logarithmic in its length.
///
/// Nodes are allocated individually and never move. Rebalancing only relinks and recolours them,
/// so a value stays in the node it was inserted into until it is removed.
///
/// Two values are duplicates when neither is [`less`](Compare::less) than the other, in which case
/// only the first one inserted is kept.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RedBlackTree.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `contains` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `first`/`last` | `O(log n)` |
/// | `clear` | `O(n)` |
///
/// # Examples
/// ```
/// # use containers::collections::tree::RedBlackTree;
/// let mut tree = RedBlackTree::new();
/// tree.insert(5);
/// tree.insert(3);
/// tree.insert(7);
/// assert!(!tree.insert(5));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 7]);
/// assert_eq!(tree.remove(&5), Some(5));
/// assert!(tree.validate().is_ok());
/// ```
pub struct RedBlackTree<T, C: Compare<T> = Natural> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
    pub(crate) compare: C,
    pub(crate) _phantom: PhantomData<Box<T>>,
}

impl<T: Ord> RedBlackTree<T> {
    /// Creates a new, empty RedBlackTree in ascending order.
    pub const fn new() -> RedBlackTree<T> {
        RedBlackTree::with_compare(Natural)
    }
}

impl<T, C: Compare<T>> RedBlackTree<T, C> {
    /// Creates a new, empty RedBlackTree ordered by `compare`.
    pub const fn with_compare(compare: C) -> RedBlackTree<T, C> {
        RedBlackTree {
            root: None,
            len: 0,
            compare,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the ordering used by this tree.
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Adds `value` to the tree, returning true if it was added. If an equivalent value is already
    /// present, the tree is left unchanged, `value` is dropped and false is returned.
    pub fn insert(&mut self, value: T) -> bool {
        let mut parent = None;
        let mut ordering = Ordering::Equal;
        let mut current = self.root;

        while let Some(node) = current {
            // SAFETY: Every linked node is owned by the tree, which is mutably borrowed.
            let existing = unsafe { node.node() };
            ordering = self.compare.compare(&value, &existing.value);
            current = match ordering {
                Ordering::Less => existing.left,
                Ordering::Greater => existing.right,
                Ordering::Equal => return false,
            };
            parent = Some(node);
        }

        let node = NodePtr::new_red(value);
        // SAFETY: The new node is unaliased and parent, if present, is owned by the tree.
        unsafe {
            node.node_mut().parent = parent;
            match parent {
                None => self.root = Some(node),
                Some(parent) if ordering == Ordering::Less => parent.node_mut().left = Some(node),
                Some(parent) => parent.node_mut().right = Some(node),
            }
            self.fix_insert(node);
        }

        self.len += 1;
        true
    }

    /// Returns a reference to the stored value equivalent to `value`, if there is one.
    pub fn get(&self, value: &T) -> Option<&T> {
        let node = self.find(value)?;
        // SAFETY: The node is owned by the tree, which is borrowed for the returned lifetime.
        Some(unsafe { &node.node().value })
    }

    /// Returns true if the tree holds a value equivalent to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes and returns the stored value equivalent to `value`, if there is one.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let node = self.find(value)?;
        // SAFETY: The node was just found in this tree.
        Some(unsafe { self.remove_node(node) })
    }

    /// Returns the smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: The root and its descendants are owned by the tree, which is borrowed.
        self.root.map(|root| unsafe { &root.minimum().node().value })
    }

    /// Returns the largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        // SAFETY: The root and its descendants are owned by the tree, which is borrowed.
        self.root.map(|root| unsafe { &root.maximum().node().value })
    }

    /// Removes and returns the smallest value in the tree.
    pub fn pop_first(&mut self) -> Option<T> {
        // SAFETY: The minimum is a node of this tree.
        self.root.map(|root| unsafe { self.remove_node(root.minimum()) })
    }

    /// Removes and returns the largest value in the tree.
    pub fn pop_last(&mut self) -> Option<T> {
        // SAFETY: The maximum is a node of this tree.
        self.root.map(|root| unsafe { self.remove_node(root.maximum()) })
    }

    /// Frees every node in post-order, leaving the tree empty.
    pub fn clear(&mut self) {
        self.len = 0;
        let mut current = self.root.take();

        while let Some(node) = current {
            // SAFETY: Each node is unlinked from its parent before it is freed, so it is reached
            // and freed exactly once, after both of its children.
            unsafe {
                let inner = node.node_mut();
                current = if let Some(left) = inner.left.take() {
                    Some(left)
                } else if let Some(right) = inner.right.take() {
                    Some(right)
                } else {
                    let parent = inner.parent;
                    drop(node.take_node());
                    parent
                };
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Checks every red-black and search tree property, returning the first violation found.
    ///
    /// All public methods maintain these properties, so this only fails if a comparator isn't a
    /// strict weak ordering.
    pub fn validate(&self) -> Result<(), RedBlackViolation> {
        // SAFETY: Every linked node is owned by the tree, which is borrowed.
        unsafe {
            if color_of(self.root).is_red() {
                return Err(RedBlackViolation::RedRoot);
            }
            self.validate_subtree(self.root, None)?;
        }

        // Walk the nodes themselves rather than trusting len.
        let mut found = 0;
        let mut previous: Option<&T> = None;
        // SAFETY: As above.
        let mut current = self.root.map(|root| unsafe { root.minimum() });
        while let Some(node) = current {
            // SAFETY: As above.
            let value = unsafe { &node.node().value };
            if previous.is_some_and(|previous| !self.compare.less(previous, value)) {
                return Err(RedBlackViolation::Unordered);
            }
            previous = Some(value);
            found += 1;
            // SAFETY: As above.
            current = unsafe { node.successor() };
        }

        if found != self.len {
            return Err(RedBlackViolation::LenMismatch {
                found,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T, C: Compare<T>> RedBlackTree<T, C> {
    /// Descends from the root with `probe`, which orders a search target relative to a node's
    /// value, until an equal node or a missing child is reached.
    pub(crate) fn find_by<F: FnMut(&T) -> Ordering>(&self, mut probe: F) -> Link<T> {
        let mut current = self.root;
        while let Some(node) = current {
            // SAFETY: Every linked node is owned by the tree, which is borrowed.
            let inner = unsafe { node.node() };
            current = match probe(&inner.value) {
                Ordering::Less => inner.left,
                Ordering::Greater => inner.right,
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    pub(crate) fn find(&self, value: &T) -> Link<T> {
        self.find_by(|existing| self.compare.compare(value, existing))
    }

    /// Restores the red-black properties after `node` has been linked in as a Red leaf.
    ///
    /// # Safety
    /// `node` must be a node of this tree.
    pub(crate) unsafe fn fix_insert(&mut self, mut node: NodePtr<T>) {
        // SAFETY: Every node reached is linked into the tree. A Red parent is never the root, so
        // the grandparent exists.
        unsafe {
            while let Some(mut parent) = node.node().parent {
                if parent.node().color.is_black() {
                    break;
                }
                let grandparent = parent.node().parent.unreachable();

                if grandparent.node().left == Some(parent) {
                    let uncle = grandparent.node().right;
                    if color_of(uncle).is_red() {
                        parent.node_mut().color = Color::Black;
                        uncle.unreachable().node_mut().color = Color::Black;
                        grandparent.node_mut().color = Color::Red;
                        node = grandparent;
                        continue;
                    }

                    if parent.node().right == Some(node) {
                        // Triangle: rotate it into a line, node now sits above the old parent.
                        self.rotate_left(parent);
                        parent = node;
                    }
                    self.rotate_right(grandparent);
                    parent.node_mut().color = Color::Black;
                    grandparent.node_mut().color = Color::Red;
                    break;
                } else {
                    let uncle = grandparent.node().left;
                    if color_of(uncle).is_red() {
                        parent.node_mut().color = Color::Black;
                        uncle.unreachable().node_mut().color = Color::Black;
                        grandparent.node_mut().color = Color::Red;
                        node = grandparent;
                        continue;
                    }

                    if parent.node().left == Some(node) {
                        self.rotate_right(parent);
                        parent = node;
                    }
                    self.rotate_left(grandparent);
                    parent.node_mut().color = Color::Black;
                    grandparent.node_mut().color = Color::Red;
                    break;
                }
            }

            if let Some(root) = self.root {
                root.node_mut().color = Color::Black;
            }
        }
    }

    /// Unlinks `node` from the tree, rebalances and returns its value. A node with two children
    /// is replaced by its in-order successor node, values are never moved between nodes.
    ///
    /// # Safety
    /// `node` must be a node of this tree.
    pub(crate) unsafe fn remove_node(&mut self, node: NodePtr<T>) -> T {
        // SAFETY: Every node reached is linked into the tree.
        unsafe {
            let mut removed_color = node.node().color;
            let replacement: Link<T>;
            let replacement_parent: Link<T>;

            match (node.node().left, node.node().right) {
                (None, right) => {
                    replacement = right;
                    replacement_parent = node.node().parent;
                    self.transplant(node, right);
                },
                (left @ Some(_), None) => {
                    replacement = left;
                    replacement_parent = node.node().parent;
                    self.transplant(node, left);
                },
                (Some(left), Some(right)) => {
                    let successor = right.minimum();
                    removed_color = successor.node().color;
                    replacement = successor.node().right;

                    if successor == right {
                        replacement_parent = Some(successor);
                    } else {
                        replacement_parent = successor.node().parent;
                        self.transplant(successor, successor.node().right);
                        successor.node_mut().right = Some(right);
                        right.node_mut().parent = Some(successor);
                    }

                    self.transplant(node, Some(successor));
                    successor.node_mut().left = Some(left);
                    left.node_mut().parent = Some(successor);
                    successor.node_mut().color = node.node().color;
                },
            }

            self.len -= 1;
            if removed_color.is_black() {
                self.fix_remove(replacement, replacement_parent);
            }

            node.take_node().value
        }
    }

    /// Restores the red-black properties after a Black node has been spliced out, leaving `node`
    /// (possibly missing) one Black short. `parent` tracks the parent of `node` so that a missing
    /// node can still be located.
    ///
    /// # Safety
    /// `node` and `parent` must be nodes of this tree.
    pub(crate) unsafe fn fix_remove(&mut self, mut node: Link<T>, mut parent: Link<T>) {
        // SAFETY: Every node reached is linked into the tree. A node one Black short that isn't
        // the root has a parent and a sibling with a black height of at least one.
        unsafe {
            while node != self.root && color_of(node).is_black() {
                let current_parent = parent.unreachable();

                if current_parent.node().left == node {
                    let mut sibling = current_parent.node().right.unreachable();

                    if sibling.node().color.is_red() {
                        sibling.node_mut().color = Color::Black;
                        current_parent.node_mut().color = Color::Red;
                        self.rotate_left(current_parent);
                        sibling = current_parent.node().right.unreachable();
                    }

                    if color_of(sibling.node().left).is_black()
                        && color_of(sibling.node().right).is_black()
                    {
                        sibling.node_mut().color = Color::Red;
                        node = Some(current_parent);
                        parent = current_parent.node().parent;
                        continue;
                    }

                    if color_of(sibling.node().right).is_black() {
                        sibling.node().left.unreachable().node_mut().color = Color::Black;
                        sibling.node_mut().color = Color::Red;
                        self.rotate_right(sibling);
                        sibling = current_parent.node().right.unreachable();
                    }

                    sibling.node_mut().color = current_parent.node().color;
                    current_parent.node_mut().color = Color::Black;
                    sibling.node().right.unreachable().node_mut().color = Color::Black;
                    self.rotate_left(current_parent);
                } else {
                    let mut sibling = current_parent.node().left.unreachable();

                    if sibling.node().color.is_red() {
                        sibling.node_mut().color = Color::Black;
                        current_parent.node_mut().color = Color::Red;
                        self.rotate_right(current_parent);
                        sibling = current_parent.node().left.unreachable();
                    }

                    if color_of(sibling.node().left).is_black()
                        && color_of(sibling.node().right).is_black()
                    {
                        sibling.node_mut().color = Color::Red;
                        node = Some(current_parent);
                        parent = current_parent.node().parent;
                        continue;
                    }

                    if color_of(sibling.node().left).is_black() {
                        sibling.node().right.unreachable().node_mut().color = Color::Black;
                        sibling.node_mut().color = Color::Red;
                        self.rotate_left(sibling);
                        sibling = current_parent.node().left.unreachable();
                    }

                    sibling.node_mut().color = current_parent.node().color;
                    current_parent.node_mut().color = Color::Black;
                    sibling.node().left.unreachable().node_mut().color = Color::Black;
                    self.rotate_right(current_parent);
                }

                node = self.root;
                break;
            }

            if let Some(node) = node {
                node.node_mut().color = Color::Black;
            }
        }
    }

    /// Rotates the subtree rooted at `node` to the left, so that its right child takes its place
    /// and `node` becomes that child's left child.
    ///
    /// # Safety
    /// `node` must be a node of this tree with a right child.
    pub(crate) unsafe fn rotate_left(&mut self, node: NodePtr<T>) {
        // SAFETY: Upheld by the caller.
        unsafe {
            let pivot = node.node().right.unreachable();
            let inner = pivot.node().left;

            node.node_mut().right = inner;
            if let Some(inner) = inner {
                inner.node_mut().parent = Some(node);
            }

            let parent = node.node().parent;
            pivot.node_mut().parent = parent;
            self.replace_child(parent, node, Some(pivot));

            pivot.node_mut().left = Some(node);
            node.node_mut().parent = Some(pivot);
        }
    }

    /// Rotates the subtree rooted at `node` to the right. Mirrors [`rotate_left`](Self::rotate_left).
    ///
    /// # Safety
    /// `node` must be a node of this tree with a left child.
    pub(crate) unsafe fn rotate_right(&mut self, node: NodePtr<T>) {
        // SAFETY: Upheld by the caller.
        unsafe {
            let pivot = node.node().left.unreachable();
            let inner = pivot.node().right;

            node.node_mut().left = inner;
            if let Some(inner) = inner {
                inner.node_mut().parent = Some(node);
            }

            let parent = node.node().parent;
            pivot.node_mut().parent = parent;
            self.replace_child(parent, node, Some(pivot));

            pivot.node_mut().right = Some(node);
            node.node_mut().parent = Some(pivot);
        }
    }

    /// Puts `replacement` in the place of `node` under `node`'s parent.
    ///
    /// # Safety
    /// `node` and `replacement` must be nodes of this tree.
    pub(crate) unsafe fn transplant(&mut self, node: NodePtr<T>, replacement: Link<T>) {
        // SAFETY: Upheld by the caller.
        unsafe {
            let parent = node.node().parent;
            self.replace_child(parent, node, replacement);
            if let Some(replacement) = replacement {
                replacement.node_mut().parent = parent;
            }
        }
    }

    /// Points whichever link referred to `old` (the root, or a child link of `parent`) at `new`.
    ///
    /// # Safety
    /// `parent`, if present, must be the parent of `old` in this tree.
    pub(crate) unsafe fn replace_child(
        &mut self,
        parent: Link<T>,
        old: NodePtr<T>,
        new: Link<T>,
    ) {
        match parent {
            None => self.root = new,
            // SAFETY: Upheld by the caller.
            Some(parent) => unsafe {
                let parent = parent.node_mut();
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            },
        }
    }

    /// Checks colours, black heights and parent links below `link`, returning the black height.
    ///
    /// # Safety
    /// Every node reachable from `link` must be allocated.
    unsafe fn validate_subtree(
        &self,
        link: Link<T>,
        parent: Link<T>,
    ) -> Result<usize, RedBlackViolation> {
        let Some(node) = link else {
            return Ok(1);
        };

        // SAFETY: Upheld by the caller.
        unsafe {
            let inner = node.node();
            if inner.parent != parent {
                return Err(RedBlackViolation::BrokenParent);
            }
            if inner.color.is_red()
                && (color_of(inner.left).is_red() || color_of(inner.right).is_red())
            {
                return Err(RedBlackViolation::RedRed);
            }

            let left = self.validate_subtree(inner.left, link)?;
            let right = self.validate_subtree(inner.right, link)?;
            if left != right {
                return Err(RedBlackViolation::BlackHeight);
            }

            Ok(left + usize::from(inner.color.is_black()))
        }
    }
}

impl<T, C: Compare<T>> Drop for RedBlackTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C: Compare<T> + Default> Default for RedBlackTree<T, C> {
    fn default() -> Self {
        RedBlackTree::with_compare(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for RedBlackTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for RedBlackTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RedBlackTree::default();
        tree.extend(iter);
        tree
    }
}

impl<T: Clone, C: Compare<T> + Clone> Clone for RedBlackTree<T, C> {
    fn clone(&self) -> Self {
        let mut tree = RedBlackTree::with_compare(self.compare.clone());
        tree.extend(self.iter().cloned());
        tree
    }
}

impl<T: PartialEq, C: Compare<T>> PartialEq for RedBlackTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C: Compare<T>> Eq for RedBlackTree<T, C> {}

// SAFETY: The tree uniquely owns its nodes, so it can be sent whenever T and C can.
unsafe impl<T: Send, C: Compare<T> + Send> Send for RedBlackTree<T, C> {}
// SAFETY: The tree's safe API follows the borrow rules with no interior mutability.
unsafe impl<T: Sync, C: Compare<T> + Sync> Sync for RedBlackTree<T, C> {}

impl<T: Debug, C: Compare<T>> Debug for RedBlackTree<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:?}", DebugLink(self.root))
        } else {
            f.debug_set().entries(self.iter()).finish()
        }
    }
}
