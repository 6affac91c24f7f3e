use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use derive_more::IsVariant;

use crate::collections::contiguous::Vector;

/// The colour of a node in a [`RedBlackTree`](super::RedBlackTree). Missing children count as
/// Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Color {
    Red,
    Black,
}

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub color: Color,
    pub parent: Link<T>,
    pub left: Link<T>,
    pub right: Link<T>,
}

/// A non-owning handle to a heap-allocated [`Node`]. The tree owns every node through its root;
/// `parent` links are back-references only.
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// Allocates a new, Red, unlinked node holding `value`.
    pub fn new_red(value: T) -> NodePtr<T> {
        let node = Box::new(Node {
            value,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        });
        // SAFETY: Box::into_raw never returns null.
        NodePtr(unsafe { NonNull::new_unchecked(Box::into_raw(node)) })
    }

    /// Moves the node back off of the heap, freeing its allocation.
    ///
    /// # Safety
    /// The pointer must have come from [`NodePtr::new_red`] and no other copy of it may be used
    /// afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: Upheld by the caller.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// # Safety
    /// The node must still be allocated and not mutably aliased for `'a`.
    pub unsafe fn node<'a>(self) -> &'a Node<T> {
        // SAFETY: Upheld by the caller.
        unsafe { &*self.0.as_ptr() }
    }

    /// # Safety
    /// The node must still be allocated and not otherwise aliased for `'a`.
    pub unsafe fn node_mut<'a>(self) -> &'a mut Node<T> {
        // SAFETY: Upheld by the caller.
        unsafe { &mut *self.0.as_ptr() }
    }

    /// Returns the leftmost node of the subtree rooted at self.
    ///
    /// # Safety
    /// Every node reachable from self must be allocated.
    pub unsafe fn minimum(self) -> NodePtr<T> {
        let mut node = self;
        // SAFETY: Upheld by the caller.
        while let Some(left) = unsafe { node.node().left } {
            node = left;
        }
        node
    }

    /// Returns the rightmost node of the subtree rooted at self.
    ///
    /// # Safety
    /// Every node reachable from self must be allocated.
    pub unsafe fn maximum(self) -> NodePtr<T> {
        let mut node = self;
        // SAFETY: Upheld by the caller.
        while let Some(right) = unsafe { node.node().right } {
            node = right;
        }
        node
    }

    /// Returns the next node in order, walking up through parent links when there is no right
    /// subtree.
    ///
    /// # Safety
    /// Every node in the tree containing self must be allocated.
    pub unsafe fn successor(self) -> Link<T> {
        // SAFETY: Upheld by the caller.
        unsafe {
            if let Some(right) = self.node().right {
                return Some(right.minimum());
            }

            let mut child = self;
            let mut parent = self.node().parent;
            while let Some(node) = parent {
                if node.node().left == Some(child) {
                    break;
                }
                child = node;
                parent = node.node().parent;
            }
            parent
        }
    }

    /// Returns the previous node in order. Mirrors [`NodePtr::successor`].
    ///
    /// # Safety
    /// Every node in the tree containing self must be allocated.
    pub unsafe fn predecessor(self) -> Link<T> {
        // SAFETY: Upheld by the caller.
        unsafe {
            if let Some(left) = self.node().left {
                return Some(left.maximum());
            }

            let mut child = self;
            let mut parent = self.node().parent;
            while let Some(node) = parent {
                if node.node().right == Some(child) {
                    break;
                }
                child = node;
                parent = node.node().parent;
            }
            parent
        }
    }
}

/// Returns the colour of `link`, treating a missing node as Black.
///
/// # Safety
/// If present, the node must be allocated.
pub(crate) unsafe fn color_of<T>(link: Link<T>) -> Color {
    // SAFETY: Upheld by the caller.
    link.map_or(Color::Black, |node| unsafe { node.node().color })
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

/// Draws the subtree under a link sideways: left subtrees above their parent prefixed with `┌`,
/// right subtrees below prefixed with `└`.
pub(crate) struct DebugLink<T>(pub Link<T>);

impl<T: Debug> Debug for DebugLink<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ptr) => {
                // SAFETY: The link belongs to a tree that is borrowed for the duration of
                // formatting.
                let node = unsafe { ptr.node() };
                let colour = match node.color {
                    Color::Red => 'R',
                    Color::Black => 'B',
                };
                write!(
                    f,
                    "{}\n({colour} {:?})\n{}",
                    format!("{:?}", DebugLink(node.left))
                        .lines()
                        .map(|l| String::from("┌    ") + l)
                        .collect::<Vector<_>>()
                        .join("\n"),
                    node.value,
                    format!("{:?}", DebugLink(node.right))
                        .lines()
                        .map(|l| String::from("└    ") + l)
                        .collect::<Vector<_>>()
                        .join("\n")
                )
            },
            None => write!(f, "-"),
        }
    }
}
