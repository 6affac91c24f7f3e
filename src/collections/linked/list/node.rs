use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// Nodes are allocated through Box so that taking a node back off the heap moves its value out.

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

/// A non-owning handle to a heap-allocated [`Node`]. Ownership of every node belongs to the list
/// as a whole, which frees them through [`NodePtr::take_node`].
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        // SAFETY: Box::into_raw never returns null.
        NodePtr(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    /// Moves the node back off of the heap, freeing its allocation.
    ///
    /// # Safety
    /// The pointer must have come from [`NodePtr::from_node`] and no other copy of it may be used
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
