use derive_more::{Display, Error, IsVariant};

/// A broken red-black or search tree property, as reported by
/// [`RedBlackTree::validate`](super::RedBlackTree::validate).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum RedBlackViolation {
    #[display("The root of the tree is Red!")]
    RedRoot,
    #[display("A Red node has a Red child!")]
    RedRed,
    #[display("Paths from a node to its leaves have differing black counts!")]
    BlackHeight,
    #[display("Nodes are not in strictly ascending order!")]
    Unordered,
    #[display("A child's parent link doesn't point to its parent!")]
    BrokenParent,
    #[display("The tree holds {found} nodes but records a length of {len}!")]
    LenMismatch { found: usize, len: usize },
}
