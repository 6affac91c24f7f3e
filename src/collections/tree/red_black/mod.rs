//! A module containing [`RedBlackTree`], its iterators and the [`Color`] of its nodes.

mod error;
mod iter;
mod node;
mod tree;
mod tests;

pub use error::*;
pub use iter::*;
pub use node::*;
pub use tree::*;
