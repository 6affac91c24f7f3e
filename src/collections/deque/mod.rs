//! A module containing [`BlockDeque`], its iterators and the [`Queue`] and [`Stack`] adapters
//! built on top of it.
//!
//! [`BlockDeque`] is also re-exported under the parent module.

mod adapters;
mod block_deque;
mod iter;
mod tests;

pub use adapters::*;
pub use block_deque::*;
pub use iter::*;
