//! Ordered collections built on a [`RedBlackTree`]: the [`TreeSet`] and [`TreeMap`] wrappers.

pub mod red_black;
mod map;
mod set;

pub use map::*;
pub use set::*;

#[doc(inline)]
pub use red_black::RedBlackTree;
