//! Contiguous collection types: the runtime-sized [`Array`], the inline [`FixedArray`] and the
//! growable [`Vector`].

pub mod array;
pub mod fixed;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use fixed::FixedArray;
#[doc(inline)]
pub use vector::Vector;
