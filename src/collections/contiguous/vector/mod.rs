//! A module containing [`Vector`], the growable array of this crate.
//!
//! Owned iteration reuses [`array::IntoIter`](super::array::IntoIter), borrowed iteration comes
//! from the slice that a Vector dereferences to.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod tests;
mod vector;

pub use vector::*;
