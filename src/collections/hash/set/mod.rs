//! A module containing [`HashSet`] and its iterators.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error. Set operations come from the
//! [`Set`](crate::collections::traits::Set) trait.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
mod tests;

pub use hash_set::*;
pub use iter::*;
