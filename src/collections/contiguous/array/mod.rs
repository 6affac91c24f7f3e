//! A module containing [`Array`] and its owned iterator, [`IntoIter`]. Borrowed iteration comes from
//! the slice that an Array dereferences to.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod iter;

pub use array::*;
pub use iter::*;
