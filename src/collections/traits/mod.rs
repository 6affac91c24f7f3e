//! Traits shared between collection families: the [`Compare`] ordering policy used by the heap and
//! tree collections, and the [`Set`] algebra implemented by both set types.

mod compare;
mod set;

pub use compare::*;
pub use set::*;
