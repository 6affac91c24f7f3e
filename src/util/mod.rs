#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(feature = "hash")]
pub mod fmt;
#[cfg(test)]
pub mod hash;
#[cfg(feature = "tree")]
pub mod option;
#[cfg(test)]
pub mod panic;
#[cfg(any(feature = "contiguous", feature = "linked"))]
pub mod result;
