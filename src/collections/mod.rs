//! Various general-purpose collection types.
//!
//! # Purpose
//! The two central containers are [`BlockDeque`](deque::BlockDeque) and
//! [`RedBlackTree`](tree::RedBlackTree). The remaining modules hold the building blocks they share
//! and a few simpler containers written alongside them.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.
//!
//! Each module is gated behind a Cargo feature of the same name, all of which are enabled by the
//! default `collections-all` feature.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "deque")]
pub mod deque;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
#[cfg(feature = "tree")]
pub mod tree;
