//! This crate is a collection of container types written from scratch: a block-based double-ended
//! queue and a red-black tree at its core, with the contiguous, linked, heap and hash-based
//! containers they are built alongside.
//!
//! # Purpose
//! Each container is written as a learning exercise in how these data structures work, with no
//! expectation for it to replace [`std::collections`]. Writing them is a way to understand
//! pointers, allocation, iterators and balancing properly.
//!
//! # Method
//! The containers own their storage directly. Contiguous types are built on
//! [`Array`](collections::contiguous::Array), a raw heap buffer. Linked lists and trees allocate
//! their nodes individually and address them through [`NonNull`](std::ptr::NonNull) handles, with
//! back-links (`prev`, `parent`) that never imply ownership. The
//! [`BlockDeque`](collections::deque::BlockDeque) keeps fixed-size blocks behind a directory which
//! doubles and recentres as either end fills up, so its elements never move once pushed.
//!
//! Ordered containers take their ordering as a [`Compare`](collections::traits::Compare) policy
//! (a strict weak ordering through `less` alone) rather than requiring [`Ord`].
//!
//! # Error Handling
//! Specifically for a collections library, it is more ergonomic for some functions to panic,
//! because users don't want to be forced to handle an error every time they index into a
//! container. Because of this, every checked accessor comes in up to three forms:
//! - `at(i)`, returning a [`Result`] with a strongly typed error that implements
//!   [`Error`](std::error::Error),
//! - `container[i]`, which panics with the same error's message,
//! - `unsafe fn get_unchecked(i)`, which skips the check entirely.
//!
//! Removing from an empty container returns [`None`] and inserting a duplicate into a set or map
//! returns `false`, neither of which is treated as an error.
//!
//! # Logging
//! Structural events, such as a deque's directory growing or a hash table rehashing, are reported
//! through the [`log`] facade at `debug` level (and `trace` for vector reallocation). The crate
//! never installs a logger itself.
//!
//! # Dependencies
//! This library doesn't use [`Vec`] to implement any of its containers. It depends on `derive_more`
//! for error and variant boilerplate and on `log` for diagnostics.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
