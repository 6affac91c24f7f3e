//! A binary heap [`PriorityQueue`], ordered by a [`Compare`](super::traits::Compare) policy.

mod priority_queue;
mod tests;

pub use priority_queue::*;
