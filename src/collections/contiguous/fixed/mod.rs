mod fixed_array;
mod tests;

pub use fixed_array::*;
