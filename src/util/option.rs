use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps a value that the structure of a collection guarantees to be present, such as the
    /// grandparent of a red node whose parent is also red.
    ///
    /// Debug builds hit [`unreachable!`] on a `None`, release builds use
    /// [`unreachable_unchecked`](hint::unreachable_unchecked).
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees that None is impossible here.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
