use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the value, panicking with the [`Display`](std::fmt::Display) message of the error
    /// itself rather than its debug representation. Used by the panicking counterparts of checked
    /// accessors, e.g. `deque[i]` for [`BlockDeque::at`](crate::collections::deque::BlockDeque::at).
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
