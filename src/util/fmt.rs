use std::fmt::{self, Debug, Formatter};

/// Debug-prints a pre-rendered string without quotes, for nesting custom layouts inside
/// [`Formatter::debug_list`] and friends.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
