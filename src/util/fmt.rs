use std::fmt::{self, Debug, Formatter};

/// Writes the contained string as-is when debug formatted, so that layout dumps don't get quoted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Debug formats a collection slot, writing `-` for an empty slot.
pub fn debug_slot<T: Debug>(slot: Option<T>) -> DebugRaw {
    DebugRaw(match slot {
        Some(value) => format!("{value:?}"),
        None => "-".into(),
    })
}
