//! Lock state: what the user pinned, required, or excluded per slot.
//!
//! Lock maps are values. Mutations return replacement maps so the owner can
//! install them through a single setter.

mod entry;
mod map;

pub use entry::{LockKey, LockKind, LockedItem, toggle_locked_item};
pub use map::LockMap;
