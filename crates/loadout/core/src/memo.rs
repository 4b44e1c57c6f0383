//! Memoization keyed by structural input digests.
//!
//! Derived views (generated sets, filtered sets, reachable perks) are pure
//! functions of their inputs. A view is recomputed only when the SHA-256
//! digest of its bincode-serialized inputs changes.
//!
//! Requires the `serde` feature.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// SHA-256 digest identifying one set of inputs.
pub type MemoKey = [u8; 32];

/// Digest of `value`'s bincode encoding.
///
/// bincode is deterministic for a given value, so equal inputs always map to
/// the same key. Map-typed inputs must iterate in a stable order; every map
/// in this crate is a `BTreeMap`.
pub fn structural_key<T: Serialize + ?Sized>(value: &T) -> MemoKey {
    let mut hasher = Sha256::new();
    let bytes = bincode::serialize(value);
    // A failed encoding would alias every such input to one key.
    debug_assert!(bytes.is_ok(), "memo key input failed to serialize");
    if let Ok(bytes) = bytes {
        hasher.update(&bytes);
    }
    hasher.finalize().into()
}

/// Single-entry cache: the most recent key and the value computed for it.
#[derive(Clone, Debug)]
pub struct Memo<V> {
    entry: Option<(MemoKey, V)>,
}

impl<V> Default for Memo<V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<V> Memo<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the cached value, if any.
    pub fn key(&self) -> Option<&MemoKey> {
        self.entry.as_ref().map(|(key, _)| key)
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// The flag is `true` on a cache hit.
    pub fn get_or_compute(&mut self, key: MemoKey, compute: impl FnOnce() -> V) -> (&V, bool) {
        let hit = self.key() == Some(&key);
        if !hit {
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| (key, compute()));
        (&*value, hit)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::{LockMap, LockedItem};
    use crate::types::{ArmorItem, Burn, ClassType, Inventory, Plug, Slot, Socket};

    #[test]
    fn equal_inputs_share_a_key() {
        let a = LockMap::new().toggle(LockedItem::Burn(Burn::Arc), Slot::Chest);
        let b = LockMap::new().toggle(LockedItem::Burn(Burn::Arc), Slot::Chest);
        let c = LockMap::new().toggle(LockedItem::Burn(Burn::Void), Slot::Chest);

        assert_eq!(structural_key(&a), structural_key(&b));
        assert_ne!(structural_key(&a), structural_key(&c));
    }

    #[test]
    fn planner_inputs_encode_without_error() {
        let item = ArmorItem::new(1, 1, Slot::Helmet, 600)
            .for_class(ClassType::Hunter)
            .exotic("exotic_armor")
            .with_burn(Burn::Solar)
            .with_sockets(vec![Socket::with_options(vec![Plug::new(5, "perk")])]);
        let lock_map = LockMap::new()
            .set_exact_item(item.clone())
            .set_excluded_item(ArmorItem::new(2, 2, Slot::Helmet, 600))
            .toggle(LockedItem::Perk(Plug::new(5, "perk")), Slot::Helmet)
            .toggle(LockedItem::Burn(Burn::Solar), Slot::Helmet);
        let inventory = Inventory::from_items([item, ArmorItem::new(3, 3, Slot::Ghost, 600)]);

        assert!(bincode::serialize(&lock_map).is_ok());
        assert!(bincode::serialize(&inventory).is_ok());
        assert_ne!(structural_key(&inventory), structural_key(&Inventory::new()));
    }

    #[test]
    fn recomputes_only_when_key_changes() {
        let mut memo = Memo::new();
        let mut calls = 0;

        let first = structural_key(&(1u32, "sets"));
        let (value, hit) = memo.get_or_compute(first, || {
            calls += 1;
            10
        });
        assert_eq!((*value, hit), (10, false));

        let (value, hit) = memo.get_or_compute(first, || {
            calls += 1;
            20
        });
        assert_eq!((*value, hit), (10, true));

        let second = structural_key(&(2u32, "sets"));
        let (value, hit) = memo.get_or_compute(second, || {
            calls += 1;
            30
        });
        assert_eq!((*value, hit), (30, false));
        assert_eq!(calls, 2);

        memo.invalidate();
        assert!(memo.key().is_none());
    }
}
