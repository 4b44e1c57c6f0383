//! Locked-item entries: user constraints attached to a slot.

use crate::types::{ArmorItem, Burn, ItemId, Plug, PlugHash};

/// A user constraint on what may fill a slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LockedItem {
    /// Pin this exact item to the slot.
    Item(ArmorItem),
    /// Whatever fills the slot must offer this perk.
    Perk(Plug),
    /// Whatever fills the slot must have this damage affinity.
    Burn(Burn),
    /// Never use this item.
    Exclude(ArmorItem),
}

/// Discriminant of a [`LockedItem`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LockKind {
    Item,
    Perk,
    Burn,
    Exclude,
}

/// Stable identity of a [`LockedItem`], used for de-duplication and removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockKey {
    Item(ItemId),
    Perk(PlugHash),
    Burn(Burn),
    Exclude(ItemId),
}

impl LockKey {
    pub const fn kind(&self) -> LockKind {
        match self {
            LockKey::Item(_) => LockKind::Item,
            LockKey::Perk(_) => LockKind::Perk,
            LockKey::Burn(_) => LockKind::Burn,
            LockKey::Exclude(_) => LockKind::Exclude,
        }
    }
}

impl LockedItem {
    pub fn kind(&self) -> LockKind {
        self.key().kind()
    }

    pub fn key(&self) -> LockKey {
        match self {
            LockedItem::Item(item) => LockKey::Item(item.id),
            LockedItem::Perk(plug) => LockKey::Perk(plug.hash),
            LockedItem::Burn(burn) => LockKey::Burn(*burn),
            LockedItem::Exclude(item) => LockKey::Exclude(item.id),
        }
    }

    pub fn as_perk(&self) -> Option<&Plug> {
        match self {
            LockedItem::Perk(plug) => Some(plug),
            _ => None,
        }
    }

    pub fn as_burn(&self) -> Option<Burn> {
        match self {
            LockedItem::Burn(burn) => Some(*burn),
            _ => None,
        }
    }

    /// The armor item for `Item` and `Exclude` entries.
    pub fn as_armor(&self) -> Option<&ArmorItem> {
        match self {
            LockedItem::Item(item) | LockedItem::Exclude(item) => Some(item),
            _ => None,
        }
    }
}

/// Adds or removes `entry` in a slot's list, returning the replacement list.
///
/// When the slot holds nothing but one exact-item lock and `entry` is also an
/// exact-item lock, the same item clears the slot and a different item
/// replaces the pin. In every other case the entry is removed when an entry
/// with the same identity exists and appended when it does not, so perks,
/// burns, and exclusions stack alongside a pin. `None` means the slot is now
/// empty.
pub fn toggle_locked_item(
    entry: LockedItem,
    current: Option<&[LockedItem]>,
) -> Option<Vec<LockedItem>> {
    let current = current.unwrap_or(&[]);

    if let ([LockedItem::Item(pinned)], LockedItem::Item(item)) = (current, &entry) {
        let same_item = item.id == pinned.id;
        return (!same_item).then(|| vec![entry]);
    }

    let key = entry.key();
    let mut next = current.to_vec();
    match next.iter().position(|existing| existing.key() == key) {
        Some(index) => {
            next.remove(index);
        }
        None => next.push(entry),
    }

    (!next.is_empty()).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Slot;

    fn perk(hash: u32) -> LockedItem {
        LockedItem::Perk(Plug::new(hash, format!("perk {hash}")))
    }

    fn pin(id: u64) -> LockedItem {
        LockedItem::Item(ArmorItem::new(id, id as u32, Slot::Helmet, 600))
    }

    #[test]
    fn toggling_twice_on_empty_slot_clears_it() {
        let once = toggle_locked_item(perk(1), None);
        assert_eq!(once, Some(vec![perk(1)]));

        let twice = toggle_locked_item(perk(1), once.as_deref());
        assert_eq!(twice, None);
    }

    #[test]
    fn toggle_appends_distinct_perks_and_burns() {
        let list = toggle_locked_item(perk(1), None);
        let list = toggle_locked_item(LockedItem::Burn(Burn::Void), list.as_deref());
        let list = toggle_locked_item(perk(2), list.as_deref());
        assert_eq!(
            list,
            Some(vec![perk(1), LockedItem::Burn(Burn::Void), perk(2)])
        );

        let list = toggle_locked_item(perk(1), list.as_deref());
        assert_eq!(list, Some(vec![LockedItem::Burn(Burn::Void), perk(2)]));
    }

    #[test]
    fn pinned_item_is_cleared_by_same_item_and_replaced_by_another() {
        let pinned = vec![pin(7)];
        assert_eq!(toggle_locked_item(pin(7), Some(pinned.as_slice())), None);
        assert_eq!(
            toggle_locked_item(pin(8), Some(pinned.as_slice())),
            Some(vec![pin(8)])
        );
    }

    #[test]
    fn perks_and_burns_stack_on_a_pinned_slot() {
        let pinned = vec![pin(7)];
        let list = toggle_locked_item(perk(1), Some(pinned.as_slice()));
        assert_eq!(list, Some(vec![pin(7), perk(1)]));

        let list = toggle_locked_item(LockedItem::Burn(Burn::Arc), list.as_deref());
        assert_eq!(list, Some(vec![pin(7), perk(1), LockedItem::Burn(Burn::Arc)]));

        let list = toggle_locked_item(perk(1), list.as_deref());
        assert_eq!(list, Some(vec![pin(7), LockedItem::Burn(Burn::Arc)]));
    }

    #[test]
    fn unpinning_keeps_other_entries() {
        let excluded = LockedItem::Exclude(ArmorItem::new(8, 8, Slot::Helmet, 600));
        let list = vec![pin(7), excluded.clone()];

        assert_eq!(
            toggle_locked_item(pin(7), Some(list.as_slice())),
            Some(vec![excluded.clone()])
        );
        // With more than one entry a second pin is added, not swapped in.
        assert_eq!(
            toggle_locked_item(pin(9), Some(list.as_slice())),
            Some(vec![pin(7), excluded, pin(9)])
        );
    }

    #[test]
    fn exclusion_toggles_beside_a_single_pin() {
        let excluded = LockedItem::Exclude(ArmorItem::new(8, 8, Slot::Helmet, 600));
        let pinned = vec![pin(7)];
        assert_eq!(
            toggle_locked_item(excluded.clone(), Some(pinned.as_slice())),
            Some(vec![pin(7), excluded])
        );
    }

    #[test]
    fn keys_distinguish_kinds_with_equal_payloads() {
        let item = ArmorItem::new(3, 3, Slot::Legs, 600);
        let locked = LockedItem::Item(item.clone());
        let excluded = LockedItem::Exclude(item);
        assert_ne!(locked.key(), excluded.key());
        assert_eq!(locked.kind(), LockKind::Item);
        assert_eq!(excluded.kind(), LockKind::Exclude);
    }
}
