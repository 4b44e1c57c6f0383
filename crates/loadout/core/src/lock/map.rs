//! Slot → locked entries, mutated only by producing replacement maps.

use std::collections::BTreeMap;

use super::entry::{LockKind, LockedItem, toggle_locked_item};
use crate::types::{ArmorItem, Burn, Plug, PlugHash, Slot};

/// The user's lock state.
///
/// Every operation returns a new map and leaves `self` untouched. A slot whose
/// list becomes empty is removed, so a present slot always holds at least one
/// entry. Slots iterate in canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LockMap {
    slots: BTreeMap<Slot, Vec<LockedItem>>,
}

impl LockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from slot lists, dropping empty lists.
    pub fn from_slots(slots: impl IntoIterator<Item = (Slot, Vec<LockedItem>)>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .filter(|(_, entries)| !entries.is_empty())
                .collect(),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&[LockedItem]> {
        self.slots.get(&slot).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[LockedItem])> {
        self.slots
            .iter()
            .map(|(slot, entries)| (*slot, entries.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Locked perks of a slot, in insertion order.
    pub fn perks(&self, slot: Slot) -> impl Iterator<Item = &Plug> {
        self.get(slot)
            .unwrap_or(&[])
            .iter()
            .filter_map(LockedItem::as_perk)
    }

    /// Locked burns of a slot, in insertion order.
    pub fn burns(&self, slot: Slot) -> impl Iterator<Item = Burn> {
        self.get(slot)
            .unwrap_or(&[])
            .iter()
            .filter_map(LockedItem::as_burn)
    }

    /// Replaces one slot's list; `None` removes the slot.
    #[must_use]
    pub fn with_slot(&self, slot: Slot, entries: Option<Vec<LockedItem>>) -> Self {
        let mut next = self.clone();
        match entries {
            Some(entries) if !entries.is_empty() => {
                next.slots.insert(slot, entries);
            }
            _ => {
                next.slots.remove(&slot);
            }
        }
        next
    }

    /// Applies [`toggle_locked_item`] to one slot.
    #[must_use]
    pub fn toggle(&self, entry: LockedItem, slot: Slot) -> Self {
        self.with_slot(slot, toggle_locked_item(entry, self.get(slot)))
    }

    /// Appends an exact-item lock to the item's slot.
    #[must_use]
    pub fn set_exact_item(&self, item: ArmorItem) -> Self {
        self.append(item.slot, LockedItem::Item(item))
    }

    /// Appends an exclusion to the item's slot.
    #[must_use]
    pub fn set_excluded_item(&self, item: ArmorItem) -> Self {
        self.append(item.slot, LockedItem::Exclude(item))
    }

    fn append(&self, slot: Slot, entry: LockedItem) -> Self {
        let mut next = self.clone();
        next.slots.entry(slot).or_default().push(entry);
        next
    }

    /// Removes the exact-item lock for `item` from its slot.
    #[must_use]
    pub fn remove_locked_item(&self, item: &ArmorItem) -> Self {
        self.retain_in(item.slot, |entry| {
            !matches!(entry, LockedItem::Item(locked) if locked.id == item.id)
        })
    }

    /// Removes the exclusion for `item` from its slot.
    #[must_use]
    pub fn remove_excluded_item(&self, item: &ArmorItem) -> Self {
        self.retain_in(item.slot, |entry| {
            !matches!(entry, LockedItem::Exclude(excluded) if excluded.id == item.id)
        })
    }

    /// Removes a locked perk from every slot.
    #[must_use]
    pub fn remove_locked_perk(&self, hash: PlugHash) -> Self {
        self.retain_all(|entry| !matches!(entry, LockedItem::Perk(plug) if plug.hash == hash))
    }

    /// Removes a locked burn from every slot.
    #[must_use]
    pub fn remove_locked_burn(&self, burn: Burn) -> Self {
        self.retain_all(|entry| !matches!(entry, LockedItem::Burn(locked) if *locked == burn))
    }

    /// Removes `entry`, dispatching on its kind. Entries of other kinds stay.
    #[must_use]
    pub fn remove_entry(&self, entry: &LockedItem) -> Self {
        match entry {
            LockedItem::Item(item) => self.remove_locked_item(item),
            LockedItem::Exclude(item) => self.remove_excluded_item(item),
            LockedItem::Perk(plug) => self.remove_locked_perk(plug.hash),
            LockedItem::Burn(burn) => self.remove_locked_burn(*burn),
        }
    }

    fn retain_in(&self, slot: Slot, keep: impl Fn(&LockedItem) -> bool) -> Self {
        let mut next = self.clone();
        if let Some(entries) = next.slots.get_mut(&slot) {
            entries.retain(|entry| keep(entry));
            if entries.is_empty() {
                next.slots.remove(&slot);
            }
        }
        next
    }

    fn retain_all(&self, keep: impl Fn(&LockedItem) -> bool) -> Self {
        let mut next = self.clone();
        for entries in next.slots.values_mut() {
            entries.retain(|entry| keep(entry));
        }
        next.slots.retain(|_, entries| !entries.is_empty());
        next
    }

    /// Pins every equipped armor item, replacing those slots' lists.
    ///
    /// Slots with no equipped armor keep their current entries.
    #[must_use]
    pub fn lock_equipped<'a>(&self, items: impl IntoIterator<Item = &'a ArmorItem>) -> Self {
        let mut next = self.clone();
        for item in items {
            if item.equipped && item.slot.is_armor() {
                next.slots
                    .insert(item.slot, vec![LockedItem::Item(item.clone())]);
            }
        }
        next
    }

    /// Every entry grouped by kind.
    ///
    /// Item and exclusion lists are ordered by slot; perk and burn lists keep
    /// slot-then-insertion order.
    pub fn grouped_by_kind(&self) -> BTreeMap<LockKind, Vec<&LockedItem>> {
        let mut grouped: BTreeMap<LockKind, Vec<&LockedItem>> = BTreeMap::new();
        for entries in self.slots.values() {
            for entry in entries {
                grouped.entry(entry.kind()).or_default().push(entry);
            }
        }
        for (kind, entries) in grouped.iter_mut() {
            if matches!(kind, LockKind::Item | LockKind::Exclude) {
                entries.sort_by_key(|entry| entry.as_armor().map(|item| item.slot));
            }
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helmet(id: u64) -> ArmorItem {
        ArmorItem::new(id, id as u32, Slot::Helmet, 600)
    }

    fn perk(hash: u32) -> Plug {
        Plug::new(hash, format!("perk {hash}"))
    }

    #[test]
    fn set_exact_and_excluded_items_keep_other_entries() {
        let map = LockMap::new()
            .toggle(LockedItem::Perk(perk(1)), Slot::Helmet)
            .set_excluded_item(helmet(2))
            .set_exact_item(helmet(3));

        assert_eq!(
            map.get(Slot::Helmet).unwrap(),
            &[
                LockedItem::Perk(perk(1)),
                LockedItem::Exclude(helmet(2)),
                LockedItem::Item(helmet(3)),
            ]
        );
    }

    #[test]
    fn removing_an_item_lock_leaves_exclusion_of_same_item() {
        let map = LockMap::new()
            .set_exact_item(helmet(2))
            .set_excluded_item(helmet(2));

        let map = map.remove_locked_item(&helmet(2));
        assert_eq!(
            map.get(Slot::Helmet).unwrap(),
            &[LockedItem::Exclude(helmet(2))]
        );

        let map = map.remove_excluded_item(&helmet(2));
        assert!(map.get(Slot::Helmet).is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn perk_and_burn_removal_scans_every_slot() {
        let map = LockMap::new()
            .toggle(LockedItem::Perk(perk(1)), Slot::Helmet)
            .toggle(LockedItem::Perk(perk(1)), Slot::ClassItem)
            .toggle(LockedItem::Burn(Burn::Arc), Slot::ClassItem)
            .toggle(LockedItem::Burn(Burn::Arc), Slot::Legs);

        let without_perk = map.remove_locked_perk(PlugHash(1));
        assert!(without_perk.get(Slot::Helmet).is_none());
        assert_eq!(
            without_perk.get(Slot::ClassItem).unwrap(),
            &[LockedItem::Burn(Burn::Arc)]
        );

        let without_burn = without_perk.remove_entry(&LockedItem::Burn(Burn::Arc));
        assert!(without_burn.is_empty());

        // The receiver is never touched.
        assert_eq!(map.perks(Slot::ClassItem).count(), 1);
    }

    #[test]
    fn lock_equipped_merges_over_existing_slots() {
        let equipped = helmet(5).equipped();
        let unequipped = ArmorItem::new(6, 6, Slot::Chest, 600);
        let ghost = ArmorItem::new(7, 7, Slot::Ghost, 600).equipped();

        let map = LockMap::new()
            .toggle(LockedItem::Perk(perk(1)), Slot::Helmet)
            .toggle(LockedItem::Perk(perk(2)), Slot::Legs)
            .lock_equipped([&equipped, &unequipped, &ghost]);

        assert_eq!(
            map.get(Slot::Helmet).unwrap(),
            &[LockedItem::Item(equipped.clone())]
        );
        assert_eq!(map.perks(Slot::Legs).count(), 1);
        assert!(map.get(Slot::Chest).is_none());
        assert!(map.get(Slot::Ghost).is_none());
    }

    #[test]
    fn grouped_by_kind_orders_items_by_slot() {
        let legs = ArmorItem::new(1, 1, Slot::Legs, 600);
        let chest = ArmorItem::new(2, 2, Slot::Chest, 600);
        let map = LockMap::new()
            .set_exact_item(legs.clone())
            .set_exact_item(chest.clone())
            .toggle(LockedItem::Perk(perk(9)), Slot::Ghost);

        let grouped = map.grouped_by_kind();
        let items: Vec<_> = grouped[&LockKind::Item]
            .iter()
            .filter_map(|entry| entry.as_armor())
            .map(|item| item.id)
            .collect();
        assert_eq!(items, vec![chest.id, legs.id]);
        assert_eq!(grouped[&LockKind::Perk].len(), 1);
        assert!(!grouped.contains_key(&LockKind::Burn));
    }

    #[test]
    fn perk_toggle_keeps_a_pinned_item() {
        let map = LockMap::new()
            .set_exact_item(helmet(1))
            .toggle(LockedItem::Perk(perk(4)), Slot::Helmet);

        assert_eq!(
            map.get(Slot::Helmet).unwrap(),
            &[LockedItem::Item(helmet(1)), LockedItem::Perk(perk(4))]
        );
    }

    #[test]
    fn with_slot_none_removes_slot() {
        let map = LockMap::new().toggle(LockedItem::Burn(Burn::Solar), Slot::Chest);
        assert!(map.with_slot(Slot::Chest, None).is_empty());
        assert!(map.with_slot(Slot::Chest, Some(Vec::new())).is_empty());
    }
}
