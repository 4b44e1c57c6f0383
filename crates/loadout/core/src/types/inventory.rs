//! Read-only inventory snapshot partitioned by class, slot, and item identity.

use std::collections::BTreeMap;

use super::item::{ArmorItem, ItemHash, ItemId};
use super::slot::{ClassType, Slot};

/// Item identity → every copy of that item.
pub type IdentityGroups = BTreeMap<ItemHash, Vec<ArmorItem>>;

/// Slot → identity groups.
pub type SlotGroups = BTreeMap<Slot, IdentityGroups>;

/// Armor snapshot grouped class → slot → item identity → instances.
///
/// Class-agnostic items are listed under every playable class. Identities
/// iterate in ascending hash order and instances keep insertion order, so
/// everything derived from a snapshot is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    classes: BTreeMap<ClassType, SlotGroups>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a flat item list.
    pub fn from_items(items: impl IntoIterator<Item = ArmorItem>) -> Self {
        let mut inventory = Self::new();
        for item in items {
            inventory.insert(item);
        }
        inventory
    }

    /// Adds an item under every class that can equip it.
    pub fn insert(&mut self, item: ArmorItem) {
        for &class in item.class_type.usable_by() {
            self.classes
                .entry(class)
                .or_default()
                .entry(item.slot)
                .or_default()
                .entry(item.hash)
                .or_default()
                .push(item.clone());
        }
    }

    /// Slot groups for a class, `None` when the class has no items.
    pub fn class(&self, class: ClassType) -> Option<&SlotGroups> {
        self.classes.get(&class)
    }

    /// Identity groups for one slot of a class.
    pub fn slot(&self, class: ClassType, slot: Slot) -> Option<&IdentityGroups> {
        self.classes.get(&class)?.get(&slot)
    }

    /// Iterates every instance for a class in slot, identity, insertion order.
    pub fn items_for(&self, class: ClassType) -> impl Iterator<Item = &ArmorItem> {
        self.classes
            .get(&class)
            .into_iter()
            .flat_map(|slots| slots.values())
            .flat_map(|identities| identities.values())
            .flatten()
    }

    /// Finds an instance by id within a class.
    pub fn find(&self, class: ClassType, id: ItemId) -> Option<&ArmorItem> {
        self.items_for(class).find(|item| item.id == id)
    }

    /// Mean of the highest base power found in each armor slot.
    ///
    /// Ignores the exotic limit. Bounds the minimum-power selector; zero when
    /// any armor slot is empty.
    pub fn max_base_power(&self, class: ClassType) -> u32 {
        let Some(slots) = self.classes.get(&class) else {
            return 0;
        };
        let best: Vec<u32> = Slot::ARMOR
            .iter()
            .filter_map(|slot| {
                slots
                    .get(slot)?
                    .values()
                    .flatten()
                    .map(|item| item.base_power)
                    .max()
            })
            .collect();
        if best.len() < Slot::ARMOR.len() {
            return 0;
        }
        best.iter().sum::<u32>() / best.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
