//! Generated armor sets.

use super::item::ArmorItem;
use super::slot::Slot;
use super::stats::StatVector;

/// A stat mix of loadouts: every armor slot holds a list of interchangeable
/// items that contribute the same stats.
///
/// `armor` and `stat_choices` are indexed by [`Slot::ARMOR`] position. The
/// first item of each list is the slot's canonical member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorSet {
    pub id: u32,
    pub armor: Vec<Vec<ArmorItem>>,
    /// Aggregate stats, clamped to the tier scale.
    pub stats: StatVector,
    pub stat_choices: Vec<StatVector>,
}

impl ArmorSet {
    /// Candidate list for an armor slot.
    pub fn slot(&self, slot: Slot) -> &[ArmorItem] {
        slot.armor_index()
            .and_then(|index| self.armor.get(index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first candidate of every slot.
    pub fn canonical(&self) -> impl Iterator<Item = &ArmorItem> {
        self.armor.iter().filter_map(|items| items.first())
    }

    /// Total tier: sum of the three aggregate stats.
    pub fn total_tier(&self) -> i32 {
        self.stats.total()
    }
}
