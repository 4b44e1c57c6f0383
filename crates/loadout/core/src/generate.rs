//! Candidate selection and armor-set generation.
//!
//! # Pipeline
//!
//! ```text
//! inventory[class][slot][identity] ──▶ lock constraints ──▶ slot candidates
//!        slot candidates ──▶ group instances by stat mix ──▶ stat groups
//!        stat groups × 5 armor slots ──▶ cartesian product ──▶ ArmorSet
//! ```
//!
//! Members of a stat group contribute identical stats, so swapping between
//! them never changes a set's totals. One set therefore stands for every
//! concrete loadout that picks one member per slot.

use std::collections::{BTreeMap, HashMap};

use crate::lock::{LockMap, LockedItem};
use crate::product::cartesian_product;
use crate::types::{ArmorItem, ArmorSet, ClassType, Inventory, ItemHash, Slot, StatVector};

/// One item identity that may fill a slot, with its usable copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCandidate {
    pub hash: ItemHash,
    pub instances: Vec<ArmorItem>,
}

/// Instances of one slot that share a stat mix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatGroup {
    pub mix: StatVector,
    pub items: Vec<ArmorItem>,
}

/// True when `item` satisfies every lock entry of its slot.
///
/// - exact-item locks restrict the slot to the pinned instances
/// - exclusions remove instances
/// - every locked perk must be offered by some socket
/// - with burn locks present, the item's burn must be one of them
pub fn matches_locks(item: &ArmorItem, entries: &[LockedItem]) -> bool {
    let mut pinned = entries
        .iter()
        .filter_map(|entry| match entry {
            LockedItem::Item(locked) => Some(locked.id),
            _ => None,
        })
        .peekable();
    if pinned.peek().is_some() && !pinned.any(|id| id == item.id) {
        return false;
    }

    let excluded = entries
        .iter()
        .any(|entry| matches!(entry, LockedItem::Exclude(locked) if locked.id == item.id));
    if excluded {
        return false;
    }

    let perks_offered = entries
        .iter()
        .filter_map(LockedItem::as_perk)
        .all(|perk| item.offers_plug(perk.hash));
    if !perks_offered {
        return false;
    }

    let mut burns = entries.iter().filter_map(LockedItem::as_burn).peekable();
    burns.peek().is_none() || item.burn.is_some_and(|burn| burns.any(|b| b == burn))
}

/// Candidate identities for every slot of a class, narrowed by the lock map.
///
/// Identities with no instance left after lock filtering are dropped. Slots
/// without any candidate are absent.
pub fn slot_candidates(
    inventory: &Inventory,
    class: ClassType,
    lock_map: &LockMap,
) -> BTreeMap<Slot, Vec<ItemCandidate>> {
    let mut candidates = BTreeMap::new();
    for slot in Slot::ALL {
        let Some(identities) = inventory.slot(class, slot) else {
            continue;
        };
        let entries = lock_map.get(slot).unwrap_or(&[]);
        let usable: Vec<ItemCandidate> = identities
            .iter()
            .filter_map(|(hash, instances)| {
                let instances: Vec<ArmorItem> = instances
                    .iter()
                    .filter(|item| matches_locks(item, entries))
                    .cloned()
                    .collect();
                (!instances.is_empty()).then_some(ItemCandidate {
                    hash: *hash,
                    instances,
                })
            })
            .collect();
        if !usable.is_empty() {
            candidates.insert(slot, usable);
        }
    }
    candidates
}

/// Groups a slot's instances by stat mix, in order of first appearance.
///
/// An instance with several mixes joins several groups.
pub fn group_by_stat_mix(candidates: &[ItemCandidate]) -> Vec<StatGroup> {
    let mut groups: Vec<StatGroup> = Vec::new();
    let mut positions: HashMap<StatVector, usize> = HashMap::new();
    for item in candidates.iter().flat_map(|c| &c.instances) {
        for mix in item.stat_mixes() {
            let position = *positions.entry(mix).or_insert_with(|| {
                groups.push(StatGroup {
                    mix,
                    items: Vec::new(),
                });
                groups.len() - 1
            });
            groups[position].items.push(item.clone());
        }
    }
    groups
}

/// Generates every stat-distinct armor set for a class.
///
/// Set ids count up from zero in generation order. Any armor slot without
/// candidates yields no sets.
pub fn generate_sets(inventory: &Inventory, class: ClassType, lock_map: &LockMap) -> Vec<ArmorSet> {
    let candidates = slot_candidates(inventory, class, lock_map);
    let groups: Vec<Vec<StatGroup>> = Slot::ARMOR
        .iter()
        .map(|slot| {
            candidates
                .get(slot)
                .map(|c| group_by_stat_mix(c))
                .unwrap_or_default()
        })
        .collect();

    cartesian_product(&groups)
        .enumerate()
        .map(|(id, combination)| {
            let stat_choices: Vec<StatVector> = combination.iter().map(|g| g.mix).collect();
            ArmorSet {
                id: id as u32,
                armor: combination.iter().map(|g| g.items.clone()).collect(),
                stats: stat_choices.iter().copied().sum::<StatVector>().clamped_to_tiers(),
                stat_choices,
            }
        })
        .collect()
}
