//! Turning generated sets into concrete loadouts.
//!
//! A generated set may tentatively hold exotic candidates in several slots.
//! A concrete loadout may wear at most one exotic, so resolution substitutes
//! legendary alternatives wherever needed.

use crate::product::cartesian_product;
use crate::types::{ArmorItem, ArmorSet};

/// Floor of the mean base power of `items`; zero for an empty list.
pub fn power_for_items<'a>(items: impl IntoIterator<Item = &'a ArmorItem>) -> u32 {
    let (sum, count) = items
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), item| {
            (sum + u64::from(item.base_power), count + 1)
        });
    if count == 0 {
        return 0;
    }
    (sum / count) as u32
}

/// Power of a set's first valid loadout, or zero when none exists.
pub fn set_power(set: &ArmorSet) -> u32 {
    first_valid_set(set).map_or(0, |items| power_for_items(items))
}

/// Finds one concrete loadout wearing at most one exotic.
///
/// With at most one slot whose canonical item is exotic, the canonical items
/// are returned unchanged. Otherwise each exotic slot in turn, weakest first,
/// is kept while every other exotic slot falls back to its first non-exotic
/// candidate. The first assignment that fills every slot wins; `None` when no
/// choice of kept exotic works.
pub fn first_valid_set(set: &ArmorSet) -> Option<Vec<&ArmorItem>> {
    let mut exotic_slots: Vec<usize> = set
        .armor
        .iter()
        .enumerate()
        .filter(|(_, items)| items.first().is_some_and(ArmorItem::is_exotic))
        .map(|(index, _)| index)
        .collect();

    if exotic_slots.len() <= 1 {
        return set.armor.iter().map(|items| items.first()).collect();
    }

    exotic_slots.sort_by_key(|&index| set.armor[index][0].base_power);

    for _ in 0..exotic_slots.len() {
        let kept = exotic_slots.remove(0);
        let attempt: Option<Vec<&ArmorItem>> = set
            .armor
            .iter()
            .enumerate()
            .map(|(index, items)| {
                if exotic_slots.contains(&index) {
                    items.iter().find(|item| !item.is_exotic())
                } else {
                    items.first()
                }
            })
            .collect();
        if attempt.is_some() {
            return attempt;
        }
        exotic_slots.push(kept);
    }

    None
}

/// Every concrete loadout of a set wearing at most one exotic, weakest first.
///
/// Loadouts with equal power keep enumeration order.
pub fn valid_sets(set: &ArmorSet) -> Vec<Vec<&ArmorItem>> {
    let mut loadouts: Vec<Vec<&ArmorItem>> = cartesian_product(&set.armor)
        .filter(|loadout| loadout.iter().filter(|item| item.is_exotic()).count() <= 1)
        .collect();
    loadouts.sort_by_key(|loadout| power_for_items(loadout.iter().copied()));
    loadouts
}

/// Number of loadouts [`valid_sets`] would return, computed without
/// enumerating them.
///
/// All-legendary loadouts plus, for each slot, the loadouts whose single
/// exotic sits in that slot.
pub fn num_valid_sets(set: &ArmorSet) -> usize {
    let counts: Vec<(usize, usize)> = set
        .armor
        .iter()
        .map(|items| {
            let exotics = items.iter().filter(|item| item.is_exotic()).count();
            (exotics, items.len() - exotics)
        })
        .collect();

    let legendary_only: usize = counts.iter().map(|&(_, legendary)| legendary).product();

    let one_exotic: usize = counts
        .iter()
        .enumerate()
        .filter(|(_, (exotics, _))| *exotics > 0)
        .map(|(slot, _)| {
            counts
                .iter()
                .enumerate()
                .map(|(index, &(exotics, legendary))| if index == slot { exotics } else { legendary })
                .product::<usize>()
        })
        .sum();

    legendary_only + one_exotic
}
