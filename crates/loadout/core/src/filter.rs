//! Filtering and ordering of generated sets.

use std::cmp::Reverse;

use crate::config::BuilderConfig;
use crate::lock::LockMap;
use crate::resolve::set_power;
use crate::types::{ArmorSet, MinMax, Plug, StatFilters, StatKind};

/// Filters and orders generated sets for display.
///
/// 1. With a positive `minimum_power`, sets whose resolved power falls short
///    are dropped.
/// 2. Sets are ordered by total tier, then by each stat of `stat_order`,
///    highest first.
/// 3. Sets outside any stat range are dropped.
/// 4. For every slot with locked perks, in slot order, sets whose canonical
///    members offer those perks on more sockets move to the front.
///
/// Every sort is stable, so filtering an already filtered list keeps its
/// order.
pub fn filter_generated_sets(
    sets: &[ArmorSet],
    minimum_power: u32,
    lock_map: &LockMap,
    stat_filters: &StatFilters,
    stat_order: &[StatKind],
) -> Vec<ArmorSet> {
    let mut matched: Vec<&ArmorSet> = if minimum_power > 0 {
        sets.iter()
            .filter(|set| set_power(set) >= minimum_power)
            .collect()
    } else {
        sets.iter().collect()
    };

    matched.sort_by(|a, b| {
        stat_order.iter().fold(
            b.total_tier().cmp(&a.total_tier()),
            |ordering, &stat| ordering.then_with(|| b.stats[stat].cmp(&a.stats[stat])),
        )
    });

    if !stat_filters.is_full_range() {
        matched.retain(|set| stat_filters.accepts(&set.stats));
    }

    for (_, entries) in lock_map.iter() {
        let perks: Vec<&Plug> = entries.iter().filter_map(|entry| entry.as_perk()).collect();
        if perks.is_empty() {
            continue;
        }
        matched.sort_by_cached_key(|set| Reverse(matched_perk_sockets(set, &perks)));
    }

    matched.into_iter().cloned().collect()
}

/// Sockets across a set's canonical members that offer any of `perks`.
fn matched_perk_sockets(set: &ArmorSet, perks: &[&Plug]) -> usize {
    set.canonical()
        .flat_map(|item| item.sockets())
        .filter(|socket| perks.iter().any(|perk| socket.offers(perk.hash)))
        .count()
}

/// Observed range of every stat across `sets`.
///
/// Starts from the inverted range `{ min: 10, max: 0 }`, which is what an
/// empty input returns.
pub fn stat_ranges(sets: &[ArmorSet]) -> StatFilters {
    let empty = MinMax::new(BuilderConfig::MAX_TIER, 0);
    let mut ranges = StatFilters {
        mobility: empty,
        resilience: empty,
        recovery: empty,
    };
    for set in sets {
        for stat in StatKind::ALL {
            let range = ranges.range_mut(stat);
            range.min = range.min.min(set.stats[stat]);
            range.max = range.max.max(set.stats[stat]);
        }
    }
    ranges
}

/// Minimum-power choices, from `max_base_power` down to zero.
pub fn power_level_options(max_base_power: u32) -> Vec<u32> {
    (0..=max_base_power).rev().collect()
}
