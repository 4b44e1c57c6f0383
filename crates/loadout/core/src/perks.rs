//! Perk pickers: which plugs are worth offering, and which remain reachable
//! under the current locks.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::lock::LockMap;
use crate::types::{ArmorItem, ClassType, Inventory, Plug, Slot, Socket, StatVector, TierType};

/// Plug categories never offered as perks: stat perks, the three damage
/// resistances, shaders, ornaments, and the empty masterwork slot.
pub const UNWANTED_PLUG_CATEGORIES: [u32; 7] = [
    3313201758, 1514141499, 1514141501, 1514141500, 2973005342, 3356843615, 2457930460,
];

/// Item category of exotic armor ornaments.
pub const EXOTIC_ORNAMENT_ITEM_CATEGORY: u32 = 1742617626;

/// Plug category of intrinsic (archetype) perks; only exotic ones are kept.
pub const INTRINSIC_PLUG_CATEGORY: u32 = 1744546145;

/// Plug category of mod slots; the basic-tier plug is the empty slot.
pub const MOD_PLUG_CATEGORY: u32 = 3347429529;

/// Perks per slot, as offered to one class.
pub type SlotPerks = BTreeMap<Slot, Vec<Plug>>;

/// Perks per class and slot.
pub type PerkCatalog = BTreeMap<ClassType, SlotPerks>;

/// True when a socket's options belong in a perk picker.
///
/// The decision follows the socket's selected plug; a socket without one is
/// never shown.
pub fn is_selectable_socket(socket: &Socket) -> bool {
    let Some(plug) = &socket.plug else {
        return false;
    };
    if UNWANTED_PLUG_CATEGORIES.contains(&plug.plug_category)
        || plug.item_categories.contains(&EXOTIC_ORNAMENT_ITEM_CATEGORY)
    {
        return false;
    }
    if plug.plug_category == INTRINSIC_PLUG_CATEGORY && plug.tier_type != TierType::Exotic {
        return false;
    }
    !(plug.plug_category == MOD_PLUG_CATEGORY && plug.tier_type == TierType::Basic)
}

/// Every option of an item's selectable sockets.
pub fn selectable_plugs(item: &ArmorItem) -> impl Iterator<Item = &Plug> {
    item.sockets()
        .iter()
        .filter(|socket| is_selectable_socket(socket))
        .flat_map(|socket| &socket.plug_options)
}

/// Perks still reachable in each slot that has locked perks.
///
/// For such a slot, the result holds every selectable plug of every socketed
/// item that offers all of the slot's locked perks among its selectable
/// plugs. Slots without locked perks are absent.
pub fn filtered_perks(
    class: ClassType,
    lock_map: &LockMap,
    inventory: &Inventory,
) -> BTreeMap<Slot, BTreeSet<Plug>> {
    let mut filtered = BTreeMap::new();
    let Some(slots) = inventory.class(class) else {
        return filtered;
    };

    for (&slot, identities) in slots {
        let locked: Vec<&Plug> = lock_map.perks(slot).collect();
        if locked.is_empty() {
            continue;
        }

        let reachable: &mut BTreeSet<Plug> = filtered.entry(slot).or_default();
        for item in identities.values().flatten() {
            if item.sockets.is_none() {
                continue;
            }
            let plugs: Vec<&Plug> = selectable_plugs(item).collect();
            let offers_all = locked
                .iter()
                .all(|perk| plugs.iter().any(|plug| plug.hash == perk.hash));
            if offers_all {
                reachable.extend(plugs.into_iter().cloned());
            }
        }
    }
    filtered
}

/// Builds the perk picker catalog from socketed armor and ghosts.
///
/// Class-agnostic items contribute to every playable class. Each slot's
/// list is de-duplicated by plug hash and sorted by tier (exotic first), then
/// by index, both descending.
pub fn perk_catalog<'a>(items: impl IntoIterator<Item = &'a ArmorItem>) -> PerkCatalog {
    let mut catalog = PerkCatalog::new();
    let mut seen: HashSet<(ClassType, Slot, u32)> = HashSet::new();

    for item in items {
        if item.sockets.is_none() {
            continue;
        }
        for &class in item.class_type.usable_by() {
            let perks = catalog
                .entry(class)
                .or_default()
                .entry(item.slot)
                .or_default();
            for plug in selectable_plugs(item) {
                if seen.insert((class, item.slot, plug.hash.0)) {
                    perks.push(plug.clone());
                }
            }
        }
    }

    for perks in catalog.values_mut().flat_map(BTreeMap::values_mut) {
        perks.sort_by_key(|plug| (Reverse(plug.tier_type), Reverse(plug.index)));
    }
    catalog
}

/// Case-insensitive perk-name search over one class's catalog.
///
/// The query is trimmed; slots without a match are dropped.
pub fn search_perks<'a>(perks: &'a SlotPerks, query: &str) -> Vec<(Slot, Vec<&'a Plug>)> {
    let needle = query.trim().to_lowercase();
    perks
        .iter()
        .map(|(&slot, plugs)| {
            let hits = plugs
                .iter()
                .filter(|plug| plug.name.to_lowercase().contains(&needle))
                .collect::<Vec<_>>();
            (slot, hits)
        })
        .filter(|(_, hits)| !hits.is_empty())
        .collect()
}

/// The unselected plug that gives `item` the stat mix `mix`, if any.
///
/// Used to highlight which stat perk a set expects the player to switch to.
pub fn alternate_perk<'a>(item: &'a ArmorItem, mix: &StatVector) -> Option<&'a Plug> {
    item.sockets()
        .iter()
        .filter(|socket| socket.plug_options.len() > 1)
        .flat_map(|socket| {
            socket
                .plug_options
                .iter()
                .filter(move |plug| socket.plug.as_ref() != Some(*plug))
        })
        .filter(|plug| !plug.investment_stats.is_empty())
        .find(|plug| item.stats + plug.stat_bonus() == *mix)
}
