//! Deterministic armor-set planning shared by the planner and offline tools.
//!
//! `loadout-core` holds the data model (items, slots, stats, lock state) and
//! the pure algorithms over it: set generation, exotic resolution, filtering
//! and ordering, and perk reachability. Nothing here performs I/O; the
//! planner crate owns state and caching, and content loading lives in
//! `loadout-content`.
pub mod config;
pub mod error;
pub mod filter;
pub mod generate;
pub mod lock;
#[cfg(feature = "serde")]
pub mod memo;
pub mod perks;
pub mod product;
pub mod resolve;
pub mod types;

pub use config::BuilderConfig;
pub use error::ConfigError;
pub use filter::{filter_generated_sets, power_level_options, stat_ranges};
pub use generate::{
    ItemCandidate, StatGroup, generate_sets, group_by_stat_mix, matches_locks, slot_candidates,
};
pub use lock::{LockKey, LockKind, LockMap, LockedItem, toggle_locked_item};
#[cfg(feature = "serde")]
pub use memo::{Memo, MemoKey, structural_key};
pub use perks::{
    PerkCatalog, SlotPerks, alternate_perk, filtered_perks, is_selectable_socket, perk_catalog,
    search_perks, selectable_plugs,
};
pub use product::{CartesianProduct, cartesian_product};
pub use resolve::{first_valid_set, num_valid_sets, power_for_items, set_power, valid_sets};
pub use types::{
    ArmorItem, ArmorSet, Burn, ClassType, IdentityGroups, InvestmentStat, Inventory, ItemHash,
    ItemId, MinMax, Plug, PlugHash, Slot, SlotGroups, Socket, StatFilters, StatKind, StatVector,
    TierType, bonus_vector,
};
