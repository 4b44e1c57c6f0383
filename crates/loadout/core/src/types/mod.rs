//! Data model shared by the generator, filters, and lock state.

pub mod inventory;
pub mod item;
pub mod set;
pub mod slot;
pub mod stats;

pub use inventory::{IdentityGroups, Inventory, SlotGroups};
pub use item::{ArmorItem, Burn, ItemHash, ItemId, Plug, PlugHash, Socket, TierType};
pub use set::ArmorSet;
pub use slot::{ClassType, Slot};
pub use stats::{InvestmentStat, MinMax, StatFilters, StatKind, StatVector, bonus_vector};
