//! Error types surfaced by the planner API.
use thiserror::Error;

use loadout_core::{ConfigError, ItemId, Slot};

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner requires an inventory before building")]
    MissingInventory,

    #[error("invalid builder config")]
    Config(#[from] ConfigError),

    #[error("item picker failed")]
    Pick(#[source] PickError),

    #[error("picked item {id:?} belongs in {found}, expected {expected}")]
    SlotMismatch {
        id: ItemId,
        expected: Slot,
        found: Slot,
    },

    #[error("picked item {id:?} is not in the {slot} candidates")]
    UnknownItem { id: ItemId, slot: Slot },
}

/// Outcome of an item picker that did not produce an item.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PickError {
    /// The user dismissed the picker. Not a failure.
    #[error("pick cancelled")]
    Cancelled,

    #[error("pick failed: {0}")]
    Failed(String),
}
