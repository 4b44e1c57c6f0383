//! Asynchronous abstraction for choosing an item to lock or exclude.
//!
//! Planner users plug in [`ItemPicker`] implementations so the session can
//! work with an interactive sheet, command-line arguments, or test fixtures.
use std::fmt;

use async_trait::async_trait;
use loadout_core::{ArmorItem, ClassType, ItemId, Slot};

use super::errors::PickError;

/// What the picked item will be used for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickPurpose {
    Lock,
    Exclude,
}

impl fmt::Display for PickPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PickPurpose::Lock => "lock",
            PickPurpose::Exclude => "exclude",
        };
        write!(f, "{}", label)
    }
}

/// Everything a picker needs to present a choice.
#[derive(Debug, Clone)]
pub struct PickRequest {
    pub purpose: PickPurpose,
    pub class: ClassType,
    pub slot: Slot,
    /// Every instance the class can equip in the slot.
    pub candidates: Vec<ArmorItem>,
}

/// Trait for choosing one item out of a slot's candidates.
///
/// Different implementations can handle:
/// - Interactive selection sheets
/// - Items named on the command line
/// - Testing fixtures
#[async_trait]
pub trait ItemPicker: Send + Sync {
    /// Choose an item, or report [`PickError::Cancelled`] when the user backs
    /// out.
    async fn pick(&self, request: PickRequest) -> Result<ArmorItem, PickError>;
}

/// A picker that answers with a preset item id.
///
/// Cancels when no id is set and fails when the id is not a candidate.
#[derive(Debug, Clone, Default)]
pub struct PresetPicker {
    id: Option<ItemId>,
}

impl PresetPicker {
    pub fn new(id: ItemId) -> Self {
        Self { id: Some(id) }
    }

    /// A picker that always cancels.
    pub fn cancelling() -> Self {
        Self { id: None }
    }
}

#[async_trait]
impl ItemPicker for PresetPicker {
    async fn pick(&self, request: PickRequest) -> Result<ArmorItem, PickError> {
        let id = self.id.ok_or(PickError::Cancelled)?;
        request
            .candidates
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| PickError::Failed(format!("no {} item with id {}", request.slot, id.0)))
    }
}
